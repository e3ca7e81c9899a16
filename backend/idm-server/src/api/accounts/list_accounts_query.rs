use serde::Deserialize;

/// `?page=&page_size=` kept as raw strings.
///
/// Values that do not parse as integers count as absent; the workflow
/// then coerces them to the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ListAccountsQuery {
    #[serde(default)]
    pub page: Option<String>,

    #[serde(default)]
    pub page_size: Option<String>,
}

impl ListAccountsQuery {
    pub fn page(&self) -> i64 {
        parse_or_zero(self.page.as_deref())
    }

    pub fn page_size(&self) -> i64 {
        parse_or_zero(self.page_size.as_deref())
    }
}

fn parse_or_zero(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(0)
}
