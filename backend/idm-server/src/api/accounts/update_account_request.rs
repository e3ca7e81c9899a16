use idm_account::ProfileUpdate;

use serde::Deserialize;

/// Profile changes; absent or empty fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAccountRequest {
    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub avatar_reference: Option<String>,
}

impl From<UpdateAccountRequest> for ProfileUpdate {
    fn from(r: UpdateAccountRequest) -> Self {
        Self {
            display_name: r.display_name,
            avatar_reference: r.avatar_reference,
        }
    }
}
