use crate::AccountDto;

use idm_core::AccountPage;

use serde::Serialize;

/// One page of accounts with the effective paging parameters
#[derive(Debug, Serialize)]
pub struct AccountListResponse {
    pub list: Vec<AccountDto>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl From<AccountPage> for AccountListResponse {
    fn from(p: AccountPage) -> Self {
        Self {
            list: p.accounts.into_iter().map(AccountDto::from).collect(),
            total: p.total,
            page: p.page,
            page_size: p.page_size,
        }
    }
}
