use crate::Account;

/// One page of accounts plus the echo of the effective paging parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountPage {
    pub accounts: Vec<Account>,
    /// Total accounts in the store, not just this page
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}
