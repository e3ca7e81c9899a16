pub mod account_service;
pub mod account_workflow;
pub mod paging;

pub use account_service::AccountService;
pub use account_workflow::{AccountWorkflow, Authenticated, ProfileUpdate, Registration};
pub use paging::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest};
