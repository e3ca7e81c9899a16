pub mod context;
pub mod error;
pub mod models;
pub mod store;

pub use context::cancellation::{CancellationSignal, CancellationSource, Cancelled};
pub use context::request_context::RequestContext;
pub use error::app_error::AppError;
pub use error::error_kind::ErrorKind;
pub use error::{Result, SUCCESS_CODE, SUCCESS_MESSAGE};
pub use error_location::ErrorLocation;
pub use models::account::Account;
pub use models::account_id::AccountId;
pub use models::account_page::AccountPage;
pub use models::account_status::AccountStatus;
pub use models::new_account::NewAccount;
pub use store::account_store::AccountStore;
pub use store::store_error::{StoreError, StoreResult, UniqueField};
