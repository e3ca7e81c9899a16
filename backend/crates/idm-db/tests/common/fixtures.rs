use idm_core::{AccountStatus, NewAccount};

/// Creates an active NewAccount whose email derives from the username
pub fn create_test_account(username: &str) -> NewAccount {
    NewAccount::active(
        username.to_string(),
        format!("{username}@example.com"),
        format!("$argon2id$v=19$m=1024,t=1,p=1$c2FsdA${username}"),
        format!("Display {username}"),
    )
}

pub fn create_disabled_account(username: &str) -> NewAccount {
    NewAccount {
        status: AccountStatus::Disabled,
        ..create_test_account(username)
    }
}
