use idm_account::Registration;

use std::fmt;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    /// Unique login name (required)
    pub username: String,

    /// Unique email address (required)
    pub email: String,

    /// Plaintext password, hashed before it is stored (required)
    pub password: String,

    #[serde(default)]
    pub display_name: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(r: RegisterRequest) -> Self {
        Self {
            username: r.username,
            email: r.email,
            password: r.password,
            display_name: r.display_name.unwrap_or_default(),
        }
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}
