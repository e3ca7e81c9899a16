use std::fmt;

use serde::{Deserialize, Serialize};

/// Authentication gate for an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    #[default]
    Active,
    Disabled,
}

impl AccountStatus {
    /// Persisted representation: 1 = active, 0 = disabled
    pub fn as_i64(&self) -> i64 {
        match self {
            Self::Active => 1,
            Self::Disabled => 0,
        }
    }

    /// Any value other than 1 is treated as disabled
    pub fn from_i64(value: i64) -> Self {
        if value == 1 {
            Self::Active
        } else {
            Self::Disabled
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }

    pub fn is_active(&self) -> bool {
        *self == Self::Active
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
