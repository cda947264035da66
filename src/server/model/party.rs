//! Which side of a rental the caller is on.

use serde::Deserialize;

/// Renter or owner side of a reservation, conversation or completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    #[default]
    Renter,
    #[serde(alias = "host")]
    Owner,
}

impl Party {
    /// Side of `user_id` given the two participants, `None` for outsiders.
    pub fn of(user_id: &str, renter_id: &str, owner_id: &str) -> Option<Self> {
        if user_id == renter_id {
            Some(Self::Renter)
        } else if user_id == owner_id {
            Some(Self::Owner)
        } else {
            None
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Renter => Self::Owner,
            Self::Owner => Self::Renter,
        }
    }
}
