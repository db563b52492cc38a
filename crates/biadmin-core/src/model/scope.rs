use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Whose resources a list command enumerates.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Scope {
    /// Resources the caller has access to.
    #[default]
    Individual,
    /// Every resource in the tenant (requires admin rights).
    Organization,
}

impl Scope {
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Organization)
    }
}
