use serde::{Deserialize, Serialize};

/// The sovereign cloud hosting the Power BI tenant.
///
/// Determines the API host. Each environment exposes the same REST surface
/// under `/v1.0/myorg/` and `/v2.0/myorg/`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceEnvironment {
    /// Commercial cloud (`api.powerbi.com`).
    #[default]
    Public,
    /// US Government Community Cloud.
    UsGov,
    /// US Government Community Cloud High.
    UsGovHigh,
    /// US Department of Defense.
    UsGovMil,
    /// China (operated by 21Vianet).
    China,
    /// Germany.
    Germany,
}

impl ServiceEnvironment {
    /// Root URL of the REST API for this environment.
    pub fn api_root(self) -> &'static str {
        match self {
            Self::Public => "https://api.powerbi.com",
            Self::UsGov => "https://api.powerbigov.us",
            Self::UsGovHigh => "https://api.high.powerbigov.us",
            Self::UsGovMil => "https://api.mil.powerbigov.us",
            Self::China => "https://api.powerbi.cn",
            Self::Germany => "https://api.powerbi.de",
        }
    }

    /// Parse the names accepted on the command line and in config files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "public" => Some(Self::Public),
            "usgov" => Some(Self::UsGov),
            "usgovhigh" => Some(Self::UsGovHigh),
            "usgovmil" => Some(Self::UsGovMil),
            "china" => Some(Self::China),
            "germany" => Some(Self::Germany),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_is_default() {
        assert_eq!(ServiceEnvironment::default().api_root(), "https://api.powerbi.com");
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(
            ServiceEnvironment::from_name("USGovHigh"),
            Some(ServiceEnvironment::UsGovHigh)
        );
        assert_eq!(ServiceEnvironment::from_name("mars"), None);
    }
}
