// ── Gateway domain types ──

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantNames};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gateway {
    pub id: Uuid,
    pub name: String,
    pub gateway_type: Option<String>,
    pub public_key_exponent: Option<String>,
    pub public_key_modulus: Option<String>,
    pub status: Option<String>,
}

/// What to do with the principals listed in an installer update.
///
/// The string forms are the wire values.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
)]
#[strum(ascii_case_insensitive)]
pub enum OperationType {
    None,
    /// Grant installer rights.
    Add,
    /// Revoke installer rights.
    Remove,
}

/// Which kind of gateway the installer rights apply to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
)]
#[strum(ascii_case_insensitive)]
pub enum GatewayType {
    /// On-premises data gateway.
    #[strum(to_string = "Resource", serialize = "OnPremises")]
    #[serde(rename = "Resource")]
    Resource,
    /// Virtual network data gateway.
    VirtualNetwork,
}
