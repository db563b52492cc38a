// ── Report domain type ──

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    pub name: String,
    pub web_url: Option<String>,
    pub embed_url: Option<String>,
    /// Never filled from the list/get endpoints; kept for parity with
    /// exports that carry it.
    pub datasource: Option<String>,
    pub dataset_id: Option<String>,
    /// Present only on tenant-wide (organization scope) listings.
    pub workspace_id: Option<Uuid>,
}
