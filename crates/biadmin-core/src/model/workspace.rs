// ── Workspace domain type ──

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: Uuid,
    pub name: String,
    pub is_read_only: bool,
    pub is_on_dedicated_capacity: bool,
    pub capacity_id: Option<Uuid>,
    pub workspace_type: Option<String>,
    pub state: Option<String>,
}
