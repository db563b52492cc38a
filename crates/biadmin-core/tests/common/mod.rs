//! In-memory `AdminApi` used by the command tests.
//!
//! Every call is recorded in order. Responses are queued per operation and
//! handed out first-in first-out; an exhausted queue yields an empty,
//! terminal response.

#![allow(dead_code, clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;
use uuid::Uuid;

use biadmin_api::types::{ActivityEventResponse, GatewayResponse, GroupResponse, ReportResponse};
use biadmin_core::{AdminApi, CoreError, GatewayType, OperationType, Scope};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ActivityEvents {
        start: String,
        end: String,
        filter: Option<String>,
        token: Option<String>,
    },
    ListReports {
        scope: Scope,
        workspace_id: Option<Uuid>,
    },
    GetReport {
        workspace_id: Option<Uuid>,
        report_id: Uuid,
    },
    ListGateways,
    UpdateInstallers {
        ids: Vec<String>,
        operation: OperationType,
        gateway_type: GatewayType,
    },
    ListWorkspaces {
        scope: Scope,
        top: Option<u32>,
        skip: Option<u32>,
        filter: Option<String>,
    },
}

#[derive(Default)]
pub struct FakeAdminApi {
    calls: Mutex<Vec<Call>>,
    activity: Mutex<VecDeque<Result<ActivityEventResponse, CoreError>>>,
    reports: Mutex<VecDeque<Result<Vec<ReportResponse>, CoreError>>>,
    report: Mutex<VecDeque<Result<ReportResponse, CoreError>>>,
    gateways: Mutex<VecDeque<Result<Vec<GatewayResponse>, CoreError>>>,
    installers: Mutex<VecDeque<Result<(), CoreError>>>,
    workspaces: Mutex<VecDeque<Result<Vec<GroupResponse>, CoreError>>>,
}

impl FakeAdminApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn push_activity(&self, response: Result<ActivityEventResponse, CoreError>) -> &Self {
        self.activity.lock().unwrap().push_back(response);
        self
    }

    pub fn push_reports(&self, response: Result<Vec<ReportResponse>, CoreError>) -> &Self {
        self.reports.lock().unwrap().push_back(response);
        self
    }

    pub fn push_report(&self, response: Result<ReportResponse, CoreError>) -> &Self {
        self.report.lock().unwrap().push_back(response);
        self
    }

    pub fn push_gateways(&self, response: Result<Vec<GatewayResponse>, CoreError>) -> &Self {
        self.gateways.lock().unwrap().push_back(response);
        self
    }

    pub fn push_installers(&self, response: Result<(), CoreError>) -> &Self {
        self.installers.lock().unwrap().push_back(response);
        self
    }

    pub fn push_workspaces(&self, response: Result<Vec<GroupResponse>, CoreError>) -> &Self {
        self.workspaces.lock().unwrap().push_back(response);
        self
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn next<T>(
    queue: &Mutex<VecDeque<Result<T, CoreError>>>,
    empty: impl FnOnce() -> Result<T, CoreError>,
) -> Result<T, CoreError> {
    queue.lock().unwrap().pop_front().unwrap_or_else(empty)
}

impl AdminApi for FakeAdminApi {
    async fn get_activity_events(
        &self,
        start: &str,
        end: &str,
        filter: Option<&str>,
        continuation_token: Option<&str>,
    ) -> Result<ActivityEventResponse, CoreError> {
        self.record(Call::ActivityEvents {
            start: start.to_owned(),
            end: end.to_owned(),
            filter: filter.map(str::to_owned),
            token: continuation_token.map(str::to_owned),
        });
        next(&self.activity, || Ok(ActivityEventResponse::default()))
    }

    async fn list_reports(
        &self,
        scope: Scope,
        workspace_id: Option<Uuid>,
    ) -> Result<Vec<ReportResponse>, CoreError> {
        self.record(Call::ListReports {
            scope,
            workspace_id,
        });
        next(&self.reports, || Ok(Vec::new()))
    }

    async fn get_report(
        &self,
        workspace_id: Option<Uuid>,
        report_id: Uuid,
    ) -> Result<ReportResponse, CoreError> {
        self.record(Call::GetReport {
            workspace_id,
            report_id,
        });
        next(&self.report, || {
            Err(CoreError::NotFound {
                resource: "report".into(),
                identifier: report_id.to_string(),
            })
        })
    }

    async fn list_gateways(&self) -> Result<Vec<GatewayResponse>, CoreError> {
        self.record(Call::ListGateways);
        next(&self.gateways, || Ok(Vec::new()))
    }

    async fn update_gateway_installers(
        &self,
        ids: &[String],
        operation: OperationType,
        gateway_type: GatewayType,
    ) -> Result<(), CoreError> {
        self.record(Call::UpdateInstallers {
            ids: ids.to_vec(),
            operation,
            gateway_type,
        });
        next(&self.installers, || Ok(()))
    }

    async fn list_workspaces(
        &self,
        scope: Scope,
        top: Option<u32>,
        skip: Option<u32>,
        filter: Option<&str>,
    ) -> Result<Vec<GroupResponse>, CoreError> {
        self.record(Call::ListWorkspaces {
            scope,
            top,
            skip,
            filter: filter.map(str::to_owned),
        });
        next(&self.workspaces, || Ok(Vec::new()))
    }
}

// ── Wire fixtures ──────────────────────────────────────────────────

pub fn activity_page(entities: Vec<Value>, token: Option<&str>) -> ActivityEventResponse {
    ActivityEventResponse {
        activity_event_entities: entities,
        continuation_uri: token.map(|t| {
            format!("https://api.powerbi.com/v1.0/myorg/admin/activityevents?continuationToken='{t}'")
        }),
        continuation_token: token.map(str::to_owned),
        last_result_set: Some(token.is_none()),
    }
}

pub fn wire_report(id: &str, name: &str) -> ReportResponse {
    ReportResponse {
        id: id.to_owned(),
        name: name.to_owned(),
        web_url: Some(format!("https://app.powerbi.com/reports/{id}")),
        embed_url: Some(format!("https://app.powerbi.com/reportEmbed?reportId={id}")),
        dataset_id: Some("cfafbeb1-8037-4d0c-896e-a46fb27ff229".to_owned()),
        workspace_id: None,
    }
}

pub fn wire_gateway(id: &str, name: &str) -> GatewayResponse {
    GatewayResponse {
        id: id.to_owned(),
        name: name.to_owned(),
        gateway_type: Some("Resource".to_owned()),
        public_key: None,
        gateway_status: Some("Live".to_owned()),
    }
}

pub fn wire_group(name: &str) -> GroupResponse {
    GroupResponse {
        id: Uuid::new_v4().to_string(),
        name: name.to_owned(),
        is_read_only: false,
        is_on_dedicated_capacity: false,
        capacity_id: None,
        group_type: Some("Workspace".to_owned()),
        state: Some("Active".to_owned()),
    }
}

pub fn wire_groups(count: usize) -> Vec<GroupResponse> {
    (0..count).map(|i| wire_group(&format!("ws-{i}"))).collect()
}
