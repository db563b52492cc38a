// ── API facade ──
//
// `AdminApi` is the only way commands reach the remote service. Every
// method takes already-validated values and returns the wire payload or
// a `CoreError`. Failures propagate immediately; there is no retry.

use std::future::Future;

use uuid::Uuid;

use biadmin_api::PowerBiClient;
use biadmin_api::types::{ActivityEventResponse, GatewayResponse, GroupResponse, ReportResponse};

use crate::error::CoreError;
use crate::model::{GatewayType, OperationType, Scope};

/// One method per remote admin operation.
pub trait AdminApi {
    /// Fetch one page of audit events. `start`/`end` are quoted OData
    /// literals; `continuation_token` is `None` on the first call.
    fn get_activity_events(
        &self,
        start: &str,
        end: &str,
        filter: Option<&str>,
        continuation_token: Option<&str>,
    ) -> impl Future<Output = Result<ActivityEventResponse, CoreError>> + Send;

    fn list_reports(
        &self,
        scope: Scope,
        workspace_id: Option<Uuid>,
    ) -> impl Future<Output = Result<Vec<ReportResponse>, CoreError>> + Send;

    fn get_report(
        &self,
        workspace_id: Option<Uuid>,
        report_id: Uuid,
    ) -> impl Future<Output = Result<ReportResponse, CoreError>> + Send;

    fn list_gateways(&self) -> impl Future<Output = Result<Vec<GatewayResponse>, CoreError>> + Send;

    fn update_gateway_installers(
        &self,
        ids: &[String],
        operation: OperationType,
        gateway_type: GatewayType,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn list_workspaces(
        &self,
        scope: Scope,
        top: Option<u32>,
        skip: Option<u32>,
        filter: Option<&str>,
    ) -> impl Future<Output = Result<Vec<GroupResponse>, CoreError>> + Send;
}

impl AdminApi for PowerBiClient {
    async fn get_activity_events(
        &self,
        start: &str,
        end: &str,
        filter: Option<&str>,
        continuation_token: Option<&str>,
    ) -> Result<ActivityEventResponse, CoreError> {
        PowerBiClient::get_activity_events(self, start, end, filter, continuation_token)
            .await
            .map_err(|e| CoreError::from(e).not_found_as("endpoint", "admin/activityevents"))
    }

    async fn list_reports(
        &self,
        scope: Scope,
        workspace_id: Option<Uuid>,
    ) -> Result<Vec<ReportResponse>, CoreError> {
        let list = PowerBiClient::list_reports(self, workspace_id.as_ref(), scope.is_admin())
            .await
            .map_err(|e| {
                let err = CoreError::from(e);
                match workspace_id {
                    Some(id) => err.not_found_as("workspace", id.to_string()),
                    None if scope.is_admin() => err.not_found_as("endpoint", "admin/reports"),
                    None => err.not_found_as("endpoint", "reports"),
                }
            })?;
        Ok(list.value)
    }

    async fn get_report(
        &self,
        workspace_id: Option<Uuid>,
        report_id: Uuid,
    ) -> Result<ReportResponse, CoreError> {
        PowerBiClient::get_report(self, workspace_id.as_ref(), &report_id)
            .await
            .map_err(|e| CoreError::from(e).not_found_as("report", report_id.to_string()))
    }

    async fn list_gateways(&self) -> Result<Vec<GatewayResponse>, CoreError> {
        let list = PowerBiClient::list_gateways(self)
            .await
            .map_err(|e| CoreError::from(e).not_found_as("endpoint", "gateways"))?;
        Ok(list.value)
    }

    async fn update_gateway_installers(
        &self,
        ids: &[String],
        operation: OperationType,
        gateway_type: GatewayType,
    ) -> Result<(), CoreError> {
        PowerBiClient::update_gateway_installers(
            self,
            ids,
            operation.as_ref(),
            gateway_type.as_ref(),
        )
        .await
        .map_err(|e| CoreError::from(e).not_found_as("endpoint", "gatewayInstallers"))
    }

    async fn list_workspaces(
        &self,
        scope: Scope,
        top: Option<u32>,
        skip: Option<u32>,
        filter: Option<&str>,
    ) -> Result<Vec<GroupResponse>, CoreError> {
        let list = PowerBiClient::list_workspaces(self, scope.is_admin(), top, skip, filter)
            .await
            .map_err(|e| {
                let endpoint = if scope.is_admin() { "admin/groups" } else { "groups" };
                CoreError::from(e).not_found_as("endpoint", endpoint)
            })?;
        Ok(list.value)
    }
}
