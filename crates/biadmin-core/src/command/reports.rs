use tracing::info;
use uuid::Uuid;

use super::AdminCommand;
use crate::error::CoreError;
use crate::facade::AdminApi;
use crate::model::{Report, Scope};
use crate::sink::OutputSink;

/// List reports, or fetch a single report by id.
#[derive(Debug, Clone, Default)]
pub struct GetReports {
    pub scope: Scope,
    pub workspace_id: Option<Uuid>,
    pub report_id: Option<Uuid>,
}

/// Validated form of [`GetReports`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportQuery {
    List {
        scope: Scope,
        workspace_id: Option<Uuid>,
    },
    Get {
        workspace_id: Option<Uuid>,
        report_id: Uuid,
    },
}

impl AdminCommand for GetReports {
    const NAME: &'static str = "GetReports";
    type Output = Report;
    type Request = ReportQuery;

    fn validate(&self) -> Result<ReportQuery, CoreError> {
        match self.report_id {
            Some(_) if self.scope.is_admin() => Err(CoreError::validation(
                "Id",
                "a single report can only be fetched in Individual scope",
            )),
            Some(report_id) => Ok(ReportQuery::Get {
                workspace_id: self.workspace_id,
                report_id,
            }),
            None => Ok(ReportQuery::List {
                scope: self.scope,
                workspace_id: self.workspace_id,
            }),
        }
    }

    async fn execute<A, S>(&self, request: ReportQuery, api: &A, sink: &mut S) -> Result<(), CoreError>
    where
        A: AdminApi,
        S: OutputSink<Self::Output>,
    {
        match request {
            ReportQuery::Get {
                workspace_id,
                report_id,
            } => {
                let wire = api.get_report(workspace_id, report_id).await?;
                sink.write_object(Report::from_wire(wire)?);
            }
            ReportQuery::List {
                scope,
                workspace_id,
            } => {
                let list = api.list_reports(scope, workspace_id).await?;
                info!(count = list.len(), %scope, "reports retrieved");
                for wire in list {
                    sink.write_object(Report::from_wire(wire)?);
                }
            }
        }
        Ok(())
    }
}
