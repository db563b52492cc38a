use tracing::{debug, info};

use super::AdminCommand;
use crate::error::CoreError;
use crate::facade::AdminApi;
use crate::model::{Scope, Workspace};
use crate::sink::OutputSink;

/// Page size used when enumerating every workspace.
pub const DEFAULT_PAGE_SIZE: u32 = 5000;

/// List workspaces, optionally walking every page.
#[derive(Debug, Clone, Default)]
pub struct GetWorkspaces {
    pub scope: Scope,
    pub filter: Option<String>,
    /// Page size (`$top`). Required in Organization scope unless `all`.
    pub top: Option<u32>,
    /// Offset of the first record (`$skip`).
    pub skip: Option<u32>,
    /// Follow `$skip` until a short page.
    pub all: bool,
}

/// Validated form of [`GetWorkspaces`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceQuery {
    pub scope: Scope,
    pub filter: Option<String>,
    pub top: Option<u32>,
    pub skip: Option<u32>,
    pub all: bool,
}

impl AdminCommand for GetWorkspaces {
    const NAME: &'static str = "GetWorkspaces";
    type Output = Workspace;
    type Request = WorkspaceQuery;

    fn validate(&self) -> Result<WorkspaceQuery, CoreError> {
        if self.top == Some(0) {
            return Err(CoreError::validation("First", "must be greater than zero"));
        }
        let top = match (self.top, self.all) {
            (Some(top), _) => Some(top),
            (None, true) => Some(DEFAULT_PAGE_SIZE),
            (None, false) if self.scope.is_admin() => {
                return Err(CoreError::validation(
                    "First",
                    "required in Organization scope unless All is set",
                ));
            }
            (None, false) => None,
        };
        Ok(WorkspaceQuery {
            scope: self.scope,
            filter: self
                .filter
                .as_deref()
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(str::to_owned),
            top,
            skip: self.skip,
            all: self.all,
        })
    }

    async fn execute<A, S>(
        &self,
        request: WorkspaceQuery,
        api: &A,
        sink: &mut S,
    ) -> Result<(), CoreError>
    where
        A: AdminApi,
        S: OutputSink<Self::Output>,
    {
        let mut skip = request.skip;
        let mut total = 0_usize;

        loop {
            let page = api
                .list_workspaces(request.scope, request.top, skip, request.filter.as_deref())
                .await?;
            let received = page.len();
            total += received;
            debug!(skip = skip.unwrap_or(0), received, "workspace page");

            for wire in page {
                sink.write_object(Workspace::from_wire(wire)?);
            }

            let received = u32::try_from(received).unwrap_or(u32::MAX);
            let short = request.top.is_none_or(|top| received < top);
            if !request.all || short || received == 0 {
                break;
            }
            skip = Some(skip.unwrap_or(0).saturating_add(received));
        }

        info!(count = total, scope = %request.scope, "workspaces retrieved");
        Ok(())
    }
}
