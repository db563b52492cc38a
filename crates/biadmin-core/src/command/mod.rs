// ── Command pipeline ──
//
// Every admin operation is a command object: it declares its raw
// parameters, validates them into a request record, then drives the
// facade and pushes results into an `OutputSink`. `invoke` is the single
// entry point and owns the failure contract: a failed command leaves
// exactly one `ErrorRecord` in the sink and returns the error.

pub mod activity_events;
pub mod gateways;
pub mod reports;
pub mod requests;
pub mod workspaces;

use std::future::Future;

use tracing::{Instrument, debug, info_span, warn};

use crate::error::CoreError;
use crate::facade::AdminApi;
use crate::sink::{ErrorRecord, OutputSink};

pub use activity_events::GetActivityEvents;
pub use gateways::{GetGateways, SetGatewayInstallers};
pub use reports::GetReports;
pub use requests::{ActivityEventQuery, UpdateGatewayInstallersRequest};
pub use workspaces::GetWorkspaces;

/// One user-invokable admin operation.
pub trait AdminCommand {
    /// Name used in error ids and logs, e.g. `GetActivityEvents`.
    const NAME: &'static str;

    /// Type of each emitted result object.
    type Output;

    /// Validated form of the parameters.
    type Request;

    /// Check the raw parameters. Must not perform I/O.
    fn validate(&self) -> Result<Self::Request, CoreError>;

    /// Run against the facade, emitting each result as soon as it is known.
    fn execute<A, S>(
        &self,
        request: Self::Request,
        api: &A,
        sink: &mut S,
    ) -> impl Future<Output = Result<(), CoreError>>
    where
        A: AdminApi,
        S: OutputSink<Self::Output>;
}

/// Validate, dispatch, and record the outcome of `command`.
///
/// Output already written to `sink` is never retracted, so a failure on a
/// later page leaves earlier pages in place.
pub async fn invoke<C, A, S>(command: &C, api: &A, sink: &mut S) -> Result<(), CoreError>
where
    C: AdminCommand,
    A: AdminApi,
    S: OutputSink<C::Output>,
{
    let span = info_span!("command", name = C::NAME);
    let result = async {
        let request = command.validate()?;
        debug!("parameters validated");
        command.execute(request, api, &mut *sink).await
    }
    .instrument(span.clone())
    .await;

    let _entered = span.enter();
    match &result {
        Ok(()) => debug!("completed"),
        Err(err) if err.is_validation() => {
            debug!(error = %err, "rejected");
            sink.write_error(ErrorRecord::from_error(C::NAME, err));
        }
        Err(err) => {
            warn!(error = %err, "failed");
            sink.write_error(ErrorRecord::from_error(C::NAME, err));
        }
    }
    result
}
