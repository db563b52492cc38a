use tracing::info;

use super::AdminCommand;
use super::requests::UpdateGatewayInstallersRequest;
use crate::error::CoreError;
use crate::facade::AdminApi;
use crate::model::Gateway;
use crate::sink::OutputSink;

/// List the gateways the caller administers.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetGateways;

impl AdminCommand for GetGateways {
    const NAME: &'static str = "GetGateways";
    type Output = Gateway;
    type Request = ();

    fn validate(&self) -> Result<(), CoreError> {
        Ok(())
    }

    async fn execute<A, S>(&self, (): (), api: &A, sink: &mut S) -> Result<(), CoreError>
    where
        A: AdminApi,
        S: OutputSink<Self::Output>,
    {
        let list = api.list_gateways().await?;
        info!(count = list.len(), "gateways retrieved");
        for wire in list {
            sink.write_object(Gateway::from_wire(wire)?);
        }
        Ok(())
    }
}

/// Grant or revoke gateway installer rights for a set of principals.
///
/// Raw parameters stay as text so that missing or unknown values surface
/// as validation failures rather than parse errors upstream. On success
/// the applied request is emitted once.
#[derive(Debug, Clone, Default)]
pub struct SetGatewayInstallers {
    pub ids: Vec<String>,
    pub operation: Option<String>,
    pub gateway_type: Option<String>,
}

impl AdminCommand for SetGatewayInstallers {
    const NAME: &'static str = "SetGatewayInstallers";
    type Output = UpdateGatewayInstallersRequest;
    type Request = UpdateGatewayInstallersRequest;

    fn validate(&self) -> Result<UpdateGatewayInstallersRequest, CoreError> {
        UpdateGatewayInstallersRequest::new(
            &self.ids,
            self.operation.as_deref(),
            self.gateway_type.as_deref(),
        )
    }

    async fn execute<A, S>(
        &self,
        request: UpdateGatewayInstallersRequest,
        api: &A,
        sink: &mut S,
    ) -> Result<(), CoreError>
    where
        A: AdminApi,
        S: OutputSink<Self::Output>,
    {
        api.update_gateway_installers(&request.ids, request.operation, request.gateway_type)
            .await?;
        info!(
            principals = request.ids.len(),
            operation = %request.operation,
            gateway_type = %request.gateway_type,
            "gateway installers updated"
        );
        sink.write_object(request);
        Ok(())
    }
}
