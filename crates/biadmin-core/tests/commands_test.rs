#![allow(clippy::unwrap_used)]

mod common;

use pretty_assertions::assert_eq;
use uuid::Uuid;

use biadmin_core::{
    CoreError, DEFAULT_PAGE_SIZE, ErrorCategory, GatewayType, GetGateways, GetReports,
    GetWorkspaces, MemorySink, OperationType, Scope, SetGatewayInstallers, invoke,
};
use common::{Call, FakeAdminApi, wire_gateway, wire_groups, wire_report};

const REPORT_ID: &str = "5b218778-e7a5-4d73-8187-f10824047715";
const WORKSPACE_ID: &str = "f089354e-8366-4e18-aea3-4cb4a3a50b48";

// ── Gateway installers ─────────────────────────────────────────────

#[tokio::test]
async fn installer_update_without_ids_fails_before_dispatch() {
    let api = FakeAdminApi::new();
    let cmd = SetGatewayInstallers {
        ids: Vec::new(),
        operation: Some("Add".into()),
        gateway_type: Some("Resource".into()),
    };
    let mut sink = MemorySink::new();

    let err = invoke(&cmd, &api, &mut sink).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(api.call_count(), 0);
    assert!(sink.output.is_empty());
    assert_eq!(sink.errors.len(), 1);
    assert_eq!(sink.errors[0].error_id, "SetGatewayInstallers.ValidationFailed");
    assert_eq!(sink.errors[0].target.as_deref(), Some("Ids"));
}

#[tokio::test]
async fn installer_update_without_operation_fails_before_dispatch() {
    let api = FakeAdminApi::new();
    let cmd = SetGatewayInstallers {
        ids: vec!["john@contoso.com".into()],
        operation: None,
        gateway_type: Some("Resource".into()),
    };
    let mut sink = MemorySink::new();

    invoke(&cmd, &api, &mut sink).await.unwrap_err();

    assert_eq!(api.call_count(), 0);
    assert_eq!(sink.errors[0].target.as_deref(), Some("Operation"));
}

#[tokio::test]
async fn installer_update_dispatches_parsed_values() {
    let api = FakeAdminApi::new();
    let cmd = SetGatewayInstallers {
        ids: vec!["john@contoso.com".into(), "jane@contoso.com".into()],
        operation: Some("add".into()),
        gateway_type: Some("OnPremises".into()),
    };
    let mut sink = MemorySink::new();

    invoke(&cmd, &api, &mut sink).await.unwrap();

    assert_eq!(
        api.calls(),
        vec![Call::UpdateInstallers {
            ids: vec!["john@contoso.com".into(), "jane@contoso.com".into()],
            operation: OperationType::Add,
            gateway_type: GatewayType::Resource,
        }]
    );
    assert_eq!(sink.output.len(), 1);
    assert_eq!(sink.output[0].operation, OperationType::Add);
}

#[tokio::test]
async fn installer_update_forbidden_is_an_auth_record() {
    let api = FakeAdminApi::new();
    api.push_installers(Err(CoreError::Authentication {
        message: "Forbidden (HTTP 403)".into(),
    }));
    let cmd = SetGatewayInstallers {
        ids: vec!["john@contoso.com".into()],
        operation: Some("Remove".into()),
        gateway_type: Some("VirtualNetwork".into()),
    };
    let mut sink = MemorySink::new();

    invoke(&cmd, &api, &mut sink).await.unwrap_err();

    assert!(sink.output.is_empty());
    assert_eq!(sink.errors[0].error_id, "SetGatewayInstallers.AuthenticationFailed");
    assert_eq!(sink.errors[0].category, ErrorCategory::AuthenticationError);
}

// ── Gateways ───────────────────────────────────────────────────────

#[tokio::test]
async fn gateways_are_converted_in_order() {
    let api = FakeAdminApi::new();
    api.push_gateways(Ok(vec![
        wire_gateway("1f69e798-5852-4fdd-ab01-33bb14b6e934", "Contoso East"),
        wire_gateway("2f69e798-5852-4fdd-ab01-33bb14b6e934", "Contoso West"),
    ]));
    let mut sink = MemorySink::new();

    invoke(&GetGateways, &api, &mut sink).await.unwrap();

    let names: Vec<&str> = sink.output.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Contoso East", "Contoso West"]);
    assert_eq!(sink.output[0].status.as_deref(), Some("Live"));
}

#[tokio::test]
async fn malformed_gateway_id_is_a_format_record() {
    let api = FakeAdminApi::new();
    api.push_gateways(Ok(vec![wire_gateway("gw-1", "Contoso")]));
    let mut sink = MemorySink::new();

    let err = invoke(&GetGateways, &api, &mut sink).await.unwrap_err();

    assert!(matches!(err, CoreError::Format { .. }));
    assert_eq!(sink.errors[0].error_id, "GetGateways.FormatError");
    assert_eq!(sink.errors[0].category, ErrorCategory::InvalidData);
}

// ── Reports ────────────────────────────────────────────────────────

#[tokio::test]
async fn report_fields_round_trip() {
    let api = FakeAdminApi::new();
    let wire = wire_report(REPORT_ID, "Quarterly Sales");
    api.push_report(Ok(wire.clone()));
    let cmd = GetReports {
        report_id: Some(REPORT_ID.parse().unwrap()),
        ..GetReports::default()
    };
    let mut sink = MemorySink::new();

    invoke(&cmd, &api, &mut sink).await.unwrap();

    let report = &sink.output[0];
    assert_eq!(report.id.to_string(), wire.id);
    assert_eq!(report.name, wire.name);
    assert_eq!(report.web_url, wire.web_url);
    assert_eq!(report.embed_url, wire.embed_url);
    assert_eq!(report.dataset_id, wire.dataset_id);
}

#[tokio::test]
async fn missing_report_is_not_found_record() {
    let api = FakeAdminApi::new();
    let cmd = GetReports {
        report_id: Some(REPORT_ID.parse().unwrap()),
        ..GetReports::default()
    };
    let mut sink = MemorySink::new();

    invoke(&cmd, &api, &mut sink).await.unwrap_err();

    assert!(sink.output.is_empty());
    assert_eq!(sink.errors[0].error_id, "GetReports.NotFound");
    assert_eq!(sink.errors[0].category, ErrorCategory::ObjectNotFound);
    assert_eq!(sink.errors[0].target.as_deref(), Some(REPORT_ID));
}

#[tokio::test]
async fn report_id_in_organization_scope_is_rejected() {
    let api = FakeAdminApi::new();
    let cmd = GetReports {
        scope: Scope::Organization,
        workspace_id: None,
        report_id: Some(Uuid::new_v4()),
    };
    let mut sink = MemorySink::new();

    invoke(&cmd, &api, &mut sink).await.unwrap_err();

    assert_eq!(api.call_count(), 0);
    assert_eq!(sink.errors[0].target.as_deref(), Some("Id"));
}

#[tokio::test]
async fn reports_in_workspace_are_listed() {
    let api = FakeAdminApi::new();
    api.push_reports(Ok(vec![
        wire_report(REPORT_ID, "Sales"),
        wire_report("6b218778-e7a5-4d73-8187-f10824047715", "Churn"),
    ]));
    let workspace_id: Uuid = WORKSPACE_ID.parse().unwrap();
    let cmd = GetReports {
        scope: Scope::Organization,
        workspace_id: Some(workspace_id),
        report_id: None,
    };
    let mut sink = MemorySink::new();

    invoke(&cmd, &api, &mut sink).await.unwrap();

    assert_eq!(
        api.calls(),
        vec![Call::ListReports {
            scope: Scope::Organization,
            workspace_id: Some(workspace_id),
        }]
    );
    assert_eq!(sink.output.len(), 2);
}

// ── Workspaces ─────────────────────────────────────────────────────

#[tokio::test]
async fn organization_scope_requires_page_size() {
    let api = FakeAdminApi::new();
    let cmd = GetWorkspaces {
        scope: Scope::Organization,
        ..GetWorkspaces::default()
    };
    let mut sink = MemorySink::new();

    invoke(&cmd, &api, &mut sink).await.unwrap_err();

    assert_eq!(api.call_count(), 0);
    assert_eq!(sink.errors[0].target.as_deref(), Some("First"));
}

#[tokio::test]
async fn all_walks_offsets_until_short_page() {
    let api = FakeAdminApi::new();
    api.push_workspaces(Ok(wire_groups(2)))
        .push_workspaces(Ok(wire_groups(2)))
        .push_workspaces(Ok(wire_groups(1)));
    let cmd = GetWorkspaces {
        scope: Scope::Organization,
        top: Some(2),
        all: true,
        ..GetWorkspaces::default()
    };
    let mut sink = MemorySink::new();

    invoke(&cmd, &api, &mut sink).await.unwrap();

    let skips: Vec<Option<u32>> = api
        .calls()
        .into_iter()
        .map(|call| match call {
            Call::ListWorkspaces { skip, top, .. } => {
                assert_eq!(top, Some(2));
                skip
            }
            other => panic!("unexpected call {other:?}"),
        })
        .collect();
    assert_eq!(skips, vec![None, Some(2), Some(4)]);
    assert_eq!(sink.output.len(), 5);
}

#[tokio::test]
async fn all_without_page_size_uses_default() {
    let api = FakeAdminApi::new();
    api.push_workspaces(Ok(wire_groups(3)));
    let cmd = GetWorkspaces {
        scope: Scope::Organization,
        all: true,
        ..GetWorkspaces::default()
    };
    let mut sink = MemorySink::new();

    invoke(&cmd, &api, &mut sink).await.unwrap();

    assert_eq!(
        api.calls(),
        vec![Call::ListWorkspaces {
            scope: Scope::Organization,
            top: Some(DEFAULT_PAGE_SIZE),
            skip: None,
            filter: None,
        }]
    );
}

#[tokio::test]
async fn without_all_a_full_page_is_not_followed() {
    let api = FakeAdminApi::new();
    api.push_workspaces(Ok(wire_groups(2)));
    let cmd = GetWorkspaces {
        top: Some(2),
        skip: Some(10),
        filter: Some("contains(name,'Sales')".into()),
        ..GetWorkspaces::default()
    };
    let mut sink = MemorySink::new();

    invoke(&cmd, &api, &mut sink).await.unwrap();

    assert_eq!(
        api.calls(),
        vec![Call::ListWorkspaces {
            scope: Scope::Individual,
            top: Some(2),
            skip: Some(10),
            filter: Some("contains(name,'Sales')".into()),
        }]
    );
    assert_eq!(sink.output.len(), 2);
}
