// Hand-crafted async HTTP client for the Power BI REST API.
//
// Base paths: /v1.0/myorg/ and /v2.0/myorg/
// Auth: Authorization: Bearer <token>

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, RETRY_AFTER};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::Error;
use crate::transport::TransportConfig;
use crate::types;

/// REST API version segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    fn prefix(self) -> &'static str {
        match self {
            Self::V1 => "v1.0/myorg/",
            Self::V2 => "v2.0/myorg/",
        }
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the Power BI REST API.
///
/// Uses bearer-token authentication. The token is obtained elsewhere;
/// this client never performs a login flow.
pub struct PowerBiClient {
    http: reqwest::Client,
    root: Url,
}

impl PowerBiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from an access token and transport config.
    ///
    /// Injects `Authorization: Bearer <token>` as a default header.
    pub fn from_token(
        api_root: &str,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|e| Error::InvalidToken {
                message: format!("not a valid header value: {e}"),
            })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = transport.build_client_with_headers(headers)?;
        let root = Self::normalize_root(api_root)?;

        Ok(Self { http, root })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(api_root: &str, http: reqwest::Client) -> Result<Self, Error> {
        let root = Self::normalize_root(api_root)?;
        Ok(Self { http, root })
    }

    /// Strip any `/v1.0/myorg` suffix and guarantee a trailing slash so
    /// relative joins land under the root.
    fn normalize_root(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/');
        let path = path
            .strip_suffix("/v1.0/myorg")
            .or_else(|| path.strip_suffix("/v2.0/myorg"))
            .unwrap_or(path)
            .to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// The API root this client talks to.
    pub fn root(&self) -> &Url {
        &self.root
    }

    // ── URL builder ──────────────────────────────────────────────────

    fn url(&self, version: ApiVersion, path: &str) -> Result<Url, Error> {
        Ok(self.root.join(version.prefix())?.join(path)?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(ApiVersion::V1, path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(ApiVersion::V1, path)?;
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        self.handle_response(resp).await
    }

    async fn patch_no_response<B: Serialize + Sync>(
        &self,
        version: ApiVersion,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let url = self.url(version, path)?;
        debug!("PATCH {url}");

        let resp = self.http.patch(url).json(body).send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = resp
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(0);
            return Error::RateLimited { retry_after_secs };
        }

        let raw = resp.text().await.unwrap_or_default();
        let (code, message) = match serde_json::from_str::<types::ErrorEnvelope>(&raw) {
            Ok(env) => (
                env.error.code,
                env.error.message.unwrap_or_else(|| status.to_string()),
            ),
            Err(_) if raw.is_empty() => (None, status.to_string()),
            Err(_) => (None, raw),
        };

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Error::Authentication {
                status: status.as_u16(),
                message,
            };
        }

        Error::Api {
            status: status.as_u16(),
            message,
            code,
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Activity events ──────────────────────────────────────────────

    /// Fetch one page of audit events.
    ///
    /// `start` and `end` are OData datetime literals, already quoted
    /// (`'2019-08-15T20:00:00Z'`). The continuation token is sent raw from
    /// the previous page and quoted here.
    pub async fn get_activity_events(
        &self,
        start: &str,
        end: &str,
        filter: Option<&str>,
        continuation_token: Option<&str>,
    ) -> Result<types::ActivityEventResponse, Error> {
        let mut params = vec![
            ("startDateTime", start.to_owned()),
            ("endDateTime", end.to_owned()),
        ];
        if let Some(filter) = filter {
            params.push(("$filter", filter.to_owned()));
        }
        if let Some(token) = continuation_token {
            params.push(("continuationToken", format!("'{token}'")));
        }
        self.get_with_params("admin/activityevents", &params).await
    }

    // ── Reports ──────────────────────────────────────────────────────

    /// List reports in "My workspace", a given workspace, or (admin) the tenant.
    pub async fn list_reports(
        &self,
        workspace_id: Option<&Uuid>,
        admin: bool,
    ) -> Result<types::ODataList<types::ReportResponse>, Error> {
        let path = match (admin, workspace_id) {
            (true, Some(ws)) => format!("admin/groups/{ws}/reports"),
            (true, None) => "admin/reports".to_owned(),
            (false, Some(ws)) => format!("groups/{ws}/reports"),
            (false, None) => "reports".to_owned(),
        };
        self.get(&path).await
    }

    pub async fn get_report(
        &self,
        workspace_id: Option<&Uuid>,
        report_id: &Uuid,
    ) -> Result<types::ReportResponse, Error> {
        let path = match workspace_id {
            Some(ws) => format!("groups/{ws}/reports/{report_id}"),
            None => format!("reports/{report_id}"),
        };
        self.get(&path).await
    }

    // ── Gateways ─────────────────────────────────────────────────────

    pub async fn list_gateways(&self) -> Result<types::ODataList<types::GatewayResponse>, Error> {
        self.get("gateways").await
    }

    /// Grant or revoke gateway installer rights for the given principals.
    pub async fn update_gateway_installers(
        &self,
        ids: &[String],
        operation: &str,
        gateway_type: &str,
    ) -> Result<(), Error> {
        self.patch_no_response(
            ApiVersion::V2,
            "gatewayInstallers",
            &types::UpdateGatewayInstallersBody {
                ids,
                operation,
                gateway_type,
            },
        )
        .await
    }

    // ── Workspaces ───────────────────────────────────────────────────

    /// List workspaces visible to the caller, or (admin) all tenant workspaces.
    ///
    /// The admin endpoint requires `$top`.
    pub async fn list_workspaces(
        &self,
        admin: bool,
        top: Option<u32>,
        skip: Option<u32>,
        filter: Option<&str>,
    ) -> Result<types::ODataList<types::GroupResponse>, Error> {
        let mut params = Vec::new();
        if let Some(top) = top {
            params.push(("$top", top.to_string()));
        }
        if let Some(skip) = skip {
            params.push(("$skip", skip.to_string()));
        }
        if let Some(filter) = filter {
            params.push(("$filter", filter.to_owned()));
        }
        let path = if admin { "admin/groups" } else { "groups" };
        self.get_with_params(path, &params).await
    }
}
