use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::trace;
use url::Url;

use crate::errors::{Result, SheetsError};

const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4/";
const QUOTA_PROJECT_HEADER: &str = "x-goog-user-project";

/// One request against the Sheets (or OAuth token) endpoint.
#[derive(Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub query: Vec<(String, String)>,
    pub json_body: Option<Value>,
    pub form_body: Option<Vec<(String, String)>>,
    pub bearer: Option<String>,
}

#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: String,
}

impl ApiResponse {
    /// Deserialize a success body, or map a failure body onto the error
    /// taxonomy. Structured API errors keep the remote `status` string so the
    /// worksheet-conflict case stays distinguishable from other failures.
    pub fn into_json<R: DeserializeOwned>(self) -> Result<R> {
        if !self.status.is_success() {
            if let Ok(envelope) = serde_json::from_slice::<ApiErrorEnvelope>(&self.body) {
                return Err(SheetsError::ApiError {
                    code: envelope.error.code,
                    status: envelope.error.status,
                    message: envelope.error.message,
                });
            }
            return Err(SheetsError::HttpError(self.status));
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Blocking transport seam.
///
/// The connector is synchronous throughout; every operation is a single
/// round trip through this trait. A scripted implementation stands in for
/// the network in tests.
pub trait HttpTransport: std::fmt::Debug {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(quota_project_id: Option<&str>) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(project) = quota_project_id {
            let value = HeaderValue::from_str(project).map_err(|_| {
                SheetsError::InvalidParameters(format!("invalid quota project id: {project}"))
            })?;
            default_headers.insert(QUOTA_PROJECT_HEADER, value);
        }

        let inner = reqwest::blocking::Client::builder()
            .user_agent(APP_USER_AGENT)
            .default_headers(default_headers)
            .build()?;
        Ok(ReqwestTransport { inner })
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut req = self
            .inner
            .request(request.method, request.url)
            .query(&request.query);
        if let Some(body) = &request.json_body {
            req = req.json(body);
        }
        if let Some(form) = &request.form_body {
            req = req.form(form);
        }
        if let Some(token) = &request.bearer {
            req = req.bearer_auth(token);
        }

        let resp = req.send()?;
        let status = resp.status();
        let body = resp.bytes()?.to_vec();
        Ok(ApiResponse { status, body })
    }
}

/// Thin client over the transport holding the API base URL.
#[derive(Debug)]
pub struct SheetsClient<C = ReqwestTransport> {
    base_url: Url,
    transport: C,
}

impl<C: HttpTransport> SheetsClient<C> {
    pub fn new(transport: C) -> Result<Self> {
        let base_url = Url::parse(SHEETS_BASE_URL)
            .map_err(|e| SheetsError::UrlParseError(format!("{e}")))?;
        Ok(SheetsClient {
            base_url,
            transport,
        })
    }

    /// Join path segments onto the API base. Segments are percent-encoded,
    /// which covers worksheet titles containing spaces.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SheetsError::UrlParseError("base url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn execute<R: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        query: Vec<(String, String)>,
        json_body: Option<Value>,
        bearer: Option<&str>,
    ) -> Result<R> {
        trace!(%url, "sheets api request");
        let response = self.transport.execute(ApiRequest {
            method,
            url,
            query,
            json_body,
            form_body: None,
            bearer: bearer.map(str::to_string),
        })?;
        response.into_json()
    }

    pub(crate) fn transport(&self) -> &C {
        &self.transport
    }
}
