use crate::domain::{ApiError, ApiResult, RawJobRecord, RegistrationRequest, UserInfo};
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Error body the backend sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Blocking HTTP client for the JobPilot backend.
///
/// All calls run on worker threads spawned by the application layer, so the
/// UI thread never blocks on the network. Cloning shares the underlying
/// connection pool.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Reads the base URL from `JOBPILOT_API_URL`, falling back to the local
    /// development backend.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("JOBPILOT_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the job list. Accepts either a bare array or a
    /// `{"jobs": [...]}` envelope, since the backend has used both shapes.
    pub fn fetch_jobs(&self) -> ApiResult<Vec<RawJobRecord>> {
        let url = format!("{}/api/jobs", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::BadStatus(status.as_u16()));
        }

        let body: Value = response
            .json()
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        let records = match body {
            Value::Array(_) => body,
            Value::Object(mut map) => map
                .remove("jobs")
                .ok_or_else(|| ApiError::InvalidResponse("missing jobs field".to_string()))?,
            _ => return Err(ApiError::InvalidResponse("expected a job array".to_string())),
        };
        serde_json::from_value(records).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Registers a new user. A rejection with a `message` body is surfaced
    /// verbatim so the form can show it next to the fields.
    pub fn register_user(&self, request: &RegistrationRequest) -> ApiResult<UserInfo> {
        let url = format!("{}/api/users", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .ok()
                .map(|body| body.message)
                .filter(|message| !message.is_empty());
            return Err(match message {
                Some(message) => ApiError::Rejected(message),
                None => ApiError::BadStatus(status.as_u16()),
            });
        }

        response
            .json()
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}
