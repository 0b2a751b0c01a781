//! REST API helpers for communicating with the facility backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: the transport helpers return
//! [`ApiError::Unavailable`] since these endpoints are only reachable from
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call yields `Result<_, ApiError>`. Non-2xx responses keep the
//! backend's optional `detail` text so pages can show it verbatim, falling
//! back to their own message otherwise.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    Appointment, AppointmentPayload, ChatReply, ChatRequest, LoginRequest, LoginResponse, Medecin, MessageResponse,
    Motif, Mutuelle, Prescription, PrescriptionPayload, PrescriptionSummary, RegisterRequest, Resident,
    ResidentPayload, User,
};

/// Failure of a backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {}", detail.as_deref().unwrap_or("request failed"))]
    Status { status: u16, detail: Option<String> },

    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),

    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Backend-provided `detail` text, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// HTTP status for [`ApiError::Status`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message shown to the user: the server detail verbatim, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().map_or_else(|| fallback.to_owned(), str::to_owned)
    }
}

/// Extract a string `detail` field from a JSON error body.
///
/// Validation errors carry `detail` as an array of objects; those are not
/// user-facing text and yield `None`.
pub fn parse_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?.as_str()?.trim();
    if detail.is_empty() { None } else { Some(detail.to_owned()) }
}

// =============================================================================
// ENDPOINT PATHS
// =============================================================================

pub(crate) const LOGIN_PATH: &str = "/auth/login";
pub(crate) const REGISTER_PATH: &str = "/auth/register";
pub(crate) const RESIDENTS_PATH: &str = "/residents";
pub(crate) const MOTIFS_PATH: &str = "/motifs";
pub(crate) const MUTUELLES_PATH: &str = "/mutuelles";
pub(crate) const MEDECINS_PATH: &str = "/medecins";
pub(crate) const USERS_PATH: &str = "/users";
pub(crate) const CHAT_PATH: &str = "/chat";

fn verify_email_path(token: &str) -> String {
    format!("/auth/verify-email/{}", token.trim())
}

fn resident_path(id: i64) -> String {
    format!("{RESIDENTS_PATH}/{id}")
}

fn appointments_path(resident_id: Option<i64>) -> String {
    match resident_id {
        Some(id) => format!("/appointments?resident_id={id}"),
        None => "/appointments".to_owned(),
    }
}

fn appointment_path(id: i64) -> String {
    format!("/appointments/{id}")
}

fn prescriptions_path(resident_id: Option<i64>) -> String {
    match resident_id {
        Some(id) => format!("/medications?resident_id={id}"),
        None => "/medications".to_owned(),
    }
}

fn prescription_path(id: i64) -> String {
    format!("/medications/{id}")
}

fn user_path(id: i64) -> String {
    format!("{USERS_PATH}/{id}")
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Post,
    Put,
}

#[cfg(feature = "hydrate")]
fn endpoint(path: &str) -> String {
    crate::config::ApiConfig::from_build_env().endpoint(path)
}

#[cfg(feature = "hydrate")]
async fn check_status(url: &str, resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    leptos::logging::warn!("request failed: url={url} status={status} body={body}");
    Err(ApiError::Status { status, detail: parse_detail(&body) })
}

#[cfg(feature = "hydrate")]
fn network_error(url: &str, err: &gloo_net::Error) -> ApiError {
    leptos::logging::warn!("request error: url={url} error={err}");
    ApiError::Network(err.to_string())
}

/// `GET path` and decode the JSON body.
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(path);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| network_error(&url, &e))?;
        let resp = check_status(&url, resp).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// Send a JSON body with `method` and decode the JSON response.
async fn send_json<B: Serialize, T: DeserializeOwned>(method: Method, path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send_raw(method, path, body).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Unavailable)
    }
}

/// Send a JSON body with `method`, only checking the response status.
async fn send<B: Serialize>(method: Method, path: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_raw(method, path, body).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn send_raw<B: Serialize>(method: Method, path: &str, body: &B) -> Result<gloo_net::http::Response, ApiError> {
    let url = endpoint(path);
    let builder = match method {
        Method::Post => gloo_net::http::Request::post(&url),
        Method::Put => gloo_net::http::Request::put(&url),
    };
    let resp = builder
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| network_error(&url, &e))?;
    check_status(&url, resp).await
}

/// `DELETE path`, only checking the response status.
async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(path);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| network_error(&url, &e))?;
        check_status(&url, resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /auth/login`; the backend answers with the account role.
///
/// # Errors
///
/// Returns an error if the request fails or the credentials are rejected.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    send_json(Method::Post, LOGIN_PATH, request).await
}

/// `POST /auth/register`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend refuses the account.
pub async fn register(request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
    send_json(Method::Post, REGISTER_PATH, request).await
}

/// `GET /auth/verify-email/{token}`.
///
/// # Errors
///
/// Returns an error if the request fails or the token is invalid.
pub async fn verify_email(token: &str) -> Result<MessageResponse, ApiError> {
    get_json(&verify_email_path(token)).await
}

// =============================================================================
// RESIDENTS + LOOKUPS
// =============================================================================

/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_residents() -> Result<Vec<Resident>, ApiError> {
    get_json(RESIDENTS_PATH).await
}

/// # Errors
///
/// Returns an error if the request fails or the resident does not exist.
pub async fn fetch_resident(id: i64) -> Result<Resident, ApiError> {
    get_json(&resident_path(id)).await
}

/// # Errors
///
/// Returns an error if the request fails or the backend rejects the payload.
pub async fn create_resident(payload: &ResidentPayload) -> Result<(), ApiError> {
    send(Method::Post, RESIDENTS_PATH, payload).await
}

/// # Errors
///
/// Returns an error if the request fails or the backend rejects the payload.
pub async fn update_resident(id: i64, payload: &ResidentPayload) -> Result<(), ApiError> {
    send(Method::Put, &resident_path(id), payload).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_resident(id: i64) -> Result<(), ApiError> {
    delete(&resident_path(id)).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_mutuelles() -> Result<Vec<Mutuelle>, ApiError> {
    get_json(MUTUELLES_PATH).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_medecins() -> Result<Vec<Medecin>, ApiError> {
    get_json(MEDECINS_PATH).await
}

// =============================================================================
// APPOINTMENTS
// =============================================================================

/// List appointments, optionally restricted to one resident.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_appointments(resident_id: Option<i64>) -> Result<Vec<Appointment>, ApiError> {
    get_json(&appointments_path(resident_id)).await
}

/// # Errors
///
/// Returns an error if the request fails or the appointment does not exist.
pub async fn fetch_appointment(id: i64) -> Result<Appointment, ApiError> {
    get_json(&appointment_path(id)).await
}

/// # Errors
///
/// Returns an error if the request fails or the backend rejects the payload.
pub async fn create_appointment(payload: &AppointmentPayload) -> Result<(), ApiError> {
    send(Method::Post, &appointments_path(None), payload).await
}

/// # Errors
///
/// Returns an error if the request fails or the backend rejects the payload.
pub async fn update_appointment(id: i64, payload: &AppointmentPayload) -> Result<(), ApiError> {
    send(Method::Put, &appointment_path(id), payload).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_appointment(id: i64) -> Result<(), ApiError> {
    delete(&appointment_path(id)).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_motifs() -> Result<Vec<Motif>, ApiError> {
    get_json(MOTIFS_PATH).await
}

// =============================================================================
// PRESCRIPTIONS
// =============================================================================

/// List prescriptions, optionally restricted to one resident.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_prescriptions(resident_id: Option<i64>) -> Result<Vec<PrescriptionSummary>, ApiError> {
    get_json(&prescriptions_path(resident_id)).await
}

/// # Errors
///
/// Returns an error if the request fails or the prescription does not exist.
pub async fn fetch_prescription(id: i64) -> Result<Prescription, ApiError> {
    get_json(&prescription_path(id)).await
}

/// # Errors
///
/// Returns an error if the request fails or the backend rejects the payload.
pub async fn create_prescription(payload: &PrescriptionPayload) -> Result<(), ApiError> {
    send(Method::Post, &prescriptions_path(None), payload).await
}

/// # Errors
///
/// Returns an error if the request fails or the backend rejects the payload.
pub async fn update_prescription(id: i64, payload: &PrescriptionPayload) -> Result<(), ApiError> {
    send(Method::Put, &prescription_path(id), payload).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_prescription(id: i64) -> Result<(), ApiError> {
    delete(&prescription_path(id)).await
}

// =============================================================================
// USERS + CHAT
// =============================================================================

/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    get_json(USERS_PATH).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_user(id: i64) -> Result<(), ApiError> {
    delete(&user_path(id)).await
}

/// `POST /chat` and return the assistant reply text.
///
/// # Errors
///
/// Returns an error if the request fails or the reply cannot be decoded.
pub async fn send_chat(message: &str) -> Result<String, ApiError> {
    let request = ChatRequest { message: message.to_owned() };
    let reply: ChatReply = send_json(Method::Post, CHAT_PATH, &request).await?;
    Ok(reply.reply)
}
