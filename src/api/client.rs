//! HTTP API Client
//!
//! Functions for the four endpoints the console talks to: auth login and
//! signup, starting an analysis context, and the dataset upload. Everything
//! else in the app is simulated client-side.

use gloo_net::http::Request;

use crate::state::training::UploadKind;
use crate::validate::AuthMode;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("argus_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct AnalysisStarted {
    pub id: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct UploadAck {
    pub status: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

// ============ API Functions ============

/// Log in or sign up, returning the bearer token
pub async fn authenticate(
    mode: AuthMode,
    email: &str,
    password: &str,
    name: Option<&str>,
) -> Result<AuthResponse, String> {
    #[derive(serde::Serialize)]
    struct AuthRequest {
        email: String,
        password: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/auth/{}", api_base, mode.endpoint()))
        .json(&AuthRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.map(|n| n.to_string()),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Authentication failed".to_string(), code: None });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Open an analysis context from a message and an optional image.
/// The backend answers with the id of the new analysis chat.
pub async fn start_analysis(
    message: &str,
    image: Option<&web_sys::File>,
    token: &str,
) -> Result<AnalysisStarted, String> {
    let api_base = get_api_base();

    let form = web_sys::FormData::new()
        .map_err(|_| "Failed to build upload form".to_string())?;
    form.append_with_str("message", message)
        .map_err(|_| "Failed to build upload form".to_string())?;
    if let Some(file) = image {
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(|_| "Failed to attach image".to_string())?;
    }

    let response = Request::post(&format!("{}/chat/context", api_base))
        .header("Authorization", &format!("Bearer {}", token))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Failed to start analysis".to_string(), code: None });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Hand a fully "uploaded" dataset artifact to the training backend
pub async fn upload_training_file(
    kind: UploadKind,
    file: &web_sys::File,
    token: Option<&str>,
) -> Result<UploadAck, String> {
    let api_base = get_api_base();

    let form = web_sys::FormData::new()
        .map_err(|_| "Failed to build upload form".to_string())?;
    form.append_with_str("kind", kind.field_name())
        .map_err(|_| "Failed to build upload form".to_string())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "Failed to attach file".to_string())?;

    let mut builder = Request::post(&format!("{}/train/upload", api_base));
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let response = builder
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Upload failed".to_string(), code: None });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}
