//! Request handlers.

use super::AppState;
use super::error::ApiError;
use super::types::{HealthResponse, UnlockRequest, UnlockResponse};
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};
use folio_core::{GateError, has_access_token};

// =============================================================================
// HEALTH
// =============================================================================

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        gate_enabled: state.config.is_enabled(),
    })
}

// =============================================================================
// UNLOCK
// =============================================================================

/// `POST /api/resume/unlock`
///
/// The body is read as raw bytes so a missing `Content-Type` does not turn
/// into a framework rejection; every failure goes through [`ApiError`].
pub async fn unlock_resume(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let config = &state.config;

    // Disabled gate answers 503 before the body is looked at.
    if !config.is_enabled() {
        tracing::debug!("unlock attempted while gate is not configured");
        return Err(GateError::NotConfigured.into());
    }

    let request = UnlockRequest::from_body(&body).map_err(|e| {
        tracing::debug!(error = %e, "rejecting malformed unlock body");
        ApiError::InvalidBody
    })?;

    if let Err(e) = config.check_credential(request.password.as_deref()) {
        if e == GateError::IncorrectCredential {
            tracing::warn!("resume unlock rejected: incorrect password");
        }
        return Err(e.into());
    }

    tracing::info!("resume unlock granted");
    Ok((
        [(header::SET_COOKIE, config.cookie.set_cookie_value())],
        Json(UnlockResponse { success: true }),
    ))
}

// =============================================================================
// DOWNLOAD
// =============================================================================

/// `GET /api/resume/download`
///
/// The file is read fully before anything is sent, so a read failure can
/// never produce a truncated 200.
pub async fn download_resume(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let cookies = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok());
    if !has_access_token(cookies) {
        return Err(ApiError::Unauthorized);
    }

    let asset = &state.config.asset;
    let bytes = tokio::fs::read(asset.path()).await.map_err(|e| {
        tracing::error!(
            path = %asset.path().display(),
            error = %e,
            "failed to read protected resume file"
        );
        ApiError::AssetNotFound
    })?;

    tracing::debug!(bytes = bytes.len(), "serving resume");
    let headers = [
        (header::CONTENT_TYPE, asset.content_type().to_string()),
        (header::CONTENT_DISPOSITION, asset.content_disposition()),
        (header::CONTENT_LENGTH, bytes.len().to_string()),
    ];
    Ok((headers, bytes).into_response())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::{DOWNLOAD_PATH, UNLOCK_PATH, create_router};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use folio_core::{GateConfig, Secret};
    use tower::ServiceExt;

    async fn status_of(config: GateConfig, request: Request<Body>) -> StatusCode {
        create_router(config).oneshot(request).await.unwrap().status()
    }

    fn unlock(body: &'static str) -> Request<Body> {
        Request::post(UNLOCK_PATH)
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn unlock_accepts_body_without_content_type() {
        let config = GateConfig::new(Secret::new("abc123"));
        let status = status_of(config, unlock(r#"{"password":"abc123"}"#)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn unlock_rejects_non_json() {
        let config = GateConfig::new(Secret::new("abc123"));
        assert_eq!(status_of(config, unlock("password=abc123")).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unlock_rejects_non_string_password() {
        let config = GateConfig::new(Secret::new("abc123"));
        assert_eq!(status_of(config, unlock(r#"{"password":42}"#)).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unlock_rejects_non_object_bodies() {
        for body in ["[]", r#"["abc123"]"#, "null", r#""abc123""#] {
            let config = GateConfig::new(Secret::new("abc123"));
            assert_eq!(
                status_of(config, unlock(body)).await,
                StatusCode::BAD_REQUEST,
                "body {body}"
            );
        }
    }

    #[tokio::test]
    async fn disabled_gate_ignores_body() {
        let status = status_of(GateConfig::default(), unlock("not json at all")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn download_with_empty_cookie_is_unauthorized() {
        let request = Request::get(DOWNLOAD_PATH)
            .header(header::COOKIE, "resume_access=")
            .body(Body::empty())
            .unwrap();
        assert_eq!(
            status_of(GateConfig::default(), request).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn unlock_rejects_get() {
        let request = Request::get(UNLOCK_PATH).body(Body::empty()).unwrap();
        assert_eq!(
            status_of(GateConfig::default(), request).await,
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
