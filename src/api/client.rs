//! HTTP API Client
//!
//! Functions for communicating with the digit prediction service.

use gloo_net::http::Request;

use crate::state::global::Prediction;

/// Default prediction service base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Filename attached to every multipart upload
const UPLOAD_FILENAME: &str = "digit.png";

/// Shown when the service rejects a request without a usable message
const GENERIC_FAILURE: &str = "Prediction failed";

/// Shown when the service could not be reached or answered garbage
const GENERIC_TRANSPORT: &str = "Server error";

/// Get the service base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("digitlens_api_url") {
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
    normalize_api_base(&url)
}

/// Set the service base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("digitlens_api_url", url);
        }
    }
}

/// Normalize: remove trailing slashes so paths can be appended blindly
fn normalize_api_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Why a classification attempt produced no result
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// The service answered with a failure status and this message
    Service(String),
    /// The request never completed, or the answer was not valid JSON
    Transport(String),
}

impl PredictError {
    /// Message suitable for a toast. Service messages are surfaced verbatim;
    /// transport details stay in the console log.
    pub fn user_message(&self) -> String {
        match self {
            PredictError::Service(message) => message.clone(),
            PredictError::Transport(_) => GENERIC_TRANSPORT.to_string(),
        }
    }
}

impl std::fmt::Display for PredictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictError::Service(message) => write!(f, "service error: {}", message),
            PredictError::Transport(detail) => write!(f, "transport error: {}", detail),
        }
    }
}

// ============ API Functions ============

/// Submit image bytes for classification.
///
/// One multipart POST, no retries. A failed attempt leaves re-submission to
/// the user.
pub async fn classify_digit(image: &[u8]) -> Result<Prediction, PredictError> {
    let api_base = get_api_base();

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(image));
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)
        .map_err(|e| PredictError::Transport(format!("Blob build error: {:?}", e)))?;

    let form = web_sys::FormData::new()
        .map_err(|e| PredictError::Transport(format!("Form build error: {:?}", e)))?;
    form.append_with_blob_and_filename("file", &blob, UPLOAD_FILENAME)
        .map_err(|e| PredictError::Transport(format!("Form build error: {:?}", e)))?;

    let response = Request::post(&format!("{}/predict", api_base))
        .body(form)
        .map_err(|e| PredictError::Transport(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| PredictError::Transport(format!("Network error: {}", e)))?;

    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| PredictError::Transport(format!("Read error: {}", e)))?;

    parse_prediction(ok, &body)
}

/// Map a response (status flag plus body text) onto the workflow outcome
fn parse_prediction(ok: bool, body: &str) -> Result<Prediction, PredictError> {
    if ok {
        serde_json::from_str::<Prediction>(body)
            .map_err(|e| PredictError::Transport(format!("Parse error: {}", e)))
    } else {
        let error: ApiErrorBody = serde_json::from_str(body).unwrap_or(ApiErrorBody {
            error: GENERIC_FAILURE.to_string(),
        });
        Err(PredictError::Service(error.error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_becomes_a_prediction() {
        let prediction =
            parse_prediction(true, r#"{"digit": 7, "confidence": 93.2}"#).unwrap();
        assert_eq!(prediction.digit, 7);
        assert_eq!(prediction.confidence, 93.2);
    }

    #[test]
    fn failure_body_message_is_kept_verbatim() {
        let err = parse_prediction(false, r#"{"error": "bad image"}"#).unwrap_err();
        assert_eq!(err, PredictError::Service("bad image".to_string()));
        assert_eq!(err.user_message(), "bad image");
    }

    #[test]
    fn failure_without_message_falls_back_to_generic() {
        let err = parse_prediction(false, "{}").unwrap_err();
        assert_eq!(err, PredictError::Service(GENERIC_FAILURE.to_string()));

        let err = parse_prediction(false, "").unwrap_err();
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn malformed_success_body_is_a_transport_error() {
        let err = parse_prediction(true, "not json").unwrap_err();
        assert!(matches!(err, PredictError::Transport(_)));
        assert_eq!(err.user_message(), GENERIC_TRANSPORT);
    }

    #[test]
    fn transport_details_never_reach_the_user() {
        let err = PredictError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), GENERIC_TRANSPORT);
        // The detail is still available for the console log.
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn base_url_normalization_strips_trailing_slashes() {
        assert_eq!(normalize_api_base("http://localhost:5000/"), "http://localhost:5000");
        assert_eq!(normalize_api_base("http://localhost:5000"), "http://localhost:5000");
        assert_eq!(normalize_api_base("http://10.0.0.2:8000//"), "http://10.0.0.2:8000");
    }
}
