//! Describe handler

use ai_vision::DescribeRequest;
use axum::{Json, extract::State};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Describe request body
#[derive(Debug, Deserialize)]
pub struct DescribeBody {
    /// Base64-encoded image (standard alphabet)
    #[serde(default)]
    pub image: Option<String>,
}

/// Describe response body
#[derive(Debug, Serialize)]
pub struct DescribeResponseBody {
    /// Description text from the model
    pub result: String,
}

/// Handle a describe request
///
/// Validates the payload, forwards the image to the completion server,
/// and answers with the model's text.
#[instrument(skip(state, body))]
pub async fn describe(
    State(state): State<AppState>,
    Json(body): Json<DescribeBody>,
) -> Result<Json<DescribeResponseBody>, ApiError> {
    let image = body
        .image
        .ok_or_else(|| ApiError::BadRequest("Missing 'image' field".to_string()))?;

    if image.is_empty() {
        return Err(ApiError::BadRequest("Empty 'image' field".to_string()));
    }

    // Reject payloads the model could never read; the decoded bytes are
    // not kept, the engine wants the base64 text
    if STANDARD.decode(&image).is_err() {
        return Err(ApiError::BadRequest(
            "'image' is not valid base64".to_string(),
        ));
    }

    let response = state
        .describer
        .describe(DescribeRequest::new(image))
        .await?;

    Ok(Json(DescribeResponseBody {
        result: response.text,
    }))
}
