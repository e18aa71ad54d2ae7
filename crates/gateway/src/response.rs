//! Response status + JSON body mapping.

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Body of every gateway response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

/// Success payload: the identifiers a caller needs to track the request.
///
/// `sqsMessageId` is the historical wire name for the queue-assigned
/// message id; downstream consumers parse it, so it stays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(rename = "sqsMessageId", skip_serializing_if = "Option::is_none")]
    pub queue_message_id: Option<String>,
}

/// Status code plus serialized JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status_code: u16,
    pub body: String,
}

impl GatewayResponse {
    pub fn ok(message: impl Into<String>, data: ResponseData) -> Self {
        Self::from_parts(
            200,
            &ResponseBody {
                success: true,
                message: message.into(),
                data: Some(data),
            },
        )
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::from_parts(
            400,
            &ResponseBody {
                success: false,
                message: message.into(),
                data: None,
            },
        )
    }

    /// 500 with a generic wrapped message; the cause text is kept for
    /// diagnostics but no internal detail beyond it leaks out.
    pub fn internal_error(cause: impl core::fmt::Display) -> Self {
        Self::from_parts(
            500,
            &ResponseBody {
                success: false,
                message: format!("Internal server error: {cause}"),
                data: None,
            },
        )
    }

    fn from_parts(status_code: u16, body: &ResponseBody) -> Self {
        let body = serde_json::to_string(body).unwrap_or_else(|_| {
            r#"{"success":false,"message":"Internal server error: response encoding failed"}"#
                .to_string()
        });
        Self { status_code, body }
    }

    /// Decode the body back into its structured form (test helper).
    pub fn decode_body(&self) -> Result<ResponseBody, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

impl From<GatewayError> for GatewayResponse {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::BadRequest(msg) => GatewayResponse::bad_request(msg),
            GatewayError::Internal(cause) => GatewayResponse::internal_error(cause),
        }
    }
}
