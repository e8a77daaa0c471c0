//! Frame interaction endpoint.

use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};

use crate::error::FrameError;
use crate::http::{Ack, Request, Response};

/// Frame action body; both halves are opaque and only logged.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FramePayload {
    #[serde(default)]
    pub trusted_data: Option<Value>,
    #[serde(default)]
    pub untrusted_data: Option<Value>,
}

pub fn handle_frame(request: &Request) -> Response {
    match process(request) {
        Ok(ack) => Response::ok(ack),
        Err(e) => {
            if !matches!(e, FrameError::MethodNotAllowed(_)) {
                error!(error = %e, "Error processing frame interaction");
            }
            e.into()
        }
    }
}

fn process(request: &Request) -> Result<Ack, FrameError> {
    request.require_post()?;
    let payload: FramePayload = serde_json::from_slice(&request.body)?;
    info!(
        trusted = ?payload.trusted_data,
        untrusted = ?payload.untrusted_data,
        "Frame interaction received"
    );
    Ok(Ack::now("Frame interaction processed successfully"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::http::Method;

    #[test]
    fn post_is_acknowledged() {
        let body = json!({
            "trustedData": { "messageBytes": "0a1b" },
            "untrustedData": { "fid": 3, "buttonIndex": 1 }
        });
        let response = handle_frame(&Request::post(body.to_string()));
        assert_eq!(response.status, 200);
        assert_eq!(response.body["success"], json!(true));
        assert_eq!(
            response.body["message"],
            json!("Frame interaction processed successfully")
        );
        assert!(response.body["timestamp"].is_string());
    }

    #[test]
    fn missing_fields_are_tolerated() {
        assert_eq!(handle_frame(&Request::post("{}")).status, 200);
    }

    #[test]
    fn other_methods_are_rejected() {
        let response = handle_frame(&Request::new(Method::Get, ""));
        assert_eq!(response.status, 405);
        assert_eq!(response.body, json!({ "error": "Method not allowed" }));
    }

    #[test]
    fn malformed_body_reports_internal_error() {
        let response = handle_frame(&Request::post("not json"));
        assert_eq!(response.status, 500);
        assert_eq!(response.body["error"], json!("Internal server error"));
        assert!(response.body["message"].as_str().is_some_and(|m| !m.is_empty()));
    }
}
