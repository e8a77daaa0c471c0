//! Minimal request/response model shared by the handlers.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Value, json};

use crate::error::FrameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
}

#[derive(Clone, Debug)]
pub struct Request {
    pub method: Method,
    pub body: Vec<u8>,
}

impl Request {
    pub fn new(method: Method, body: impl Into<Vec<u8>>) -> Self {
        Self {
            method,
            body: body.into(),
        }
    }

    pub fn post(body: impl Into<Vec<u8>>) -> Self {
        Self::new(Method::Post, body)
    }

    /// Rejects anything but POST.
    pub(crate) fn require_post(&self) -> Result<(), FrameError> {
        match self.method {
            Method::Post => Ok(()),
            other => Err(FrameError::MethodNotAllowed(other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    pub fn ok(ack: Ack) -> Self {
        Self {
            status: 200,
            body: json!(ack),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: 404,
            body: json!({ "error": "Not found" }),
        }
    }

    /// Serialized body, ready to write.
    pub fn body_string(&self) -> String {
        self.body.to_string()
    }
}

impl From<FrameError> for Response {
    fn from(error: FrameError) -> Self {
        match error {
            FrameError::MethodNotAllowed(_) => Self {
                status: 405,
                body: json!({ "error": "Method not allowed" }),
            },
            FrameError::MalformedBody(source) => Self {
                status: 500,
                body: json!({
                    "error": "Internal server error",
                    "message": source.to_string(),
                }),
            },
        }
    }
}

/// Acknowledgement returned for every processed request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Ack {
    pub success: bool,
    pub message: String,
    /// RFC 3339 with millisecond precision.
    pub timestamp: String,
}

impl Ack {
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_parse_case_insensitively() {
        assert_eq!("post".parse::<Method>().unwrap(), Method::Post);
        assert_eq!("GET".parse::<Method>().unwrap(), Method::Get);
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn ack_timestamp_is_utc_millis() {
        let ack = Ack::now("ok");
        assert!(ack.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ack.timestamp).is_ok());
        // YYYY-MM-DDTHH:MM:SS.mmmZ
        assert_eq!(ack.timestamp.len(), 24);
    }
}
