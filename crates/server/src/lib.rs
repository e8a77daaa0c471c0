//! Frame and webhook endpoints for social-client embeds.
//!
//! Handlers are framework-agnostic: they take a [`Request`] (method + raw
//! body) and return a [`Response`] (status + JSON body). Any HTTP server can
//! mount them through [`route`].
//!
//! Every accepted request is logged and acknowledged with
//! `{success, message, timestamp}`; nothing is persisted.

mod error;
mod frame;
mod http;
mod webhook;

pub use error::FrameError;
pub use frame::{FramePayload, handle_frame};
pub use http::{Ack, Method, Request, Response};
pub use webhook::{WebhookAction, WebhookPayload, handle_webhook};

pub const FRAME_PATH: &str = "/api/frame";
pub const WEBHOOK_PATH: &str = "/api/webhook";

/// Dispatches by path; unknown paths get 404.
pub fn route(path: &str, request: &Request) -> Response {
    match path.trim_end_matches('/') {
        FRAME_PATH => handle_frame(request),
        WEBHOOK_PATH => handle_webhook(request),
        _ => Response::not_found(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_by_path() {
        let request = Request::post(br#"{"action":"game_start"}"#);
        assert_eq!(route("/api/webhook", &request).status, 200);
        assert_eq!(route("/api/frame/", &request).status, 200);
        assert_eq!(route("/api/other", &request).status, 404);
    }
}
