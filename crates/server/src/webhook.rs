//! Webhook endpoint for client-side notifications.

use std::convert::Infallible;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};

use crate::error::FrameError;
use crate::http::{Ack, Request, Response};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WebhookAction {
    GameStart,
    NftMinted,
    MilestoneReached,
    /// Anything else, including a missing action (empty string).
    Other(String),
}

impl FromStr for WebhookAction {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "game_start" => WebhookAction::GameStart,
            "nft_minted" => WebhookAction::NftMinted,
            "milestone_reached" => WebhookAction::MilestoneReached,
            other => WebhookAction::Other(other.to_string()),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl WebhookPayload {
    pub fn action(&self) -> WebhookAction {
        let Ok(action) = self.action.as_deref().unwrap_or_default().parse();
        action
    }
}

pub fn handle_webhook(request: &Request) -> Response {
    match process(request) {
        Ok(ack) => Response::ok(ack),
        Err(e) => {
            if !matches!(e, FrameError::MethodNotAllowed(_)) {
                error!(error = %e, "Webhook error");
            }
            e.into()
        }
    }
}

fn process(request: &Request) -> Result<Ack, FrameError> {
    request.require_post()?;
    let payload: WebhookPayload = serde_json::from_slice(&request.body)?;
    info!(action = ?payload.action, data = ?payload.data, "Webhook received");

    match payload.action() {
        WebhookAction::GameStart => info!("Game started by user"),
        WebhookAction::NftMinted => info!(data = ?payload.data, "NFT minted"),
        WebhookAction::MilestoneReached => info!(data = ?payload.data, "Milestone reached"),
        WebhookAction::Other(action) => info!(%action, "Unknown action"),
    }

    Ok(Ack::now("Webhook processed successfully"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::http::Method;

    fn post(body: Value) -> Response {
        handle_webhook(&Request::post(body.to_string()))
    }

    #[test]
    fn known_actions_are_acknowledged() {
        for action in ["game_start", "nft_minted", "milestone_reached"] {
            let response = post(json!({ "action": action, "data": { "milestone": 100 } }));
            assert_eq!(response.status, 200, "{action}");
            assert_eq!(response.body["message"], json!("Webhook processed successfully"));
        }
    }

    #[test]
    fn unknown_and_missing_actions_still_succeed() {
        assert_eq!(post(json!({ "action": "level_up" })).status, 200);
        assert_eq!(post(json!({})).status, 200);
    }

    #[test]
    fn actions_parse_to_variants() {
        let payload: WebhookPayload =
            serde_json::from_value(json!({ "action": "nft_minted", "data": 1 })).unwrap();
        assert_eq!(payload.action(), WebhookAction::NftMinted);
        assert_eq!(
            WebhookPayload::default().action(),
            WebhookAction::Other(String::new())
        );
    }

    #[test]
    fn non_post_and_bad_bodies_fail() {
        assert_eq!(handle_webhook(&Request::new(Method::Put, "{}")).status, 405);

        let response = handle_webhook(&Request::post("{\"action\":"));
        assert_eq!(response.status, 500);
        assert_eq!(response.body["error"], json!("Internal server error"));
    }
}
