//! Handler responses.
//!
//! # Design Decisions
//! - Status is a bare integer; the router only ever synthesizes 404 itself
//! - Body is optional JSON; the transport decides how to render it

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What a handler produces, returned verbatim by dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl Response {
    /// A response with no body.
    pub fn new(status: u16) -> Self {
        Self { status, body: None }
    }

    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    /// `200` with a JSON body.
    pub fn ok(body: Value) -> Self {
        Self::json(200, body)
    }

    /// The response for a request no route matched.
    pub fn not_found() -> Self {
        Self::new(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_body_is_omitted() {
        let json = serde_json::to_value(Response::not_found()).unwrap();
        assert_eq!(json, json!({"status": 404}));
    }

    #[test]
    fn test_body_round_trip() {
        let response: Response = serde_json::from_value(json!({"status": 200, "body": []})).unwrap();
        assert_eq!(response, Response::ok(json!([])));
    }
}
