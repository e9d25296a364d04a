//! Sample routes served by the `segment-router` binary.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::http::{from_async_fn, from_fn, Request, Response};
use crate::routing::{Method, RouteOptions, Router};
use crate::schema::{optional, Schema, SchemaError, Typed, Validation};

#[derive(Debug, Deserialize, Serialize)]
struct Probe {
    test: f64,
}

#[derive(Debug, Deserialize, Serialize)]
struct NewUser {
    name: String,
    #[serde(default)]
    email: Option<String>,
}

pub fn router() -> Router {
    Router::builder()
        .get("/users", from_async_fn(|_| async { Response::ok(json!([])) }))
        .register(
            "/users/:id/:test",
            Method::Get,
            RouteOptions::new(from_async_fn(|req: Request| async move {
                serde_json::to_value(&req.params).map(Response::ok)
            }))
            .body_schema(optional(Typed::<Probe>::new())),
        )
        .get("/users/:id.number", from_fn(show_user))
        .register(
            "/users",
            Method::Post,
            RouteOptions::new(from_fn(create_user)).body_schema(new_user),
        )
        .build()
}

/// `NewUser` shape, plus an `email` that at least contains `@`.
fn new_user(body: Option<&Value>) -> Validation {
    let checked = Typed::<NewUser>::new().validate(body);
    let bad_email = checked
        .value()
        .and_then(|user| user.get("email"))
        .and_then(Value::as_str)
        .is_some_and(|email| !email.contains('@'));

    if bad_email {
        Validation::Invalid(SchemaError::at("email", "must contain `@`"))
    } else {
        checked
    }
}

fn show_user(req: Request) -> Response {
    match req.params.typed("id") {
        Ok(id) => Response::ok(json!({ "id": id })),
        Err(e) => Response::json(400, json!({ "error": e.to_string() })),
    }
}

fn create_user(req: Request) -> Response {
    match req.body.validation().map(|v| v.clone().into_result()) {
        Some(Ok(user)) => Response::json(201, user.unwrap_or_default()),
        Some(Err(e)) => Response::json(422, json!({ "error": e })),
        None => Response::new(500),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_users() {
        let response = router().dispatch("/users", Method::Get, None).await.unwrap();
        assert_eq!(response, Response::ok(json!([])));
    }

    #[tokio::test]
    async fn test_echo_params() {
        let response = router().dispatch("/users/10/aaa", Method::Get, None).await.unwrap();
        assert_eq!(response, Response::ok(json!({"id": "10", "test": "aaa"})));
    }

    #[tokio::test]
    async fn test_numeric_id() {
        let router = router();
        let ok = router.dispatch("/users/7", Method::Get, None).await.unwrap();
        assert_eq!(ok, Response::ok(json!({"id": 7.0})));

        let bad = router.dispatch("/users/seven", Method::Get, None).await.unwrap();
        assert_eq!(bad.status, 400);
    }

    #[tokio::test]
    async fn test_create_user() {
        let router = router();
        let created = router
            .dispatch("/users", Method::Post, Some(json!({"name": "ada"})))
            .await
            .unwrap();
        assert_eq!(created, Response::json(201, json!({"name": "ada", "email": null})));

        let rejected = router
            .dispatch("/users", Method::Post, Some(json!({"nom": "ada"})))
            .await
            .unwrap();
        assert_eq!(rejected.status, 422);
    }

    #[tokio::test]
    async fn test_create_user_reports_field_path() {
        let rejected = router()
            .dispatch("/users", Method::Post, Some(json!({"name": "ada", "email": "nowhere"})))
            .await
            .unwrap();
        assert_eq!(
            rejected,
            Response::json(422, json!({"error": {"path": "email", "message": "must contain `@`"}}))
        );

        let accepted = router()
            .dispatch("/users", Method::Post, Some(json!({"name": "ada", "email": "ada@example.com"})))
            .await
            .unwrap();
        assert_eq!(accepted.status, 201);
    }

    #[tokio::test]
    async fn test_delete_not_registered() {
        let response = router().dispatch("/users/1", Method::Delete, None).await.unwrap();
        assert_eq!(response, Response::not_found());
    }
}
