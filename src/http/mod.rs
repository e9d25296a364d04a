//! Request handling subsystem.
//!
//! # Data Flow
//! ```text
//! Transport (server.rs, Axum)
//!     → dispatch.rs (match route, validate body)
//!     → request.rs (Request: path info, params, body)
//!     → handler.rs (invoke handler, await Reply)
//!     → response.rs (Response returned verbatim)
//!     → server.rs (render status + JSON body)
//! ```

pub mod dispatch;
pub mod handler;
pub mod request;
pub mod response;
pub mod server;

pub use dispatch::{dispatch, DispatchError};
pub use handler::{from_async_fn, from_fn, BoxError, HandlerFn, Reply};
pub use request::{Body, PathInfo, Request};
pub use response::Response;
pub use server::{HttpServer, ServerError};
