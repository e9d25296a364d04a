//! Route handlers.
//!
//! A handler is any `Fn(Request) -> Reply`. [`Reply`] is the one type the
//! dispatcher awaits, whether the handler finished synchronously or returned
//! a future. Use [`from_fn`] for synchronous closures and [`from_async_fn`]
//! for async ones.

use futures_util::future::{self, BoxFuture};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use crate::http::request::Request;
use crate::http::response::Response;

/// Error raised by a handler. Not caught by dispatch.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type HandlerResult = Result<Response, BoxError>;

/// Shared, type-erased handler.
pub type HandlerFn = Arc<dyn Fn(Request) -> Reply + Send + Sync>;

/// A handler's outcome, either already available or still running.
///
/// Built only through [`Reply::ready`], [`Reply::pending`] or
/// `From<Response>`, so every reply resolves to a result.
pub struct Reply(Inner);

enum Inner {
    Ready(future::Ready<HandlerResult>),
    Pending(BoxFuture<'static, HandlerResult>),
}

impl Reply {
    pub fn ready(result: HandlerResult) -> Self {
        Reply(Inner::Ready(future::ready(result)))
    }

    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = HandlerResult> + Send + 'static,
    {
        Reply(Inner::Pending(Box::pin(future)))
    }
}

impl From<Response> for Reply {
    fn from(response: Response) -> Self {
        Reply::ready(Ok(response))
    }
}

impl Future for Reply {
    type Output = HandlerResult;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().0 {
            Inner::Ready(ready) => Pin::new(ready).poll(cx),
            Inner::Pending(future) => future.as_mut().poll(cx),
        }
    }
}

/// Conversion from what handler closures return into a [`HandlerResult`].
pub trait IntoHandlerResult {
    fn into_handler_result(self) -> HandlerResult;
}

impl IntoHandlerResult for Response {
    fn into_handler_result(self) -> HandlerResult {
        Ok(self)
    }
}

impl<E> IntoHandlerResult for Result<Response, E>
where
    E: Into<BoxError>,
{
    fn into_handler_result(self) -> HandlerResult {
        self.map_err(Into::into)
    }
}

/// Wrap a synchronous closure.
pub fn from_fn<F, R>(f: F) -> HandlerFn
where
    F: Fn(Request) -> R + Send + Sync + 'static,
    R: IntoHandlerResult,
{
    Arc::new(move |request| Reply::ready(f(request).into_handler_result()))
}

/// Wrap an async closure.
pub fn from_async_fn<F, Fut>(f: F) -> HandlerFn
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future + Send + 'static,
    Fut::Output: IntoHandlerResult,
{
    Arc::new(move |request| {
        let future = f(request);
        Reply::pending(async move { future.await.into_handler_result() })
    })
}
