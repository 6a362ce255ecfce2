//! Handler trait and type erasure.
//!
//! Every route handler, whatever its concrete type, is stored as the same
//! boxed closure: `Request` in, pinned `Response` future out. Converting a
//! handler wraps it once at registration; each request then costs one `Arc`
//! clone and one indirect call.
//!
//! Closures work as well as `async fn`s, which is how handlers get at shared
//! state:
//!
//! ```text
//! let up = Arc::clone(&upstreams);
//! router.get("/x", move |req| { let up = Arc::clone(&up); async move { up.x(req).await } })
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// What a stored handler returns for one request.
#[doc(hidden)]
pub type ResponseFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// A handler with its concrete type erased. Shared by every connection.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn Fn(Request) -> ResponseFuture + Send + Sync>;

/// Anything that can answer a routed request.
///
/// Implemented for every function or closure shaped like
///
/// ```text
/// async fn name(req: Request) -> impl IntoResponse
/// ```
///
/// which includes handlers returning `Result<Response, Error>`.
pub trait Handler: Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

impl<F, Fut> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future + Send + 'static,
    Fut::Output: IntoResponse,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(move |req| -> ResponseFuture {
            let pending = self(req);
            Box::pin(async move { pending.await.into_response() })
        })
    }
}
