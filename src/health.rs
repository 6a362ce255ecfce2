//! Liveness and readiness probes, mounted at `/healthz` and `/readyz` by
//! [`routes::router`](crate::routes::router).
//!
//! Neither probe touches the upstream APIs: an unreachable upstream is
//! reported per request as a 502, not by pulling the server out of rotation.

use crate::{Request, Response};

/// Always `200 OK` with body `"ok"`. Answering at all means alive.
pub async fn liveness(_req: Request) -> Response {
    Response::text("ok")
}

/// `200 OK` with body `"ready"`. The route table is built before the
/// listener opens, so a server that answers is ready.
pub async fn readiness(_req: Request) -> Response {
    Response::text("ready")
}
