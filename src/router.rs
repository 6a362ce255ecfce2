//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. You register a path, you
//! get a handler. A path that exists under another method answers 405 with an
//! `Allow` header, or 200 with the same header for an unrouted `OPTIONS`. A
//! path that exists under no method answers 404.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use http::StatusCode;
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// It is read-only from then on. Each registration returns `self` so calls
/// chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

/// Outcome of matching one method + path against the table.
pub(crate) enum Lookup {
    Found(Method, BoxedHandler, HashMap<String, String>),
    MethodNotAllowed(Vec<Method>),
    /// `OPTIONS` on a path no `OPTIONS` route claims.
    Options(Vec<Method>),
    NotFound,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them:
    ///
    /// ```rust
    /// # use ponte::{Method, Request, Response, Router};
    /// # async fn pokemon(_: Request) -> Response { Response::text("") }
    /// Router::new().on(Method::Get, "/retornarPokemon/{nome}", pokemon);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid pattern or conflicts with a route
    /// already registered for `method`. The table is built at startup, so
    /// this is a programming error rather than a runtime condition.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{method} {path}`: {e}"));
        self
    }

    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Get, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Post, path, handler)
    }

    pub fn put(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Put, path, handler)
    }

    pub fn delete(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Delete, path, handler)
    }

    pub(crate) fn lookup(&self, method: Option<Method>, path: &str) -> Lookup {
        if let Some(m) = method {
            if let Some(Ok(matched)) = self.routes.get(&m).map(|tree| tree.at(path)) {
                let handler = Arc::clone(matched.value);
                let params = matched.params.iter()
                    .map(|(k, v)| (k.to_owned(), v.to_owned()))
                    .collect();
                return Lookup::Found(m, handler, params);
            }
        }

        let mut allowed: Vec<Method> = self.routes.iter()
            .filter(|(m, tree)| Some(**m) != method && tree.at(path).is_ok())
            .map(|(m, _)| *m)
            .collect();

        if allowed.is_empty() {
            return Lookup::NotFound;
        }
        allowed.sort();
        if method == Some(Method::Options) {
            allowed.push(Method::Options);
            return Lookup::Options(allowed);
        }
        Lookup::MethodNotAllowed(allowed)
    }

    /// Routes one request with an already-collected body and runs its handler.
    pub(crate) async fn respond(&self, parts: http::request::Parts, body: Bytes) -> Response {
        let method = Method::try_from(&parts.method).ok();
        let path = parts.uri.path().to_owned();

        match self.lookup(method, &path) {
            Lookup::Found(method, handler, params) => {
                handler(Request::new(method, path, parts.headers, body, params)).await
            }
            Lookup::MethodNotAllowed(allowed) => {
                Response::builder()
                    .status(StatusCode::METHOD_NOT_ALLOWED)
                    .header("allow", &allow_header(&allowed))
                    .empty()
            }
            Lookup::Options(allowed) => {
                Response::builder().header("allow", &allow_header(&allowed)).empty()
            }
            Lookup::NotFound => Response::status(StatusCode::NOT_FOUND),
        }
    }
}

fn allow_header(methods: &[Method]) -> String {
    methods.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ")
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(method: &str, uri: &str) -> http::request::Parts {
        http::Request::builder()
            .method(method)
            .uri(uri)
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    async fn echo_name(req: Request) -> Response {
        Response::text(req.param("name").unwrap_or("-").to_owned())
    }

    fn app() -> Router {
        Router::new()
            .get("/items/{name}", echo_name)
            .delete("/items/{name}", echo_name)
            .post("/items", |_req: Request| async { StatusCode::CREATED })
            .put("/items/{name}/tags", |req: Request| async move {
                let tag = req.headers().get("x-tag").and_then(|v| v.to_str().ok());
                format!("{} {} {}", req.method(), req.path(), tag.unwrap_or("-"))
            })
    }

    #[tokio::test]
    async fn extracts_named_segment() {
        let res = app().respond(parts("GET", "/items/pikachu"), Bytes::new()).await;
        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(res.body(), b"pikachu");
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let res = app().respond(parts("GET", "/nowhere"), Bytes::new()).await;
        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);

        // The wildcard covers exactly one segment.
        let res = app().respond(parts("GET", "/items/a/b"), Bytes::new()).await;
        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn wrong_method_lists_allowed_ones() {
        let res = app().respond(parts("PUT", "/items/x"), Bytes::new()).await;
        assert_eq!(res.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(res.header("allow"), Some("DELETE, GET"));
    }

    #[tokio::test]
    async fn extension_method_is_not_allowed() {
        let res = app().respond(parts("PURGE", "/items"), Bytes::new()).await;
        assert_eq!(res.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(res.header("allow"), Some("POST"));
    }

    #[tokio::test]
    async fn extension_method_on_unknown_path_is_not_found() {
        let res = app().respond(parts("PURGE", "/nowhere"), Bytes::new()).await;
        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(res.header("allow"), None);
    }

    #[tokio::test]
    async fn options_lists_methods_for_the_path() {
        let res = app().respond(parts("OPTIONS", "/items/x"), Bytes::new()).await;
        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(res.header("allow"), Some("DELETE, GET, OPTIONS"));

        let res = app().respond(parts("OPTIONS", "/nowhere"), Bytes::new()).await;
        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn handler_sees_method_path_and_headers() {
        let mut parts = parts("PUT", "/items/x/tags");
        parts.headers.insert("x-tag", "rare".parse().unwrap());
        let res = app().respond(parts, Bytes::new()).await;
        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(res.body(), b"PUT /items/x/tags rare");
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn conflicting_routes_panic() {
        let _ = Router::new()
            .get("/items/{name}", echo_name)
            .get("/items/{id}", echo_name);
    }
}
