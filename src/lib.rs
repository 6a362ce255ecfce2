//! # ponte
//!
//! A tiny HTTP router and the demo server built on it. The server proxies
//! two public JSON APIs and serves one fixed record as JSON.
//!
//! ## Layers
//!
//! - [`Router`]: radix-tree routing per method via [`matchit`], with `{name}`
//!   path parameters. Unmatched paths answer 404, wrong methods 405.
//! - [`Server`]: tokio accept loop, HTTP/1.1 and HTTP/2 through hyper,
//!   graceful shutdown on SIGTERM / Ctrl-C.
//! - [`Fetcher`]: one outbound GET per call through `reqwest`.
//! - [`routes`]: the three demo routes plus health probes.
//!
//! A request that fails (unreachable upstream, rejected path segment) gets an
//! error response. The server keeps serving.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use ponte::{Config, Server, routes};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ponte::Error> {
//!     let config = Config::default();
//!     let app = routes::router(&config)?;
//!     Server::bind(&config.addr)?.serve(app).await
//! }
//! ```
//!
//! Handlers are plain async functions or closures returning anything that
//! implements [`IntoResponse`], including `Result<Response, Error>`:
//!
//! ```rust
//! use ponte::{Error, Request, Response, Router};
//!
//! async fn hello(req: Request) -> Result<Response, Error> {
//!     let name = req.param("name").unwrap_or("world");
//!     let body = serde_json::to_vec(&serde_json::json!({ "hello": name }))?;
//!     Ok(Response::json(body))
//! }
//!
//! let app = Router::new().get("/hello/{name}", hello);
//! ```

mod config;
mod error;
mod fetch;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;

pub mod health;
pub mod routes;

pub use config::Config;
pub use error::Error;
pub use fetch::{Fetched, Fetcher};
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
