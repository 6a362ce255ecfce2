//! Shared helpers: run a real server on an ephemeral port.

#![allow(dead_code)]

use std::net::SocketAddr;

use ponte::{Config, Request, Response, Router, Server, routes};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A running server. Dropping it sends the shutdown signal.
pub struct Running {
    pub addr: SocketAddr,
    _stop: oneshot::Sender<()>,
}

impl Running {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

pub async fn spawn(router: Router) -> Running {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop, stopped) = oneshot::channel::<()>();

    tokio::spawn(async move {
        Server::from_listener(listener)
            .serve_with_shutdown(router, async {
                let _ = stopped.await;
            })
            .await
            .unwrap();
    });

    Running { addr, _stop: stop }
}

/// Stand-in for the public APIs.
///
/// - `GET /api/` returns a fixed random-user document.
/// - `GET /pokemon/{name}` echoes the name it received; `missingno` is a 404.
pub async fn spawn_upstream() -> Running {
    let router = Router::new()
        .get("/api/", |_req: Request| async {
            Response::json(br#"{"results":[{"name":{"first":"Ana"}}]}"#.to_vec())
        })
        .get("/pokemon/{name}", |req: Request| async move {
            let name = req.param("name").unwrap_or_default().to_owned();
            if name == "missingno" {
                return Response::builder()
                    .status(http::StatusCode::NOT_FOUND)
                    .text("Not Found");
            }
            Response::json(format!(r#"{{"name":"{name}"}}"#).into_bytes())
        });
    spawn(router).await
}

/// Config whose upstreams point at `upstream`.
pub fn config_for(upstream: SocketAddr) -> Config {
    Config {
        addr: "127.0.0.1:0".to_owned(),
        random_user_url: format!("http://{upstream}/api/"),
        pokemon_base_url: format!("http://{upstream}/pokemon/"),
    }
}

/// Upstream that promises 100 bytes, sends 5, then hangs up on every request.
pub async fn spawn_truncating_upstream() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf).await;
                let _ = stream
                    .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 100\r\n\r\nshort")
                    .await;
                let _ = stream.shutdown().await;
            });
        }
    });

    addr
}

/// Address nothing is listening on.
pub async fn dead_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

pub async fn spawn_app(config: &Config) -> Running {
    spawn(routes::router(config).unwrap()).await
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
