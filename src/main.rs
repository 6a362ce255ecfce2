//! Demo server on port 10000.
//!
//! Run with:
//!   RUST_LOG=ponte=debug cargo run
//!
//! Try:
//!   curl http://localhost:10000/retornarStruct
//!   curl http://localhost:10000/retornarUsuarioAleatorio
//!   curl http://localhost:10000/retornarPokemon/pikachu

use ponte::{Config, Server, routes};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ponte::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ponte=info")),
        )
        .init();

    let config = Config::default();
    let app = routes::router(&config)?;

    Server::bind(&config.addr)?.serve(app).await
}
