//! The demo server's route table.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/retornarUsuarioAleatorio` | proxies the random-user API |
//! | GET | `/retornarStruct` | serializes [`Message::literal`] |
//! | GET | `/retornarPokemon/{nome}` | proxies the Pokémon API for `nome` |
//! | GET | `/healthz`, `/readyz` | [`health`] probes |
//!
//! Proxied bodies are passed through byte for byte with the upstream status
//! and `content-type: application/json`, whatever the upstream sent.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::Config;
use crate::error::Error;
use crate::fetch::Fetcher;
use crate::health;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// Longest accepted `{nome}` segment, in bytes.
const MAX_NAME_LEN: usize = 64;

/// The fixed record served by `/retornarStruct`.
///
/// Keys are capitalized on the wire: `{"Body":…,"Number":…,"Decimal":…,"Validate":…}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message {
    pub body: String,
    pub number: i8,
    pub decimal: f32,
    pub validate: bool,
}

impl Message {
    #[allow(clippy::excessive_precision)]
    pub fn literal() -> Self {
        Self {
            body: "Hello, Mundão!".to_owned(),
            number: 124,
            decimal: 1687.87845,
            validate: true,
        }
    }
}

/// Builds the router for `config`.
///
/// Fails if either upstream URL does not parse, or if the Pokémon base URL
/// cannot have path segments appended (e.g. `mailto:`).
pub fn router(config: &Config) -> Result<Router, Error> {
    let pokemon_base = Url::parse(&config.pokemon_base_url)?;
    if pokemon_base.cannot_be_a_base() {
        return Err(Error::Url(format!("{pokemon_base} cannot take path segments")));
    }

    let upstreams = Arc::new(Upstreams {
        fetcher: Fetcher::new(),
        random_user: Url::parse(&config.random_user_url)?,
        pokemon_base,
    });
    let random = Arc::clone(&upstreams);
    let pokemon = upstreams;

    Ok(Router::new()
        .get("/retornarUsuarioAleatorio", move |req: Request| {
            let up = Arc::clone(&random);
            async move { up.random_user(req).await }
        })
        .get("/retornarStruct", message)
        .get("/retornarPokemon/{nome}", move |req: Request| {
            let up = Arc::clone(&pokemon);
            async move { up.pokemon(req).await }
        })
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness))
}

/// `GET /retornarStruct`
pub async fn message(_req: Request) -> Result<Response, Error> {
    let bytes = serde_json::to_vec(&Message::literal())?;
    Ok(Response::json(bytes))
}

/// Appends `name` to `base` as one escaped path segment.
///
/// `name` must be 1..=64 bytes of ASCII letters, digits, `-` or `_`; anything
/// else is rejected before a URL is built.
pub fn pokemon_url(base: &Url, name: &str) -> Result<Url, Error> {
    validate_name(name)?;

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| Error::Url(format!("{base} cannot take path segments")))?
        .pop_if_empty()
        .push(name);
    Ok(url)
}

fn validate_name(name: &str) -> Result<(), Error> {
    let reason = if name.is_empty() {
        "must not be empty"
    } else if name.len() > MAX_NAME_LEN {
        "longer than 64 bytes"
    } else if !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_') {
        "only ASCII letters, digits, '-' and '_' are allowed"
    } else {
        return Ok(());
    };
    Err(Error::InvalidParam { name: "nome", reason })
}

/// Shared by the two proxy handlers.
struct Upstreams {
    fetcher: Fetcher,
    random_user: Url,
    pokemon_base: Url,
}

impl Upstreams {
    /// `GET /retornarUsuarioAleatorio`
    async fn random_user(&self, _req: Request) -> Result<Response, Error> {
        self.proxy(self.random_user.clone()).await
    }

    /// `GET /retornarPokemon/{nome}`
    async fn pokemon(&self, req: Request) -> Result<Response, Error> {
        let name = req.param("nome").unwrap_or_default();
        let url = pokemon_url(&self.pokemon_base, name)?;
        self.proxy(url).await
    }

    async fn proxy(&self, url: Url) -> Result<Response, Error> {
        let fetched = self.fetcher.get(url).await?;
        Ok(Response::builder().status(fetched.status).json(fetched.body))
    }
}
