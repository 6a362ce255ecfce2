//! Server settings.
//!
//! The demo server always runs with [`Config::default`]. The fields are
//! public so tests can point the upstreams at local stand-ins.

/// Where to listen and which upstream APIs to proxy.
#[derive(Clone, Debug)]
pub struct Config {
    /// `host:port` the server binds to.
    pub addr: String,
    /// Proxied verbatim by `/retornarUsuarioAleatorio`.
    pub random_user_url: String,
    /// `/retornarPokemon/{nome}` appends `nome` as a path segment.
    pub pokemon_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:10000".to_owned(),
            random_user_url: "https://randomuser.me/api/".to_owned(),
            pokemon_base_url: "https://pokeapi.co/api/v2/pokemon/".to_owned(),
        }
    }
}
