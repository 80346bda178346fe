use anagram_config::Config;
use anagram_core::LoadError;
use anagram_io::{RouterOptions, Transport, TransportError, create_router};
use axum::Router;

use crate::state::AppState;

/// Fully initialized service waiting to be handed to its transport
pub struct Server<T> {
    addr: String,
    router: Router,
    transport: T,
}

/// Load the dictionary and wire the router. Nothing is bound yet.
pub fn create_server<T: Transport>(config: Config, transport: T) -> Result<Server<T>, LoadError> {
    let state = AppState::load(config)?;

    let options = RouterOptions {
        static_dir: state.config.network.static_dir.clone(),
        enable_cors: state.config.network.enable_cors,
    };
    let router = create_router(state.index, &options);

    Ok(Server {
        addr: state.config.network.listen_addr,
        router,
        transport,
    })
}

impl<T: Transport> Server<T> {
    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub async fn run(self) -> Result<(), TransportError> {
        self.transport.serve(&self.addr, self.router).await
    }
}
