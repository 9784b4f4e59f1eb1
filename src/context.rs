use crate::config::Config;
use crate::services::{LoginService, StateStore};

/// Shared handler state, built once in `main` and dropped with the router.
#[derive(Clone)]
pub struct AppContext {
    pub store: StateStore,
    pub login: LoginService,
    pub config: Config,
}

impl AppContext {
    pub fn new(config: Config) -> crate::errors::LoginResult<Self> {
        let login = LoginService::new(&config.auth)?;
        Ok(Self {
            store: StateStore::new(),
            login,
            config,
        })
    }
}
