use std::sync::Arc;

use beerscanner_shared::{
    const_config::client::CLIENT_TOKEN_STORAGE_KEY, log_err_as_error, log_err_as_warn,
    token::AuthToken,
};
use secrecy::ExposeSecret as _;
use tracing::{info, warn};

use crate::storage::KeyValueStorage;

use super::{SessionBroadcaster, SessionEvent};

/// The single persisted bearer token.
///
/// Storage failures are logged and otherwise treated as if there was no
/// token, they never reach the caller.
#[derive(Debug, Clone)]
pub struct TokenStore {
    storage: Arc<dyn KeyValueStorage>,
    broadcaster: SessionBroadcaster,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, broadcaster: SessionBroadcaster) -> Self {
        Self {
            storage,
            broadcaster,
        }
    }

    pub fn get(&self) -> Option<AuthToken> {
        match self.storage.get(CLIENT_TOKEN_STORAGE_KEY) {
            Ok(value) => value
                .filter(|value| !value.is_empty())
                .map(AuthToken::from),
            Err(mishap) => {
                warn!(?mishap, "failed to read token");
                None
            }
        }
    }

    /// Replaces any existing token then notifies the broadcaster's listeners
    #[tracing::instrument(skip_all)]
    pub fn set(&self, token: AuthToken) {
        log_err_as_warn!(
            self.storage
                .set(CLIENT_TOKEN_STORAGE_KEY, token.expose_secret()),
            "failed to store token"
        );
        info!("token stored");
        self.broadcaster.emit(SessionEvent::TokenChanged);
    }

    /// Does not notify anyone, callers update the session themselves
    #[tracing::instrument(skip_all)]
    pub fn remove(&self) {
        // A token left behind would sign the user back in on the next start
        log_err_as_error!(
            self.storage.remove(CLIENT_TOKEN_STORAGE_KEY),
            "failed to remove token"
        );
        info!("token removed");
    }

    pub fn broadcaster(&self) -> &SessionBroadcaster {
        &self.broadcaster
    }
}
