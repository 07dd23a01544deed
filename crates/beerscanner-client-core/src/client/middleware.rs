use std::sync::Arc;

use beerscanner_shared::const_config::route::ROUTE_LOGIN;
use reqwest::StatusCode;
use tracing::warn;

use crate::{
    navigation::Navigator,
    session::{SessionEvent, TokenStore},
};

use super::transport::ApiResponse;

/// Runs on every response before the caller sees it.
///
/// A `401` from any endpoint means the server no longer accepts the token at
/// all, so the whole session ends here instead of only failing the one call.
#[derive(Debug, Clone)]
pub(crate) struct UnauthorizedHook {
    tokens: TokenStore,
    navigator: Arc<dyn Navigator>,
}

impl UnauthorizedHook {
    pub(crate) fn new(tokens: TokenStore, navigator: Arc<dyn Navigator>) -> Self {
        Self { tokens, navigator }
    }

    pub(crate) fn inspect(&self, response: &ApiResponse) {
        if response.status != StatusCode::UNAUTHORIZED {
            return;
        }
        warn!("server rejected the session, signing out");
        self.tokens.remove();
        self.tokens.broadcaster().emit(SessionEvent::Unauthorized);
        self.navigator.navigate(ROUTE_LOGIN);
    }
}
