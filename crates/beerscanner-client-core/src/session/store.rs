use std::sync::{Arc, Mutex, Weak};

use beerscanner_shared::{
    const_config::route::ROUTE_HOME,
    model::{PartialUser, User},
    token::AuthToken,
};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{
    client::{await_response, no_ui_notify},
    tracked::TrackedStore,
    Client,
};

use super::{SessionDecoder, SubscriptionId};

/// What is known about the signed in user
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    SignedOut,
    /// Built from the token's claims while the full profile is being fetched
    PartiallySignedIn(PartialUser),
    /// The profile as returned by the server
    FullySignedIn(User),
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        !matches!(self, Self::SignedOut)
    }

    pub fn user_name(&self) -> Option<&str> {
        match self {
            SessionState::SignedOut => None,
            SessionState::PartiallySignedIn(partial) => Some(&partial.name),
            SessionState::FullySignedIn(user) => Some(&user.name),
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            SessionState::SignedOut => None,
            SessionState::PartiallySignedIn(partial) => Some(&partial.email),
            SessionState::FullySignedIn(user) => Some(&user.email),
        }
    }
}

/// The state along with how many transitions led to it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    /// Incremented on every transition. Work started at one generation only
    /// applies its result if the generation has not moved on since.
    pub generation: u64,
    pub state: SessionState,
}

/// Owns the current-user state and keeps it in line with the stored token.
///
/// Cheap to clone, all clones share the same state.
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

#[derive(Debug)]
struct SessionStoreInner {
    client: Client,
    decoder: SessionDecoder,
    tracked: TrackedStore,
    state: watch::Sender<SessionSnapshot>,
    subscription: Mutex<Option<SubscriptionId>>,
}

impl SessionStore {
    pub fn new(client: Client, tracked: TrackedStore) -> Self {
        let decoder = SessionDecoder::new(client.tokens().clone());
        let (state, _) = watch::channel(SessionSnapshot::default());
        Self {
            inner: Arc::new(SessionStoreInner {
                client,
                decoder,
                tracked,
                state,
                subscription: Mutex::new(None),
            }),
        }
    }

    /// Starts following the token and brings the state up to date with it
    #[tracing::instrument(skip(self))]
    pub fn start(&self) {
        let weak: Weak<SessionStoreInner> = Arc::downgrade(&self.inner);
        let id = self
            .inner
            .client
            .tokens()
            .broadcaster()
            .subscribe(move |event| {
                if let Some(inner) = weak.upgrade() {
                    debug!(%event, "session event received");
                    SessionStore { inner }.resync();
                }
            });
        let previous = self
            .inner
            .subscription
            .lock()
            .expect("mutex poisoned")
            .replace(id);
        if let Some(previous) = previous {
            self.unsubscribe(previous);
        }
        self.resync();
    }

    /// Stops following the token, the state is left as it is
    pub fn stop(&self) {
        let previous = self
            .inner
            .subscription
            .lock()
            .expect("mutex poisoned")
            .take();
        if let Some(previous) = previous {
            self.unsubscribe(previous);
        }
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.client.tokens().broadcaster().unsubscribe(id);
    }

    /// Re-derives the state from the stored token.
    ///
    /// Signing in happens in two steps. The claims are applied immediately,
    /// then the full profile replaces them once the server answers. A failed
    /// fetch leaves the claims in place until the next call.
    #[tracing::instrument(skip(self))]
    pub fn resync(&self) {
        if !self.inner.decoder.is_valid() {
            self.sign_out_locally();
            return;
        }
        let Some(partial) = self.inner.decoder.current_partial_user() else {
            self.sign_out_locally();
            return;
        };
        let generation = self.transition(SessionState::PartiallySignedIn(partial));
        info!(generation, "signed in from token claims");
        self.fetch_profile(generation);
        // Lists from an earlier session must not land after this one's
        self.inner.tracked.supersede_pending();
        self.inner.tracked.refresh_in_background();
    }

    #[tracing::instrument(skip(self))]
    pub fn logout(&self) {
        self.inner.client.tokens().remove();
        self.sign_out_locally();
        self.inner.client.navigator().navigate(ROUTE_HOME);
    }

    /// Where the OAuth flow ends, with the token the server issued
    #[tracing::instrument(skip_all)]
    pub fn handle_oauth_callback(&self, token: AuthToken) {
        self.inner.client.tokens().set(token);
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.inner.state.subscribe()
    }

    pub fn current(&self) -> SessionSnapshot {
        self.inner.state.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.state.borrow().state.is_signed_in()
    }

    pub fn user_name(&self) -> Option<String> {
        self.inner
            .state
            .borrow()
            .state
            .user_name()
            .map(str::to_string)
    }

    pub fn tracked(&self) -> &TrackedStore {
        &self.inner.tracked
    }

    fn sign_out_locally(&self) {
        let generation = self.transition(SessionState::SignedOut);
        info!(generation, "signed out");
        self.inner.tracked.clear();
    }

    /// Unconditional, returns the new generation
    fn transition(&self, state: SessionState) -> u64 {
        let mut generation = 0;
        self.inner.state.send_modify(|snapshot| {
            snapshot.generation += 1;
            snapshot.state = state;
            generation = snapshot.generation;
        });
        generation
    }

    /// Checks and writes in one step, so nothing can slip in between
    fn transition_if_current(&self, expected_generation: u64, state: SessionState) -> bool {
        self.inner.state.send_if_modified(|snapshot| {
            if snapshot.generation != expected_generation {
                return false;
            }
            snapshot.generation += 1;
            snapshot.state = state;
            true
        })
    }

    fn fetch_profile(&self, generation: u64) {
        let rx = self.inner.client.current_user(no_ui_notify);
        let store = self.clone();
        tokio::spawn(async move {
            match await_response(rx).await {
                Ok(user) => {
                    if store.transition_if_current(generation, SessionState::FullySignedIn(user)) {
                        info!(generation, "profile loaded");
                    } else {
                        debug!(generation, "session moved on, discarding profile");
                    }
                }
                Err(mishap) => {
                    warn!(?mishap, "failed to load profile, keeping token claims");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use beerscanner_shared::{
        const_config::path::{
            PATH_API_USERS_ME, PATH_API_USERS_ME_TRACKED_BARS, PATH_API_USERS_ME_TRACKED_BEERS,
        },
        id::DbId,
    };
    use reqwest::StatusCode;

    use crate::test_support::{claims_expiring_in, make_token, settle, user_json, Harness};

    use super::*;

    fn expected_partial() -> PartialUser {
        PartialUser {
            email: "a@b.com".into(),
            name: "A".into(),
            google_id: "u1".into(),
            profile_picture: None,
        }
    }

    #[tokio::test]
    async fn starts_signed_out_without_token() {
        let harness = Harness::new();

        harness.session.start();

        assert_eq!(harness.session.current().state, SessionState::SignedOut);
        assert!(!harness.session.is_logged_in());
        assert!(harness.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn token_set_signs_in_partially_at_once() {
        // Arrange
        let harness = Harness::new();
        harness.session.start();
        let _gate = harness.transport.hold(PATH_API_USERS_ME);

        // Act
        harness.tokens.set(make_token(&claims_expiring_in(3600)));

        // Assert
        assert_eq!(
            harness.session.current().state,
            SessionState::PartiallySignedIn(expected_partial())
        );
        assert_eq!(harness.session.user_name().as_deref(), Some("A"));
    }

    #[tokio::test]
    async fn profile_replaces_claims() {
        // Arrange
        let harness = Harness::new();
        harness.session.start();
        harness
            .transport
            .respond_json(PATH_API_USERS_ME, user_json(42));

        // Act
        harness.tokens.set(make_token(&claims_expiring_in(3600)));
        settle().await;

        // Assert
        let SessionState::FullySignedIn(user) = harness.session.current().state else {
            panic!("expected a full profile");
        };
        assert_eq!(user.id, DbId::from(42));
        assert!(!user.is_admin);
    }

    #[tokio::test]
    async fn failed_profile_keeps_claims() {
        // Arrange
        let harness = Harness::new();
        harness.session.start();
        harness
            .transport
            .fail(PATH_API_USERS_ME, "network unreachable");

        // Act
        harness.tokens.set(make_token(&claims_expiring_in(3600)));
        settle().await;

        // Assert
        assert_eq!(
            harness.session.current().state,
            SessionState::PartiallySignedIn(expected_partial())
        );
    }

    #[tokio::test]
    async fn logout_discards_late_profile() {
        // Arrange
        let harness = Harness::new();
        harness.session.start();
        let gate = harness.transport.hold(PATH_API_USERS_ME);
        harness.tokens.set(make_token(&claims_expiring_in(3600)));
        settle().await;

        // Act
        harness.session.logout();
        gate.release(StatusCode::OK, user_json(42).to_string());
        settle().await;

        // Assert
        assert_eq!(harness.session.current().state, SessionState::SignedOut);
        assert!(harness.tokens.get().is_none());
        assert_eq!(harness.navigator.routes(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn newer_login_wins_over_older_profile() {
        // Arrange
        let harness = Harness::new();
        harness.session.start();
        let first_gate = harness.transport.hold(PATH_API_USERS_ME);
        harness.tokens.set(make_token(&claims_expiring_in(3600)));
        settle().await;
        harness
            .transport
            .respond_json(PATH_API_USERS_ME, user_json(2));

        // Act
        harness.tokens.set(make_token(&claims_expiring_in(7200)));
        settle().await;
        first_gate.release(StatusCode::OK, user_json(1).to_string());
        settle().await;

        // Assert
        let SessionState::FullySignedIn(user) = harness.session.current().state else {
            panic!("expected a full profile");
        };
        assert_eq!(user.id, DbId::from(2));
    }

    #[tokio::test]
    async fn newer_login_wins_over_older_tracked_lists() {
        // Arrange
        let harness = Harness::new();
        harness.session.start();
        harness
            .transport
            .respond_json(PATH_API_USERS_ME_TRACKED_BEERS, serde_json::json!([]));
        let first_gate = harness.transport.hold(PATH_API_USERS_ME_TRACKED_BARS);
        harness.tokens.set(make_token(&claims_expiring_in(3600)));
        settle().await;
        harness.transport.respond_json(
            PATH_API_USERS_ME_TRACKED_BARS,
            serde_json::json!([{"id": 2, "name": "Skúli", "location": "Fógetagarður"}]),
        );

        // Act
        harness.tokens.set(make_token(&claims_expiring_in(7200)));
        settle().await;
        first_gate.release(
            StatusCode::OK,
            serde_json::json!([{"id": 1, "name": "Kaldi", "location": "Laugavegur 20b"}])
                .to_string(),
        );
        settle().await;

        // Assert
        let bars = harness.tracked.current().resources.bars;
        let names: Vec<&str> = bars.iter().map(|bar| bar.name.as_str()).collect();
        assert_eq!(names, vec!["Skúli"]);
    }

    #[tokio::test]
    async fn expired_token_at_start_is_removed() {
        let harness = Harness::new();
        harness.tokens.set(make_token(&claims_expiring_in(-60)));

        harness.session.start();

        assert_eq!(harness.session.current().state, SessionState::SignedOut);
        assert!(harness.tokens.get().is_none());
    }

    #[tokio::test]
    async fn sign_in_refreshes_tracked_resources() {
        // Arrange
        let harness = Harness::new();
        harness.session.start();
        harness.transport.respond_json(
            PATH_API_USERS_ME_TRACKED_BARS,
            serde_json::json!([{"id": 1, "name": "Kaldi", "location": "Laugavegur 20b"}]),
        );
        harness
            .transport
            .respond_json(PATH_API_USERS_ME_TRACKED_BEERS, serde_json::json!([]));

        // Act
        harness.handle_login();
        settle().await;

        // Assert
        let tracked = harness.tracked.current().resources;
        assert_eq!(tracked.bars.len(), 1);
        assert_eq!(tracked.bars[0].name, "Kaldi");
    }

    #[tokio::test]
    async fn unauthorized_response_signs_out() {
        // Arrange
        let harness = Harness::new();
        harness.session.start();
        harness
            .transport
            .respond(PATH_API_USERS_ME, StatusCode::UNAUTHORIZED, "");

        // Act
        harness.handle_login();
        settle().await;

        // Assert
        assert_eq!(harness.session.current().state, SessionState::SignedOut);
        assert!(harness.tokens.get().is_none());
        assert!(harness.navigator.routes().contains(&"/login".to_string()));
    }

    #[tokio::test]
    async fn every_transition_moves_generation() {
        // Arrange
        let harness = Harness::new();
        harness.session.start();
        let _gate = harness.transport.hold(PATH_API_USERS_ME);
        let start = harness.session.current().generation;

        // Act
        harness.handle_login();
        let signed_in = harness.session.current().generation;
        harness.session.logout();
        let signed_out = harness.session.current().generation;

        // Assert
        assert!(start < signed_in);
        assert!(signed_in < signed_out);
    }

    #[tokio::test]
    async fn stopped_store_ignores_events() {
        let harness = Harness::new();
        harness.session.start();
        harness.session.stop();

        harness.handle_login();

        assert_eq!(harness.session.current().state, SessionState::SignedOut);
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        // Arrange
        let harness = Harness::new();
        harness.session.start();
        let _gate = harness.transport.hold(PATH_API_USERS_ME);
        let mut rx = harness.session.subscribe();

        // Act
        harness.handle_login();

        // Assert
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().state.is_signed_in());
    }
}
