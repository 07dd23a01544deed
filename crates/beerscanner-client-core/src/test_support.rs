//! Scripted stand-ins for the network and the host UI, for tests

use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex},
};

use anyhow::{anyhow, Context as _};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use beerscanner_shared::{const_config::path::Endpoint, token::AuthToken};
use beerscanner_time::Timestamp;
use futures::{channel::oneshot, future::BoxFuture, FutureExt as _};
use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::{
    ApiRequest, ApiResponse, Client, MemoryStorage, Navigator, SessionBroadcaster, SessionEvent,
    SessionStore, TokenStore, TrackedStore, Transport,
};

/// A reply that can be given more than once
#[derive(Debug, Clone)]
enum Reply {
    Respond(ApiResponse),
    Fail(String),
}

#[derive(Debug)]
enum Scripted {
    Reply(Reply),
    Held(oneshot::Receiver<ApiResponse>),
}

#[derive(Debug, Default)]
struct Route {
    queue: VecDeque<Scripted>,
    /// Given again once the queue runs out
    last: Option<Reply>,
}

/// Answers requests from a script instead of the network.
///
/// Replies for a route are given in the order they were scripted, after that
/// the last reply keeps being repeated. Unscripted routes get a `404`.
#[derive(Debug, Default)]
pub struct FakeTransport {
    inner: Mutex<FakeTransportInner>,
}

#[derive(Debug, Default)]
struct FakeTransportInner {
    routes: HashMap<(Method, String), Route>,
    requests: Vec<ApiRequest>,
}

/// Releases a held response, see [`FakeTransport::hold`]
#[derive(Debug)]
pub struct ResponseGate {
    tx: oneshot::Sender<ApiResponse>,
}

impl ResponseGate {
    pub fn release<S: Into<String>>(self, status: StatusCode, body: S) {
        // The request may never have been made, nothing to do then
        let _ = self.tx.send(ApiResponse::new(status, body));
    }
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond<S: Into<String>>(
        &self,
        endpoint: impl Into<Endpoint>,
        status: StatusCode,
        body: S,
    ) {
        let reply = Reply::Respond(ApiResponse::new(status, body));
        self.push(endpoint.into(), Scripted::Reply(reply));
    }

    pub fn respond_json(&self, endpoint: impl Into<Endpoint>, body: Value) {
        self.respond(endpoint, StatusCode::OK, body.to_string());
    }

    /// No response at all, as when the server cannot be reached
    pub fn fail(&self, endpoint: impl Into<Endpoint>, message: &str) {
        self.push(
            endpoint.into(),
            Scripted::Reply(Reply::Fail(message.to_string())),
        );
    }

    /// The next request to `endpoint` waits until the returned gate is released
    pub fn hold(&self, endpoint: impl Into<Endpoint>) -> ResponseGate {
        let (tx, rx) = oneshot::channel();
        self.push(endpoint.into(), Scripted::Held(rx));
        ResponseGate { tx }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.lock().expect("mutex poisoned").requests.clone()
    }

    pub fn requests_to(&self, endpoint: &Endpoint) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.method == endpoint.method && request.path == endpoint.path)
            .collect()
    }

    fn push(&self, endpoint: Endpoint, scripted: Scripted) {
        self.inner
            .lock()
            .expect("mutex poisoned")
            .routes
            .entry((endpoint.method, endpoint.path))
            .or_default()
            .queue
            .push_back(scripted);
    }
}

impl Transport for FakeTransport {
    fn execute(&self, request: ApiRequest) -> BoxFuture<'static, anyhow::Result<ApiResponse>> {
        let mut guard = self.inner.lock().expect("mutex poisoned");
        let key = (request.method.clone(), request.path.clone());
        guard.requests.push(request);
        let route = guard.routes.entry(key).or_default();
        let scripted = match route.queue.pop_front() {
            Some(Scripted::Reply(reply)) => {
                route.last = Some(reply.clone());
                Scripted::Reply(reply)
            }
            Some(held @ Scripted::Held(_)) => held,
            None => Scripted::Reply(
                route
                    .last
                    .clone()
                    .unwrap_or(Reply::Respond(ApiResponse::new(StatusCode::NOT_FOUND, ""))),
            ),
        };
        drop(guard);
        async move {
            match scripted {
                Scripted::Reply(Reply::Respond(response)) => Ok(response),
                Scripted::Reply(Reply::Fail(message)) => Err(anyhow!(message)),
                Scripted::Held(rx) => rx.await.context("held response was never released"),
            }
        }
        .boxed()
    }
}

/// Remembers every route it was asked to go to
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().expect("mutex poisoned").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes
            .lock()
            .expect("mutex poisoned")
            .push(route.to_string());
    }
}

/// Everything wired together the same way a host application would, with
/// in-memory storage. The session is NOT started.
#[derive(Debug)]
pub struct Harness {
    pub transport: Arc<FakeTransport>,
    pub navigator: Arc<RecordingNavigator>,
    pub tokens: TokenStore,
    pub client: Client,
    pub tracked: TrackedStore,
    pub session: SessionStore,
}

impl Harness {
    pub fn new() -> Self {
        let transport = FakeTransport::new();
        let navigator = Arc::new(RecordingNavigator::default());
        let tokens = TokenStore::new(Arc::new(MemoryStorage::default()), SessionBroadcaster::new());
        let client = Client::new(transport.clone(), tokens.clone(), navigator.clone());
        let tracked = TrackedStore::new(client.clone());
        let session = SessionStore::new(client.clone(), tracked.clone());
        Self {
            transport,
            navigator,
            tokens,
            client,
            tracked,
            session,
        }
    }

    /// Completes a login with a token that is valid for an hour
    pub fn handle_login(&self) {
        self.session
            .handle_oauth_callback(make_token(&claims_expiring_in(3600)));
    }

    pub fn record_events(&self) -> Arc<Mutex<Vec<SessionEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        self.tokens.broadcaster().subscribe(move |event| {
            sink.lock().expect("mutex poisoned").push(event);
        });
        events
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

/// An unsigned JWT carrying `claims`
pub fn make_token(claims: &Value) -> AuthToken {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    AuthToken::new(format!("{header}.{payload}.c2lnbmF0dXJl"))
}

/// Claims for `a@b.com` ("A", subject `u1`) expiring `secs` from now
pub fn claims_expiring_in(secs: i64) -> Value {
    let now = u64::from(Timestamp::now());
    let exp = now.saturating_add_signed(secs);
    serde_json::json!({
        "sub": "u1",
        "email": "a@b.com",
        "name": "A",
        "iat": now,
        "exp": exp,
    })
}

/// The profile the server returns for the user in [`claims_expiring_in`]
pub fn user_json(id: u64) -> Value {
    serde_json::json!({
        "id": id,
        "email": "a@b.com",
        "name": "A",
        "googleId": "u1",
        "notificationEnabled": true,
        "isAdmin": false,
        "permissions": []
    })
}

pub fn notification_json(id: u64) -> Value {
    serde_json::json!({
        "id": id,
        "title": "Tropical Stout is on tap",
        "message": "Tropical Stout is now available at Kaldi",
        "type": "BEER_AVAILABLE",
        "read": false
    })
}

/// Lets spawned tasks run until they are all waiting on something
pub async fn settle() {
    for _ in 0..50 {
        tokio::task::yield_now().await;
    }
}

/// The query of `request` in a stable order, for comparing with [`query_of`]
pub fn sorted_query(request: &ApiRequest) -> Vec<(String, String)> {
    let mut query = request.query.clone();
    query.sort();
    query
}

pub fn query_of(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = expected
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    pairs.sort();
    pairs
}
