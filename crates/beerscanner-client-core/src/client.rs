use anyhow::Context as _;
use beerscanner_shared::{const_config::path::Endpoint, errors::ApiError, token::AuthToken};
use futures::{channel::oneshot, Future};
use reqwest::Method;
use std::{fmt::Debug, sync::Arc};
use tracing::{debug, info};

use crate::{navigation::Navigator, session::TokenStore};

use self::{
    middleware::UnauthorizedHook,
    transport::{query_pairs, ApiRequest, ApiResponse, Transport},
};

pub mod api;
mod middleware;
pub mod transport;

/// Use for endpoints that take no arguments
pub const NO_ARGUMENT: &() = &();

/// Makes the calls to the API on behalf of the signed in user (if any).
///
/// Cheap to clone, all clones share the same transport and token store.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    tokens: TokenStore,
    navigator: Arc<dyn Navigator>,
    unauthorized_hook: UnauthorizedHook,
}

/// Where the arguments of a request are sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgsPlacement {
    Query,
    Body,
}

impl ArgsPlacement {
    fn for_method(method: &Method) -> Self {
        if *method == Method::GET || *method == Method::DELETE {
            Self::Query
        } else {
            Self::Body
        }
    }
}

impl Client {
    #[tracing::instrument(name = "NEW CLIENT-CORE", skip_all)]
    pub fn new(
        transport: Arc<dyn Transport>,
        tokens: TokenStore,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let unauthorized_hook = UnauthorizedHook::new(tokens.clone(), Arc::clone(&navigator));
        Self {
            transport,
            tokens,
            navigator,
            unauthorized_hook,
        }
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    #[tracing::instrument(skip(args, on_done))]
    // WARNING: Must skip args as it my contain sensitive info and "safe" versions
    // would usually already be logged by the caller
    fn initiate_request<T, F, O>(
        &self,
        endpoint: Endpoint,
        args: &T,
        placement: ArgsPlacement,
        on_done: F,
    ) where
        T: serde::Serialize + Debug + ?Sized,
        F: 'static + Send + FnOnce(anyhow::Result<ApiResponse>) -> O,
        O: Future<Output = ()> + Send + 'static,
    {
        let request = self.build_request(endpoint, args, placement);
        let transport = Arc::clone(&self.transport);
        let unauthorized_hook = self.unauthorized_hook.clone();
        tokio::spawn(async move {
            let response = match request {
                Ok(request) => transport.execute(request).await,
                Err(e) => Err(e),
            };
            if let Ok(response) = &response {
                unauthorized_hook.inspect(response);
            }
            on_done(response).await;
        });
    }

    fn build_request<T>(
        &self,
        endpoint: Endpoint,
        args: &T,
        placement: ArgsPlacement,
    ) -> anyhow::Result<ApiRequest>
    where
        T: serde::Serialize + ?Sized,
    {
        let (query, body) = match placement {
            ArgsPlacement::Query => (query_pairs(args)?, None),
            ArgsPlacement::Body => {
                let body = serde_json::to_value(args).context("failed to serialize body")?;
                (Vec::new(), (!body.is_null()).then_some(body))
            }
        };
        Ok(ApiRequest {
            method: endpoint.method,
            path: endpoint.path,
            query,
            body,
            bearer: self.bearer_token(),
        })
    }

    fn bearer_token(&self) -> Option<AuthToken> {
        self.tokens.get()
    }

    fn send_request_expect_json<F, T, U>(
        &self,
        endpoint: impl Into<Endpoint>,
        args: &T,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<U>>
    where
        T: serde::Serialize + Debug + ?Sized,
        F: UiCallBack,
        U: Send + Debug + serde::de::DeserializeOwned + 'static,
    {
        let endpoint = endpoint.into();
        let placement = ArgsPlacement::for_method(&endpoint.method);
        self.send_request_expect_json_placed(endpoint, args, placement, ui_notify)
    }

    /// For the few endpoints that take query parameters on a `POST`
    fn send_request_with_query_expect_json<F, T, U>(
        &self,
        endpoint: impl Into<Endpoint>,
        args: &T,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<U>>
    where
        T: serde::Serialize + Debug + ?Sized,
        F: UiCallBack,
        U: Send + Debug + serde::de::DeserializeOwned + 'static,
    {
        self.send_request_expect_json_placed(endpoint.into(), args, ArgsPlacement::Query, ui_notify)
    }

    fn send_request_expect_json_placed<F, T, U>(
        &self,
        endpoint: Endpoint,
        args: &T,
        placement: ArgsPlacement,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<U>>
    where
        T: serde::Serialize + Debug + ?Sized,
        F: UiCallBack,
        U: Send + Debug + serde::de::DeserializeOwned + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let on_done = move |resp: anyhow::Result<ApiResponse>| async {
            let msg = process_json_body(resp);
            if tx.send(msg).is_err() {
                debug!("receiver dropped before the response arrived");
            }
            ui_notify();
        };
        self.initiate_request(endpoint, args, placement, on_done);
        rx
    }

    fn send_request_expect_empty<F, T>(
        &self,
        endpoint: impl Into<Endpoint>,
        args: &T,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        T: serde::Serialize + Debug + ?Sized,
        F: UiCallBack,
    {
        let endpoint = endpoint.into();
        let placement = ArgsPlacement::for_method(&endpoint.method);
        let (tx, rx) = oneshot::channel();
        let on_done = move |resp: anyhow::Result<ApiResponse>| async {
            let msg = process_empty(resp);
            if tx.send(msg).is_err() {
                debug!("receiver dropped before the response arrived");
            }
            ui_notify();
        };
        self.initiate_request(endpoint, args, placement, on_done);
        rx
    }
}

/// Waits for the outcome of a request started by one of the [`Client`] methods
pub async fn await_response<T>(rx: oneshot::Receiver<anyhow::Result<T>>) -> anyhow::Result<T> {
    rx.await.context("request was dropped before it completed")?
}

/// For callers that wait on the receiver instead of being woken up
pub fn no_ui_notify() {}

#[tracing::instrument(ret, err(Debug))]
fn process_empty(response: anyhow::Result<ApiResponse>) -> anyhow::Result<()> {
    let response = response?;
    if response.status.is_success() {
        Ok(())
    } else {
        Err(handle_error(response))
    }
}

#[tracing::instrument(ret, err(Debug))]
fn process_json_body<T>(response: anyhow::Result<ApiResponse>) -> anyhow::Result<T>
where
    T: Debug + serde::de::DeserializeOwned,
{
    let response = response?;
    if response.status.is_success() {
        Ok(serde_json::from_str(&response.body).context("failed to parse result as json")?)
    } else {
        Err(handle_error(response))
    }
}

/// The server sends either a JSON object with a `message` or plain text
#[tracing::instrument(ret)]
fn handle_error(response: ApiResponse) -> anyhow::Error {
    let ApiResponse { status, body } = response;
    debug_assert!(
        !status.is_success(),
        "this is supposed to be an error, right? Status code is: {status}"
    );
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(str::to_string))
        .unwrap_or(body);
    if message.is_empty() {
        info!(%status, "request failed with no body");
    }
    ApiError::new(status, message).into()
}

pub trait UiCallBack: 'static + Send + FnOnce() {}
impl<T> UiCallBack for T where T: 'static + Send + FnOnce() {}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    };

    use beerscanner_shared::{
        const_config::path::{PATH_API_USERS_ME, PATH_API_USERS_ME_TRACK_BEER},
        errors::ApiError,
        id::DbId,
        model::User,
        req_args::api::v1::TrackBeerReqArgs,
    };
    use reqwest::StatusCode;
    use rstest::rstest;
    use secrecy::ExposeSecret as _;

    use crate::test_support::{claims_expiring_in, make_token, settle, Harness};

    use super::*;

    #[tokio::test]
    async fn bearer_attached_when_token_present() {
        // Arrange
        let harness = Harness::new();
        let token = make_token(&claims_expiring_in(3600));
        harness.tokens.set(token.clone());
        harness.transport.respond_json(
            PATH_API_USERS_ME,
            serde_json::json!({"id": 42, "email": "a@b.com", "name": "A"}),
        );

        // Act
        let actual: User = await_response(harness.client.current_user(no_ui_notify))
            .await
            .unwrap();

        // Assert
        assert_eq!(actual.id, DbId::from(42));
        let sent = harness.transport.requests_to(&PATH_API_USERS_ME.into());
        let bearer = sent.last().unwrap().bearer.as_ref().unwrap();
        assert_eq!(bearer.expose_secret(), token.expose_secret());
    }

    #[tokio::test]
    async fn no_bearer_without_token() {
        let harness = Harness::new();
        harness
            .transport
            .respond_json(PATH_API_USERS_ME, serde_json::json!({"id": 1, "email": "", "name": ""}));

        let _ = await_response(harness.client.current_user(no_ui_notify)).await;

        let sent = harness.transport.requests_to(&PATH_API_USERS_ME.into());
        assert!(sent[0].bearer.is_none());
    }

    #[rstest]
    #[case::json_message(r#"{"status":404,"message":"Bar not found"}"#, "Bar not found")]
    #[case::plain_text("Bar not found", "Bar not found")]
    #[case::empty("", "")]
    #[tokio::test]
    async fn non_success_becomes_api_error(#[case] body: &str, #[case] expected: &str) {
        // Arrange
        let harness = Harness::new();
        harness
            .transport
            .respond(PATH_API_USERS_ME, StatusCode::NOT_FOUND, body);

        // Act
        let actual = await_response(harness.client.current_user(no_ui_notify))
            .await
            .unwrap_err();

        // Assert
        let actual = actual.downcast::<ApiError>().unwrap();
        assert_eq!(actual, ApiError::new(StatusCode::NOT_FOUND, expected));
    }

    #[tokio::test]
    async fn unauthorized_clears_session_and_goes_to_login() {
        // Arrange
        let harness = Harness::new();
        harness.tokens.set(make_token(&claims_expiring_in(3600)));
        let events = harness.record_events();
        harness
            .transport
            .respond(PATH_API_USERS_ME, StatusCode::UNAUTHORIZED, "");

        // Act
        let actual = await_response(harness.client.current_user(no_ui_notify)).await;

        // Assert
        assert!(actual
            .unwrap_err()
            .downcast::<ApiError>()
            .unwrap()
            .is_unauthorized());
        assert!(harness.tokens.get().is_none());
        assert_eq!(
            events.lock().unwrap().as_slice(),
            &[crate::SessionEvent::Unauthorized]
        );
        assert_eq!(harness.navigator.routes(), vec!["/login".to_string()]);
    }

    #[tokio::test]
    async fn transport_failure_is_not_unauthorized() {
        let harness = Harness::new();
        harness.tokens.set(make_token(&claims_expiring_in(3600)));
        harness.transport.fail(PATH_API_USERS_ME, "connection refused");

        let actual = await_response(harness.client.current_user(no_ui_notify)).await;

        assert!(actual.is_err());
        assert!(harness.tokens.get().is_some());
        assert!(harness.navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn post_with_query_arguments() {
        // Arrange
        let harness = Harness::new();
        let endpoint = PATH_API_USERS_ME_TRACK_BEER.with_id(7);
        harness.transport.respond_json(
            endpoint.clone(),
            serde_json::json!({"id": 1, "email": "a@b.com", "name": "A"}),
        );
        let args = TrackBeerReqArgs {
            bar_id: Some(DbId::from(3)),
        };

        // Act
        let _: User = await_response(harness.client.send_request_with_query_expect_json(
            endpoint.clone(),
            &args,
            no_ui_notify,
        ))
        .await
        .unwrap();

        // Assert
        let sent = harness.transport.requests_to(&endpoint);
        assert_eq!(sent[0].method, Method::POST);
        assert_eq!(sent[0].path, "/api/v1/users/me/tracked-beers/7");
        assert_eq!(sent[0].query, vec![("barId".to_string(), "3".to_string())]);
        assert!(sent[0].body.is_none());
    }

    #[tokio::test]
    async fn ui_notified_after_response() {
        // Arrange
        let harness = Harness::new();
        harness
            .transport
            .respond(PATH_API_USERS_ME, StatusCode::NOT_FOUND, "");
        let notified = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&notified);

        // Act
        let rx = harness
            .client
            .current_user(move || flag.store(true, Ordering::SeqCst));
        settle().await;

        // Assert
        assert!(notified.load(Ordering::SeqCst));
        assert!(await_response(rx).await.is_err());
    }
}
