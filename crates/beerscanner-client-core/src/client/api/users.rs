use beerscanner_shared::{
    const_config::path::{
        PATH_API_USERS_ME, PATH_API_USERS_ME_NOTIFICATION_SETTINGS,
        PATH_API_USERS_ME_TRACKED_BARS, PATH_API_USERS_ME_TRACKED_BEERS,
        PATH_API_USERS_ME_TRACK_BAR, PATH_API_USERS_ME_TRACK_BEER, PATH_API_USERS_ME_UNTRACK_BAR,
        PATH_API_USERS_ME_UNTRACK_BEER,
    },
    id::DbId,
    model::{Bar, Beer, User},
    req_args::api::v1::{NotificationSettingsReqArgs, TrackBeerReqArgs},
};
use futures::channel::oneshot;

use crate::{
    client::{UiCallBack, NO_ARGUMENT},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn current_user<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<User>> {
        self.send_request_expect_json(PATH_API_USERS_ME, NO_ARGUMENT, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn tracked_bars<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<Bar>>> {
        self.send_request_expect_json(PATH_API_USERS_ME_TRACKED_BARS, NO_ARGUMENT, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn tracked_beers<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<Beer>>> {
        self.send_request_expect_json(PATH_API_USERS_ME_TRACKED_BEERS, NO_ARGUMENT, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn track_bar<F: UiCallBack>(
        &self,
        bar_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<User>> {
        self.send_request_expect_json(
            PATH_API_USERS_ME_TRACK_BAR.with_id(bar_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn untrack_bar<F: UiCallBack>(
        &self,
        bar_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<User>> {
        self.send_request_expect_json(
            PATH_API_USERS_ME_UNTRACK_BAR.with_id(bar_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }

    /// The bar is sent as a query parameter even though this is a `POST`
    #[tracing::instrument(skip(ui_notify))]
    pub fn track_beer<F: UiCallBack>(
        &self,
        beer_id: DbId,
        args: &TrackBeerReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<User>> {
        self.send_request_with_query_expect_json(
            PATH_API_USERS_ME_TRACK_BEER.with_id(beer_id),
            args,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn untrack_beer<F: UiCallBack>(
        &self,
        beer_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<User>> {
        self.send_request_expect_json(
            PATH_API_USERS_ME_UNTRACK_BEER.with_id(beer_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_notification_settings<F: UiCallBack>(
        &self,
        args: &NotificationSettingsReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<User>> {
        self.send_request_expect_json(PATH_API_USERS_ME_NOTIFICATION_SETTINGS, args, ui_notify)
    }
}

#[cfg(test)]
mod tests {
    use beerscanner_shared::const_config::path::Endpoint;
    use reqwest::Method;

    use crate::{
        client::await_response,
        no_ui_notify,
        test_support::{user_json, Harness},
    };

    use super::*;

    #[tokio::test]
    async fn untrack_bar_uses_delete_with_id() {
        // Arrange
        let harness = Harness::new();
        let endpoint = PATH_API_USERS_ME_UNTRACK_BAR.with_id(5);
        harness.transport.respond_json(endpoint.clone(), user_json(1));

        // Act
        await_response(harness.client.untrack_bar(DbId::from(5), no_ui_notify))
            .await
            .unwrap();

        // Assert
        let sent = harness.transport.requests_to(&endpoint);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::DELETE);
        assert!(sent[0].query.is_empty());
        assert!(sent[0].body.is_none());
    }

    #[tokio::test]
    async fn notification_settings_sent_as_body() {
        // Arrange
        let harness = Harness::new();
        let endpoint: Endpoint = PATH_API_USERS_ME_NOTIFICATION_SETTINGS.into();
        harness.transport.respond_json(endpoint.clone(), user_json(1));
        let args = NotificationSettingsReqArgs {
            notification_enabled: false,
        };

        // Act
        await_response(
            harness
                .client
                .update_notification_settings(&args, no_ui_notify),
        )
        .await
        .unwrap();

        // Assert
        let sent = harness.transport.requests_to(&endpoint);
        assert_eq!(sent[0].method, Method::PUT);
        assert_eq!(
            sent[0].body,
            Some(serde_json::json!({"notificationEnabled": false}))
        );
    }

    #[tokio::test]
    async fn track_beer_without_bar_has_no_query() {
        let harness = Harness::new();
        let endpoint = PATH_API_USERS_ME_TRACK_BEER.with_id(9);
        harness.transport.respond_json(endpoint.clone(), user_json(1));

        await_response(harness.client.track_beer(
            DbId::from(9),
            &TrackBeerReqArgs::default(),
            no_ui_notify,
        ))
        .await
        .unwrap();

        let sent = harness.transport.requests_to(&endpoint);
        assert!(sent[0].query.is_empty());
        assert!(sent[0].body.is_none());
    }
}
