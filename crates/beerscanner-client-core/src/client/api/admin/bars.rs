use beerscanner_shared::{
    const_config::path::{
        PATH_API_ADMIN_BARS, PATH_API_ADMIN_BARS_APPROVE, PATH_API_ADMIN_BARS_BY_ID,
        PATH_API_ADMIN_BARS_CHECK, PATH_API_ADMIN_BARS_CHECKS, PATH_API_ADMIN_BARS_CHECKS_LATEST,
        PATH_API_ADMIN_BARS_CREATE, PATH_API_ADMIN_BARS_DELETE, PATH_API_ADMIN_BARS_UNAPPROVED,
        PATH_API_ADMIN_BARS_UPDATE,
    },
    id::DbId,
    model::{BarAdmin, BarCheck, Page, Pageable},
};
use futures::channel::oneshot;

use crate::{
    client::{UiCallBack, NO_ARGUMENT},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn admin_bars<F: UiCallBack>(
        &self,
        pageable: &Pageable,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<BarAdmin>>> {
        self.send_request_expect_json(PATH_API_ADMIN_BARS, pageable, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn admin_bar_by_id<F: UiCallBack>(
        &self,
        bar_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<BarAdmin>> {
        self.send_request_expect_json(
            PATH_API_ADMIN_BARS_BY_ID.with_id(bar_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }

    /// Created approved, unlike [`Client::request_bar`]
    #[tracing::instrument(skip(ui_notify))]
    pub fn create_bar<F: UiCallBack>(
        &self,
        bar: &BarAdmin,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<BarAdmin>> {
        self.send_request_expect_json(PATH_API_ADMIN_BARS_CREATE, bar, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_bar<F: UiCallBack>(
        &self,
        bar_id: DbId,
        bar: &BarAdmin,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<BarAdmin>> {
        self.send_request_expect_json(PATH_API_ADMIN_BARS_UPDATE.with_id(bar_id), bar, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_bar<F: UiCallBack>(
        &self,
        bar_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            PATH_API_ADMIN_BARS_DELETE.with_id(bar_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn unapproved_bars<F: UiCallBack>(
        &self,
        pageable: &Pageable,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<BarAdmin>>> {
        self.send_request_expect_json(PATH_API_ADMIN_BARS_UNAPPROVED, pageable, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn approve_bar<F: UiCallBack>(
        &self,
        bar_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<BarAdmin>> {
        self.send_request_expect_json(
            PATH_API_ADMIN_BARS_APPROVE.with_id(bar_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }

    /// Scrapes the menu now instead of waiting for the schedule
    #[tracing::instrument(skip(ui_notify))]
    pub fn check_bar<F: UiCallBack>(
        &self,
        bar_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<BarCheck>> {
        self.send_request_expect_json(
            PATH_API_ADMIN_BARS_CHECK.with_id(bar_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn bar_checks<F: UiCallBack>(
        &self,
        bar_id: DbId,
        pageable: &Pageable,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<BarCheck>>> {
        self.send_request_expect_json(
            PATH_API_ADMIN_BARS_CHECKS.with_id(bar_id),
            pageable,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn latest_bar_check<F: UiCallBack>(
        &self,
        bar_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<BarCheck>> {
        self.send_request_expect_json(
            PATH_API_ADMIN_BARS_CHECKS_LATEST.with_id(bar_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }
}

#[cfg(test)]
mod tests {
    use beerscanner_shared::{
        const_config::path::Endpoint, errors::ApiError, model::ProcessingStatus,
    };
    use reqwest::StatusCode;
    use rstest::rstest;

    use crate::{
        client::await_response,
        no_ui_notify,
        test_support::{claims_expiring_in, make_token, query_of, settle, sorted_query, Harness},
    };

    use super::*;

    #[tokio::test]
    async fn approve_returns_approved_bar() {
        // Arrange
        let harness = Harness::new();
        harness.transport.respond_json(
            PATH_API_ADMIN_BARS_APPROVE.with_id(2),
            serde_json::json!({
                "id": 2,
                "name": "Skúli",
                "location": "Fógetagarður",
                "approved": true
            }),
        );

        // Act
        let actual = await_response(harness.client.approve_bar(DbId::from(2), no_ui_notify))
            .await
            .unwrap();

        // Assert
        assert!(actual.approved);
        let sent = harness
            .transport
            .requests_to(&PATH_API_ADMIN_BARS_APPROVE.with_id(2));
        assert!(sent[0].body.is_none());
    }

    #[tokio::test]
    async fn create_sends_bar_as_body() {
        // Arrange
        let harness = Harness::new();
        harness.transport.respond_json(
            PATH_API_ADMIN_BARS_CREATE,
            serde_json::json!({
                "id": 8,
                "name": "Kaldi",
                "location": "Laugavegur 20b",
                "approved": true
            }),
        );
        let bar = BarAdmin::new(
            "Kaldi",
            "Laugavegur 20b",
            Some("https://kaldibar.is".to_string()),
        );

        // Act
        let actual = await_response(harness.client.create_bar(&bar, no_ui_notify))
            .await
            .unwrap();

        // Assert
        assert_eq!(actual.id, Some(DbId::from(8)));
        let sent = harness.transport.requests_to(&PATH_API_ADMIN_BARS_CREATE.into());
        let body = sent[0].body.as_ref().unwrap();
        assert_eq!(body["menuUrl"], "https://kaldibar.is");
        assert_eq!(body["approved"], true);
        assert!(sent[0].query.is_empty());
    }

    #[tokio::test]
    async fn latest_check_reports_failure() {
        // Arrange
        let harness = Harness::new();
        harness.transport.respond_json(
            PATH_API_ADMIN_BARS_CHECKS_LATEST.with_id(1),
            serde_json::json!({
                "id": 40,
                "processingStatus": "FAILED",
                "errorMessage": "menu page returned 503"
            }),
        );

        // Act
        let actual =
            await_response(harness.client.latest_bar_check(DbId::from(1), no_ui_notify))
                .await
                .unwrap();

        // Assert
        assert_eq!(actual.processing_status, ProcessingStatus::Failed);
        assert_eq!(actual.error_message.as_deref(), Some("menu page returned 503"));
    }

    #[tokio::test]
    async fn forbidden_keeps_session() {
        // Arrange
        let harness = Harness::new();
        harness.tokens.set(make_token(&claims_expiring_in(3600)));
        harness.transport.respond(
            PATH_API_ADMIN_BARS_DELETE.with_id(5),
            StatusCode::FORBIDDEN,
            r#"{"message": "Access denied"}"#,
        );

        // Act
        let actual = await_response(harness.client.delete_bar(DbId::from(5), no_ui_notify))
            .await
            .unwrap_err();

        // Assert
        let actual = actual.downcast::<ApiError>().unwrap();
        assert_eq!(actual, ApiError::new(StatusCode::FORBIDDEN, "Access denied"));
        assert!(harness.tokens.get().is_some());
        assert!(harness.navigator.routes().is_empty());
    }

    #[rstest]
    #[case::list(
        |client: &Client| { let _ = client.admin_bars(&Pageable::new(1, 50), no_ui_notify); },
        PATH_API_ADMIN_BARS.into(),
        &[("page", "1"), ("size", "50")]
    )]
    #[case::by_id(
        |client: &Client| { let _ = client.admin_bar_by_id(DbId::from(3), no_ui_notify); },
        PATH_API_ADMIN_BARS_BY_ID.with_id(3),
        &[]
    )]
    #[case::unapproved(
        |client: &Client| { let _ = client.unapproved_bars(&Pageable::first(), no_ui_notify); },
        PATH_API_ADMIN_BARS_UNAPPROVED.into(),
        &[("page", "0"), ("size", "20")]
    )]
    #[case::update(
        |client: &Client| {
            let bar = BarAdmin::new("Kaldi", "Laugavegur 20b", None);
            let _ = client.update_bar(DbId::from(2), &bar, no_ui_notify);
        },
        PATH_API_ADMIN_BARS_UPDATE.with_id(2),
        &[]
    )]
    #[case::delete(
        |client: &Client| { let _ = client.delete_bar(DbId::from(5), no_ui_notify); },
        PATH_API_ADMIN_BARS_DELETE.with_id(5),
        &[]
    )]
    #[case::check(
        |client: &Client| { let _ = client.check_bar(DbId::from(6), no_ui_notify); },
        PATH_API_ADMIN_BARS_CHECK.with_id(6),
        &[]
    )]
    #[case::checks(
        |client: &Client| {
            let pageable = Pageable::new(0, 10).sorted_by("createdAt,desc");
            let _ = client.bar_checks(DbId::from(6), &pageable, no_ui_notify);
        },
        PATH_API_ADMIN_BARS_CHECKS.with_id(6),
        &[("page", "0"), ("size", "10"), ("sort", "createdAt,desc")]
    )]
    #[tokio::test]
    async fn sends_expected_request(
        #[case] call: fn(&Client),
        #[case] expected: Endpoint,
        #[case] expected_query: &[(&str, &str)],
    ) {
        // Arrange
        let harness = Harness::new();

        // Act
        call(&harness.client);
        settle().await;

        // Assert
        let sent = harness.transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, expected.method);
        assert_eq!(sent[0].path, expected.path);
        assert_eq!(sorted_query(&sent[0]), query_of(expected_query));
    }
}
