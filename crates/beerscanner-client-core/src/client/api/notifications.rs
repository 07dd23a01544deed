use beerscanner_shared::{
    const_config::path::{
        PATH_API_NOTIFICATIONS, PATH_API_NOTIFICATIONS_MARK_READ, PATH_API_NOTIFICATIONS_UNREAD,
        PATH_API_NOTIFICATIONS_UNREAD_COUNT,
    },
    id::DbId,
    model::{Notification, Page, Pageable, UnreadCount},
};
use futures::channel::oneshot;

use crate::{
    client::{UiCallBack, NO_ARGUMENT},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn notifications<F: UiCallBack>(
        &self,
        pageable: &Pageable,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<Notification>>> {
        self.send_request_expect_json(PATH_API_NOTIFICATIONS, pageable, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn unread_notifications<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<Notification>>> {
        self.send_request_expect_json(PATH_API_NOTIFICATIONS_UNREAD, NO_ARGUMENT, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn count_unread_notifications<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<UnreadCount>> {
        self.send_request_expect_json(PATH_API_NOTIFICATIONS_UNREAD_COUNT, NO_ARGUMENT, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn mark_notification_as_read<F: UiCallBack>(
        &self,
        notification_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Notification>> {
        self.send_request_expect_json(
            PATH_API_NOTIFICATIONS_MARK_READ.with_id(notification_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        client::await_response,
        no_ui_notify,
        test_support::{notification_json, Harness},
    };

    use super::*;

    #[tokio::test]
    async fn mark_as_read_targets_the_notification() {
        // Arrange
        let harness = Harness::new();
        harness.handle_login();
        let endpoint = PATH_API_NOTIFICATIONS_MARK_READ.with_id(12);
        harness
            .transport
            .respond_json(endpoint.clone(), notification_json(12));

        // Act
        let actual = await_response(
            harness
                .client
                .mark_notification_as_read(DbId::from(12), no_ui_notify),
        )
        .await
        .unwrap();

        // Assert
        assert_eq!(actual.id, Some(DbId::from(12)));
        let sent = harness.transport.requests_to(&endpoint);
        assert_eq!(sent.len(), 1);
        assert!(sent[0].body.is_none());
        assert!(sent[0].bearer.is_some());
    }

    #[tokio::test]
    async fn history_is_paged() {
        // Arrange
        let harness = Harness::new();
        harness.transport.respond_json(
            PATH_API_NOTIFICATIONS,
            serde_json::json!({"content": [notification_json(1)], "totalPages": 3, "number": 1}),
        );

        // Act
        let actual = await_response(
            harness
                .client
                .notifications(&Pageable::new(1, 5), no_ui_notify),
        )
        .await
        .unwrap();

        // Assert
        assert!(actual.has_next());
        let sent = harness.transport.requests_to(&PATH_API_NOTIFICATIONS.into());
        assert!(sent[0].query.contains(&("page".to_string(), "1".to_string())));
        assert!(sent[0].query.contains(&("size".to_string(), "5".to_string())));
    }
}
