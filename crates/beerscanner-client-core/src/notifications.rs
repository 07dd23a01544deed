//! Unread notifications for the signed in user

use std::sync::Arc;

use beerscanner_shared::{id::DbId, model::Notification};
use tokio::sync::watch;
use tracing::warn;

use crate::{
    client::{await_response, no_ui_notify},
    Client,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnreadNotifications {
    /// Newest first
    pub notifications: Vec<Notification>,
    /// As reported by the server, may differ from the length of the list
    pub count: u64,
}

/// Cheap to clone, all clones share the same state
#[derive(Debug, Clone)]
pub struct NotificationStore {
    client: Client,
    state: Arc<watch::Sender<UnreadNotifications>>,
}

impl NotificationStore {
    pub fn new(client: Client) -> Self {
        let (state, _) = watch::channel(UnreadNotifications::default());
        Self {
            client,
            state: Arc::new(state),
        }
    }

    /// Loads the unread list then the count. Each is applied as soon as it
    /// arrives, a failure is logged and stops the load.
    #[tracing::instrument(skip(self))]
    pub async fn init(&self) {
        let notifications =
            match await_response(self.client.unread_notifications(no_ui_notify)).await {
                Ok(notifications) => notifications,
                Err(mishap) => {
                    warn!(?mishap, "failed to load unread notifications");
                    return;
                }
            };
        self.state
            .send_modify(|state| state.notifications = notifications);
        match await_response(self.client.count_unread_notifications(no_ui_notify)).await {
            Ok(unread) => self.state.send_modify(|state| state.count = unread.count),
            Err(mishap) => warn!(?mishap, "failed to load unread notification count"),
        }
    }

    /// For a notification that arrived after [`Self::init`]
    pub fn add(&self, notification: Notification) {
        self.state.send_modify(|state| {
            state.notifications.insert(0, notification);
            state.count += 1;
        });
    }

    /// Local only, see [`Self::mark_as_read_remote`] to tell the server
    pub fn mark_as_read(&self, notification_id: DbId) {
        self.state.send_modify(|state| {
            state
                .notifications
                .retain(|notification| notification.id != Some(notification_id));
            state.count = state.count.saturating_sub(1);
        });
    }

    #[tracing::instrument(skip(self))]
    pub async fn mark_as_read_remote(&self, notification_id: DbId) -> anyhow::Result<()> {
        await_response(
            self.client
                .mark_notification_as_read(notification_id, no_ui_notify),
        )
        .await?;
        self.mark_as_read(notification_id);
        Ok(())
    }

    pub fn clear(&self) {
        self.state
            .send_modify(|state| *state = UnreadNotifications::default());
    }

    pub fn subscribe(&self) -> watch::Receiver<UnreadNotifications> {
        self.state.subscribe()
    }

    pub fn current(&self) -> UnreadNotifications {
        self.state.borrow().clone()
    }
}
