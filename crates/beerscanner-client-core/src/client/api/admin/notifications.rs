use beerscanner_shared::{
    const_config::path::{
        PATH_API_NOTIFICATIONS_ADMIN_PROCESS_UNSENT, PATH_API_NOTIFICATIONS_ADMIN_SYSTEM,
    },
    model::ServerMessage,
    req_args::api::v1::admin::SystemNotificationReqArgs,
};
use futures::channel::oneshot;

use crate::{
    client::{UiCallBack, NO_ARGUMENT},
    Client,
};

impl Client {
    /// Sends the notification to every user
    #[tracing::instrument(skip(ui_notify))]
    pub fn send_system_notification<F: UiCallBack>(
        &self,
        args: &SystemNotificationReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<ServerMessage>> {
        self.send_request_expect_json(PATH_API_NOTIFICATIONS_ADMIN_SYSTEM, args, ui_notify)
    }

    /// Retries delivery of notifications the server has not managed to send
    #[tracing::instrument(skip(ui_notify))]
    pub fn process_unsent_notifications<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<ServerMessage>> {
        self.send_request_expect_json(
            PATH_API_NOTIFICATIONS_ADMIN_PROCESS_UNSENT,
            NO_ARGUMENT,
            ui_notify,
        )
    }
}
