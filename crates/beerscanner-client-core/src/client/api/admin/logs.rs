use beerscanner_shared::{
    const_config::path::{
        PATH_API_ADMIN_LOGS, PATH_API_ADMIN_LOGS_BY_DATE_RANGE, PATH_API_ADMIN_LOGS_BY_LEVEL,
        PATH_API_ADMIN_LOGS_CLEAR,
    },
    model::{LogEntry, Page, Pageable},
    req_args::api::v1::admin::{LogsByDateRangeReqArgs, LogsByLevelReqArgs},
};
use futures::channel::oneshot;

use crate::{
    client::{UiCallBack, NO_ARGUMENT},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn logs<F: UiCallBack>(
        &self,
        pageable: &Pageable,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<LogEntry>>> {
        self.send_request_expect_json(PATH_API_ADMIN_LOGS, pageable, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn logs_by_level<F: UiCallBack>(
        &self,
        args: &LogsByLevelReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<LogEntry>>> {
        self.send_request_expect_json(PATH_API_ADMIN_LOGS_BY_LEVEL, args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn logs_by_date_range<F: UiCallBack>(
        &self,
        args: &LogsByDateRangeReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<LogEntry>>> {
        self.send_request_expect_json(PATH_API_ADMIN_LOGS_BY_DATE_RANGE, args, ui_notify)
    }

    /// Deletes every stored log entry
    #[tracing::instrument(skip(ui_notify))]
    pub fn clear_logs<F: UiCallBack>(&self, ui_notify: F) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(PATH_API_ADMIN_LOGS_CLEAR, NO_ARGUMENT, ui_notify)
    }
}
