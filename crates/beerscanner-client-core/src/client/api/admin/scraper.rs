use beerscanner_shared::{
    const_config::path::{
        PATH_API_ADMIN_SCRAPER_DISABLE, PATH_API_ADMIN_SCRAPER_ENABLE,
        PATH_API_ADMIN_SCRAPER_SETTINGS, PATH_API_ADMIN_SCRAPER_SETTINGS_UPDATE,
        PATH_API_ADMIN_SCRAPER_STATS, PATH_API_ADMIN_SCRAPER_STATS_BY_BAR,
        PATH_API_ADMIN_SCRAPER_STATS_RESET,
    },
    id::DbId,
    model::{ScraperSettings, ScraperStats},
};
use futures::channel::oneshot;

use crate::{
    client::{UiCallBack, NO_ARGUMENT},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn scraper_settings<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<ScraperSettings>> {
        self.send_request_expect_json(PATH_API_ADMIN_SCRAPER_SETTINGS, NO_ARGUMENT, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_scraper_settings<F: UiCallBack>(
        &self,
        settings: &ScraperSettings,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<ScraperSettings>> {
        self.send_request_expect_json(PATH_API_ADMIN_SCRAPER_SETTINGS_UPDATE, settings, ui_notify)
    }

    /// Returns the settings as they are after the change
    #[tracing::instrument(skip(ui_notify))]
    pub fn enable_scraper<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<ScraperSettings>> {
        self.send_request_expect_json(PATH_API_ADMIN_SCRAPER_ENABLE, NO_ARGUMENT, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn disable_scraper<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<ScraperSettings>> {
        self.send_request_expect_json(PATH_API_ADMIN_SCRAPER_DISABLE, NO_ARGUMENT, ui_notify)
    }

    /// Totals across every bar
    #[tracing::instrument(skip(ui_notify))]
    pub fn scraper_stats<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<ScraperStats>> {
        self.send_request_expect_json(PATH_API_ADMIN_SCRAPER_STATS, NO_ARGUMENT, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn scraper_stats_for_bar<F: UiCallBack>(
        &self,
        bar_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<ScraperStats>> {
        self.send_request_expect_json(
            PATH_API_ADMIN_SCRAPER_STATS_BY_BAR.with_id(bar_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn reset_scraper_stats<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(PATH_API_ADMIN_SCRAPER_STATS_RESET, NO_ARGUMENT, ui_notify)
    }
}
