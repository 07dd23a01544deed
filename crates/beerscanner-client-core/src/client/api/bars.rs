use beerscanner_shared::{
    const_config::path::{
        PATH_API_BARS_MY_REQUESTS, PATH_API_BARS_PUBLIC, PATH_API_BARS_PUBLIC_BY_ID,
        PATH_API_BARS_PUBLIC_CURRENT_BEERS, PATH_API_BARS_PUBLIC_PAST_BEERS,
        PATH_API_BARS_PUBLIC_SEARCH, PATH_API_BARS_REQUEST,
    },
    id::DbId,
    model::{Bar, BeerAvailability, Page, Pageable},
    req_args::api::v1::SearchReqArgs,
};
use futures::channel::oneshot;

use crate::{
    client::{UiCallBack, NO_ARGUMENT},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn all_bars<F: UiCallBack>(
        &self,
        pageable: &Pageable,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<Bar>>> {
        self.send_request_expect_json(PATH_API_BARS_PUBLIC, pageable, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn bar_by_id<F: UiCallBack>(
        &self,
        bar_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Bar>> {
        self.send_request_expect_json(
            PATH_API_BARS_PUBLIC_BY_ID.with_id(bar_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn search_bars<F: UiCallBack>(
        &self,
        args: &SearchReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<Bar>>> {
        self.send_request_expect_json(PATH_API_BARS_PUBLIC_SEARCH, args, ui_notify)
    }

    /// Beers on offer at the bar right now
    #[tracing::instrument(skip(ui_notify))]
    pub fn current_beers<F: UiCallBack>(
        &self,
        bar_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<BeerAvailability>>> {
        self.send_request_expect_json(
            PATH_API_BARS_PUBLIC_CURRENT_BEERS.with_id(bar_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn past_beers<F: UiCallBack>(
        &self,
        bar_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<BeerAvailability>>> {
        self.send_request_expect_json(
            PATH_API_BARS_PUBLIC_PAST_BEERS.with_id(bar_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }

    /// Bars the signed in user has asked to be added
    #[tracing::instrument(skip(ui_notify))]
    pub fn my_requested_bars<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<Bar>>> {
        self.send_request_expect_json(PATH_API_BARS_MY_REQUESTS, NO_ARGUMENT, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn request_bar<F: UiCallBack>(
        &self,
        bar: &Bar,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Bar>> {
        self.send_request_expect_json(PATH_API_BARS_REQUEST, bar, ui_notify)
    }
}
