use beerscanner_shared::{
    const_config::path::{
        PATH_API_ADMIN_BEERS_ALIASES, PATH_API_ADMIN_BEERS_ALIASES_ADD,
        PATH_API_ADMIN_BEERS_ALIASES_DELETE, PATH_API_ADMIN_BEERS_APPROVE,
        PATH_API_ADMIN_BEERS_CREATE, PATH_API_ADMIN_BEERS_DELETE,
        PATH_API_ADMIN_BEERS_FIND_OR_CREATE, PATH_API_ADMIN_BEERS_UNAPPROVE,
        PATH_API_ADMIN_BEERS_UNAPPROVED, PATH_API_ADMIN_BEERS_UPDATE,
    },
    id::DbId,
    model::{Beer, BeerAlias, BeerRequest, Page, Pageable},
    req_args::api::v1::admin::{BeerAliasReqArgs, FindOrCreateBeerReqArgs},
};
use futures::channel::oneshot;

use crate::{
    client::{UiCallBack, NO_ARGUMENT},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn create_beer<F: UiCallBack>(
        &self,
        beer: &Beer,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Beer>> {
        self.send_request_expect_json(PATH_API_ADMIN_BEERS_CREATE, beer, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_beer<F: UiCallBack>(
        &self,
        beer_id: DbId,
        beer: &Beer,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Beer>> {
        self.send_request_expect_json(PATH_API_ADMIN_BEERS_UPDATE.with_id(beer_id), beer, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_beer<F: UiCallBack>(
        &self,
        beer_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            PATH_API_ADMIN_BEERS_DELETE.with_id(beer_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }

    /// Beer requests from all users that are still waiting for approval
    #[tracing::instrument(skip(ui_notify))]
    pub fn requested_beers<F: UiCallBack>(
        &self,
        pageable: &Pageable,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<BeerRequest>>> {
        self.send_request_expect_json(PATH_API_ADMIN_BEERS_UNAPPROVED, pageable, ui_notify)
    }

    /// Takes the id of the request, returns the beer it became
    #[tracing::instrument(skip(ui_notify))]
    pub fn approve_beer_request<F: UiCallBack>(
        &self,
        request_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Beer>> {
        self.send_request_expect_json(
            PATH_API_ADMIN_BEERS_APPROVE.with_id(request_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn unapprove_beer_request<F: UiCallBack>(
        &self,
        request_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Beer>> {
        self.send_request_expect_json(
            PATH_API_ADMIN_BEERS_UNAPPROVE.with_id(request_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }

    /// The arguments go in the query string even though this is a `POST`
    #[tracing::instrument(skip(ui_notify))]
    pub fn find_or_create_beer<F: UiCallBack>(
        &self,
        args: &FindOrCreateBeerReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Beer>> {
        self.send_request_with_query_expect_json(
            PATH_API_ADMIN_BEERS_FIND_OR_CREATE,
            args,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn beer_aliases<F: UiCallBack>(
        &self,
        beer_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<BeerAlias>>> {
        self.send_request_expect_json(
            PATH_API_ADMIN_BEERS_ALIASES.with_id(beer_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn add_beer_alias<F: UiCallBack>(
        &self,
        beer_id: DbId,
        args: &BeerAliasReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<BeerAlias>> {
        self.send_request_expect_json(
            PATH_API_ADMIN_BEERS_ALIASES_ADD.with_id(beer_id),
            args,
            ui_notify,
        )
    }

    /// Aliases are addressed by their own id, not the beer's
    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_beer_alias<F: UiCallBack>(
        &self,
        alias_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            PATH_API_ADMIN_BEERS_ALIASES_DELETE.with_id(alias_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }
}
