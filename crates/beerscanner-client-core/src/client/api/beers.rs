use beerscanner_shared::{
    const_config::path::{
        PATH_API_BEERS_MY_REQUESTS, PATH_API_BEERS_PUBLIC, PATH_API_BEERS_PUBLIC_AVAILABLE_AT,
        PATH_API_BEERS_PUBLIC_BY_BREWERY, PATH_API_BEERS_PUBLIC_BY_ID,
        PATH_API_BEERS_PUBLIC_BY_TYPE, PATH_API_BEERS_PUBLIC_SEARCH, PATH_API_BEERS_REQUEST,
    },
    id::DbId,
    model::{Bar, BeerExtended, BeerRequest, Page, Pageable},
    req_args::api::v1::{BeersByBreweryReqArgs, BeersByTypeReqArgs, SearchReqArgs},
};
use futures::channel::oneshot;

use crate::{
    client::{UiCallBack, NO_ARGUMENT},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn all_beers<F: UiCallBack>(
        &self,
        pageable: &Pageable,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<BeerExtended>>> {
        self.send_request_expect_json(PATH_API_BEERS_PUBLIC, pageable, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn beer_by_id<F: UiCallBack>(
        &self,
        beer_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<BeerExtended>> {
        self.send_request_expect_json(
            PATH_API_BEERS_PUBLIC_BY_ID.with_id(beer_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn search_beers<F: UiCallBack>(
        &self,
        args: &SearchReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<BeerExtended>>> {
        self.send_request_expect_json(PATH_API_BEERS_PUBLIC_SEARCH, args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn beers_by_type<F: UiCallBack>(
        &self,
        args: &BeersByTypeReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<BeerExtended>>> {
        self.send_request_expect_json(PATH_API_BEERS_PUBLIC_BY_TYPE, args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn beers_by_brewery<F: UiCallBack>(
        &self,
        args: &BeersByBreweryReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<BeerExtended>>> {
        self.send_request_expect_json(PATH_API_BEERS_PUBLIC_BY_BREWERY, args, ui_notify)
    }

    /// Bars currently serving the beer
    #[tracing::instrument(skip(ui_notify))]
    pub fn bars_with_beer<F: UiCallBack>(
        &self,
        beer_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<Bar>>> {
        self.send_request_expect_json(
            PATH_API_BEERS_PUBLIC_AVAILABLE_AT.with_id(beer_id),
            NO_ARGUMENT,
            ui_notify,
        )
    }

    /// Asks for a beer to be added, the server also starts tracking it for the
    /// user
    #[tracing::instrument(skip(ui_notify))]
    pub fn request_beer<F: UiCallBack>(
        &self,
        beer: &BeerRequest,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(PATH_API_BEERS_REQUEST, beer, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn my_beer_requests<F: UiCallBack>(
        &self,
        pageable: &Pageable,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<BeerRequest>>> {
        self.send_request_expect_json(PATH_API_BEERS_MY_REQUESTS, pageable, ui_notify)
    }
}

#[cfg(test)]
mod tests {
    use beerscanner_shared::const_config::path::Endpoint;
    use reqwest::StatusCode;
    use rstest::rstest;

    use crate::{
        client::await_response,
        no_ui_notify,
        test_support::{query_of, settle, sorted_query, Harness},
    };

    use super::*;

    #[tokio::test]
    async fn beer_by_id_flattens_availability() {
        // Arrange
        let harness = Harness::new();
        let endpoint = PATH_API_BEERS_PUBLIC_BY_ID.with_id(3);
        harness.transport.respond_json(
            endpoint,
            serde_json::json!({
                "id": 3,
                "name": "Tropical Stout",
                "brewery": "Borg",
                "availableAt": [{"id": 1, "name": "Kaldi"}],
                "previouslyAvailableAt": []
            }),
        );

        // Act
        let actual = await_response(harness.client.beer_by_id(DbId::from(3), no_ui_notify))
            .await
            .unwrap();

        // Assert
        assert_eq!(actual.beer.name, "Tropical Stout");
        assert_eq!(actual.available_at[0].name, "Kaldi");
        assert!(actual.previously_available_at.is_empty());
    }

    #[tokio::test]
    async fn by_type_sends_type_key() {
        // Arrange
        let harness = Harness::new();
        harness.transport.respond_json(
            PATH_API_BEERS_PUBLIC_BY_TYPE,
            serde_json::json!({"content": []}),
        );
        let args = BeersByTypeReqArgs {
            beer_type: "Stout".to_string(),
            pageable: Pageable::first(),
        };

        // Act
        await_response(harness.client.beers_by_type(&args, no_ui_notify))
            .await
            .unwrap();

        // Assert
        let sent = harness
            .transport
            .requests_to(&PATH_API_BEERS_PUBLIC_BY_TYPE.into());
        assert!(sent[0]
            .query
            .contains(&("type".to_string(), "Stout".to_string())));
    }

    #[tokio::test]
    async fn request_beer_accepts_empty_body() {
        let harness = Harness::new();
        harness
            .transport
            .respond(PATH_API_BEERS_REQUEST, StatusCode::CREATED, "");
        let beer = BeerRequest {
            id: None,
            name: "Lava".to_string(),
            beer_type: Some("Imperial Stout".to_string()),
            brewery: Some("Ölvisholt".to_string()),
            abv: Some(9.4),
            description: None,
            requested_by: None,
            requested_at: None,
        };

        let actual = await_response(harness.client.request_beer(&beer, no_ui_notify)).await;

        assert!(actual.is_ok());
    }

    #[rstest]
    #[case::bars_with_beer(
        |client: &Client| { let _ = client.bars_with_beer(DbId::from(7), no_ui_notify); },
        PATH_API_BEERS_PUBLIC_AVAILABLE_AT.with_id(7),
        &[]
    )]
    #[case::by_brewery(
        |client: &Client| {
            let args = BeersByBreweryReqArgs {
                brewery: "Borg".into(),
                pageable: Pageable::first(),
            };
            let _ = client.beers_by_brewery(&args, no_ui_notify);
        },
        PATH_API_BEERS_PUBLIC_BY_BREWERY.into(),
        &[("brewery", "Borg"), ("page", "0"), ("size", "20")]
    )]
    #[case::by_type(
        |client: &Client| {
            let args = BeersByTypeReqArgs {
                beer_type: "IPA".into(),
                pageable: Pageable::first(),
            };
            let _ = client.beers_by_type(&args, no_ui_notify);
        },
        PATH_API_BEERS_PUBLIC_BY_TYPE.into(),
        &[("type", "IPA"), ("page", "0"), ("size", "20")]
    )]
    #[case::my_requests(
        |client: &Client| { let _ = client.my_beer_requests(&Pageable::new(1, 5), no_ui_notify); },
        PATH_API_BEERS_MY_REQUESTS.into(),
        &[("page", "1"), ("size", "5")]
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
        assert!(sent[0].body.is_none());
    }
}
