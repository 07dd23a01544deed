use crate::{id::DbId, model::Pageable};

pub mod admin;

/// Used by both `/api/v1/bars/public/search` and `/api/v1/beers/public/search`
#[derive(Debug, serde::Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchReqArgs {
    pub search_term: String,
    #[serde(flatten)]
    pub pageable: Pageable,
}

impl SearchReqArgs {
    pub fn new<S: Into<String>>(search_term: S, pageable: Pageable) -> Self {
        Self {
            search_term: search_term.into(),
            pageable,
        }
    }
}

#[derive(Debug, serde::Serialize, Clone, PartialEq, Eq)]
pub struct BeersByTypeReqArgs {
    #[serde(rename = "type")]
    pub beer_type: String,
    #[serde(flatten)]
    pub pageable: Pageable,
}

#[derive(Debug, serde::Serialize, Clone, PartialEq, Eq)]
pub struct BeersByBreweryReqArgs {
    pub brewery: String,
    #[serde(flatten)]
    pub pageable: Pageable,
}

/// Sent in the query string even though tracking is a `POST`
#[derive(Debug, serde::Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrackBeerReqArgs {
    /// The bar the user wants to be told about, any bar if [`None`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_id: Option<DbId>,
}

#[derive(Debug, serde::Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettingsReqArgs {
    pub notification_enabled: bool,
}
