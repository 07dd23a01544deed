//! Arguments for the `/api/v1/admin` endpoints and the admin only notification
//! endpoints

use chrono::NaiveDateTime;

use crate::model::{LogLevel, Pageable};

/// Sent in the query string even though this is a `POST`. Only `name` is
/// required, the rest fill in a beer that does not exist yet
#[derive(Debug, serde::Serialize, Clone, PartialEq, Default)]
pub struct FindOrCreateBeerReqArgs {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brewery: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub beer_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abv: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FindOrCreateBeerReqArgs {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, serde::Serialize, Clone, PartialEq, Eq)]
pub struct BeerAliasReqArgs {
    pub name: String,
    pub brewery: String,
}

#[derive(Debug, serde::Serialize, Clone, PartialEq, Eq)]
pub struct LogsByLevelReqArgs {
    pub level: LogLevel,
    #[serde(flatten)]
    pub pageable: Pageable,
}

/// Both ends are server local time
#[derive(Debug, serde::Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogsByDateRangeReqArgs {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    #[serde(flatten)]
    pub pageable: Pageable,
}

/// Delivered to every user. The server rejects it if either field is missing
#[derive(Debug, serde::Serialize, Clone, PartialEq, Eq)]
pub struct SystemNotificationReqArgs {
    pub title: String,
    pub message: String,
}
