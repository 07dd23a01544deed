use chrono::NaiveDateTime;

use crate::id::DbId;

use super::Beer;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub name: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_checked_at: Option<NaiveDateTime>,
}

impl Bar {
    /// A bar as it is sent when requesting that it be added
    pub fn new_request<S: Into<String>>(name: S, location: S, menu_url: Option<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            location: location.into(),
            menu_url,
            last_checked_at: None,
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct BarSimple {
    pub id: DbId,
    pub name: String,
}

/// A beer and when it was (or became) available at a bar
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BeerAvailability {
    #[serde(default)]
    pub available_at: Option<NaiveDateTime>,
    pub beer: Beer,
}
