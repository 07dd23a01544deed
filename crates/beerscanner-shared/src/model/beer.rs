use chrono::NaiveDateTime;

use crate::id::DbId;

use super::{BarSimple, User};

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Beer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub beer_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brewery: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abv: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Returned by the listing endpoints, includes where the beer can be found
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BeerExtended {
    #[serde(flatten)]
    pub beer: Beer,
    #[serde(default)]
    pub available_at: Vec<BarSimple>,
    #[serde(default)]
    pub previously_available_at: Vec<BarSimple>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BeerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub beer_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brewery: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abv: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_by: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extended_beer_flattens_base_fields() {
        // Arrange
        let json = r#"{
            "id": 3,
            "name": "Pliny",
            "type": "Double IPA",
            "abv": 8.0,
            "availableAt": [{"id": 1, "name": "The Tap"}]
        }"#;

        // Act
        let actual: BeerExtended = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(actual.beer.name, "Pliny");
        assert_eq!(actual.beer.beer_type.as_deref(), Some("Double IPA"));
        assert_eq!(actual.available_at[0].name, "The Tap");
        assert!(actual.previously_available_at.is_empty());
    }
}
