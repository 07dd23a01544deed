use chrono::NaiveDateTime;

use crate::id::DbId;

use super::{Bar, Beer};

#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    BeerAvailable,
    MenuChanged,
    System,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(default)]
    pub bar: Option<Bar>,
    #[serde(default)]
    pub beer: Option<Beer>,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub sent_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub sent: bool,
}

/// Body of `GET /api/v1/notifications/unread/count`
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnreadCount {
    #[serde(default)]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::beer("BEER_AVAILABLE", NotificationType::BeerAvailable)]
    #[case::menu("MENU_CHANGED", NotificationType::MenuChanged)]
    #[case::system("SYSTEM", NotificationType::System)]
    fn type_wire_names(#[case] wire: &str, #[case] expected: NotificationType) {
        // Act
        let from_json: NotificationType = serde_json::from_str(&format!("\"{wire}\"")).unwrap();
        let from_str: NotificationType = wire.parse().unwrap();

        // Assert
        assert_eq!(from_json, expected);
        assert_eq!(from_str, expected);
        assert_eq!(expected.to_string(), wire);
    }

    #[test]
    fn missing_count_defaults_to_zero() {
        let actual: UnreadCount = serde_json::from_str("{}").unwrap();
        assert_eq!(actual.count, 0);
    }
}
