use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use crate::id::DbId;

/// The complete user as the server knows it (`GET /api/v1/users/me`)
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub google_id: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub notification_enabled: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub permissions: BTreeSet<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// What can be known about the user from the token alone, before the server
/// has been asked
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PartialUser {
    pub email: String,
    pub name: String,
    pub google_id: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
}
