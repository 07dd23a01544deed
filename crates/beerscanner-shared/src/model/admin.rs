//! Shapes only returned to (or accepted from) administrators

use chrono::NaiveDateTime;

use crate::id::DbId;

use super::{Bar, Beer};

/// A bar with the scraping settings only administrators see or change
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BarAdmin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub current_beer_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_checked_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_url: Option<String>,
    #[serde(
        default,
        rename = "menuXPath",
        skip_serializing_if = "Option::is_none"
    )]
    pub menu_xpath: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_menu_hash: Option<String>,
    #[serde(default)]
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(
        default,
        rename = "menuComponentXPath",
        skip_serializing_if = "Option::is_none"
    )]
    pub menu_component_xpath: Option<String>,
    #[serde(
        default,
        rename = "ageVerificationXPath",
        skip_serializing_if = "Option::is_none"
    )]
    pub age_verification_xpath: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleanup_script: Option<String>,
    #[serde(default)]
    pub process_as_text: bool,
}

impl BarAdmin {
    /// A bar as an administrator creates it, approved on arrival
    pub fn new<S: Into<String>>(name: S, location: S, menu_url: Option<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            location: location.into(),
            current_beer_count: 0,
            last_checked_at: None,
            ai_instructions: None,
            menu_url,
            menu_xpath: None,
            last_menu_hash: None,
            approved: true,
            created_at: None,
            updated_at: None,
            menu_component_xpath: None,
            age_verification_xpath: None,
            cleanup_script: None,
            process_as_text: false,
        }
    }
}

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
pub enum ProcessingStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

/// One scrape of a bar's menu
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BarCheck {
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(default)]
    pub bar: Option<Bar>,
    #[serde(default)]
    pub menu_hash: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub has_changes: bool,
    /// Seconds spent processing the menu
    #[serde(default)]
    pub process_duration: u32,
    pub processing_status: ProcessingStatus,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub beers_added: Vec<Beer>,
    #[serde(default)]
    pub beers_removed: Vec<Beer>,
}

/// Another name a beer is listed under on some menu
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BeerAlias {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub brewery: Option<String>,
    #[serde(default)]
    pub beer_id: Option<DbId>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScraperStats {
    pub total_checks: u32,
    pub successful_checks: u32,
    pub failed_checks: u32,
    pub total_changes_detected: u32,
    /// Milliseconds
    pub average_check_time: u32,
    #[serde(default)]
    pub last_check_time: Option<NaiveDateTime>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScraperSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    /// Minutes between scheduled checks
    pub check_interval: u32,
    pub max_retries: u32,
    /// Seconds
    pub retry_delay: u32,
    pub user_agent: String,
    /// Seconds
    pub timeout: u32,
    pub enabled: bool,
    pub notify_on_failure: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDateTime>,
}

#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Critical,
}

/// A server side log entry
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    #[serde(default)]
    pub id: Option<DbId>,
    pub level: LogLevel,
    pub message: String,
    pub source: String,
    #[serde(default)]
    pub stack_trace: Option<String>,
    pub timestamp: NaiveDateTime,
}

/// Acknowledgement returned by admin actions that have nothing else to report
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct ServerMessage {
    pub message: String,
}
