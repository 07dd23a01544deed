//! Simple wrappers to make many errors hard to make

#![warn(unused_crate_dependencies)]

use std::fmt::Display;

mod relative;

pub use relative::{format_from_now, format_from_now_local, NEVER};

/// Seconds since the unix epoch, the same unit JWT `iat`/`exp` claims use.
///
/// Keeps on ticking if the computer is sleeping, only works with date/time
/// after the unix epoch
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn now() -> Self {
        Self(
            web_time::SystemTime::UNIX_EPOCH
                .elapsed()
                .map(|elapsed| elapsed.as_secs())
                // A clock before 1970 is treated as the epoch itself
                .unwrap_or_default(),
        )
    }

    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns [`None`] if the value cannot be represented by chrono
    pub fn as_utc_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(self.0.try_into().ok()?, 0)
    }

    /// True if `now` has reached or passed this timestamp
    pub fn has_passed_at(self, now: Self) -> bool {
        self.0 <= now.0
    }
}

impl From<u64> for Timestamp {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Timestamp> for u64 {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
