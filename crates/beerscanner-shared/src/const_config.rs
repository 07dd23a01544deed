//! Stores settings that are not expected to need to change but grouped together
//! for discoverability and reuse. Each constant should be prefixed by the module
//! name to allow importing the constant only and still be readable

pub mod client {
    /// Key the bearer token is persisted under. Nothing else about the session
    /// is persisted, the current user is always rebuilt from the token
    pub const CLIENT_TOKEN_STORAGE_KEY: &str = "token";
    pub const CLIENT_DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
}

pub mod route {
    /// Where the UI goes after an explicit logout
    pub const ROUTE_HOME: &str = "/";
    /// Where the UI goes after the server rejects the session (401)
    pub const ROUTE_LOGIN: &str = "/login";
}

pub mod path {
    mod path_spec;
    pub use path_spec::{Endpoint, PathSpec};

    // Users (all require a session)
    pub const PATH_API_USERS_ME: PathSpec = PathSpec::get("/api/v1/users/me");
    pub const PATH_API_USERS_ME_NOTIFICATION_SETTINGS: PathSpec =
        PathSpec::put("/api/v1/users/me/notification-settings");
    pub const PATH_API_USERS_ME_TRACKED_BARS: PathSpec =
        PathSpec::get("/api/v1/users/me/tracked-bars");
    pub const PATH_API_USERS_ME_TRACKED_BEERS: PathSpec =
        PathSpec::get("/api/v1/users/me/tracked-beers");
    pub const PATH_API_USERS_ME_TRACK_BAR: PathSpec =
        PathSpec::post("/api/v1/users/me/tracked-bars/{id}");
    pub const PATH_API_USERS_ME_UNTRACK_BAR: PathSpec =
        PathSpec::delete("/api/v1/users/me/tracked-bars/{id}");
    pub const PATH_API_USERS_ME_TRACK_BEER: PathSpec =
        PathSpec::post("/api/v1/users/me/tracked-beers/{id}");
    pub const PATH_API_USERS_ME_UNTRACK_BEER: PathSpec =
        PathSpec::delete("/api/v1/users/me/tracked-beers/{id}");

    // Bars
    pub const PATH_API_BARS_PUBLIC: PathSpec = PathSpec::get("/api/v1/bars/public");
    pub const PATH_API_BARS_PUBLIC_BY_ID: PathSpec = PathSpec::get("/api/v1/bars/public/{id}");
    pub const PATH_API_BARS_PUBLIC_CURRENT_BEERS: PathSpec =
        PathSpec::get("/api/v1/bars/public/{id}/current-beers");
    pub const PATH_API_BARS_PUBLIC_PAST_BEERS: PathSpec =
        PathSpec::get("/api/v1/bars/public/{id}/past-beers");
    pub const PATH_API_BARS_PUBLIC_SEARCH: PathSpec = PathSpec::get("/api/v1/bars/public/search");
    pub const PATH_API_BARS_MY_REQUESTS: PathSpec = PathSpec::get("/api/v1/bars/my-requests");
    pub const PATH_API_BARS_REQUEST: PathSpec = PathSpec::post("/api/v1/bars");

    // Beers
    pub const PATH_API_BEERS_PUBLIC: PathSpec = PathSpec::get("/api/v1/beers/public");
    pub const PATH_API_BEERS_PUBLIC_BY_ID: PathSpec = PathSpec::get("/api/v1/beers/public/{id}");
    pub const PATH_API_BEERS_PUBLIC_AVAILABLE_AT: PathSpec =
        PathSpec::get("/api/v1/beers/public/{id}/available-at");
    pub const PATH_API_BEERS_PUBLIC_SEARCH: PathSpec =
        PathSpec::get("/api/v1/beers/public/search");
    pub const PATH_API_BEERS_PUBLIC_BY_TYPE: PathSpec =
        PathSpec::get("/api/v1/beers/public/by-type");
    pub const PATH_API_BEERS_PUBLIC_BY_BREWERY: PathSpec =
        PathSpec::get("/api/v1/beers/public/by-brewery");
    pub const PATH_API_BEERS_REQUEST: PathSpec = PathSpec::post("/api/v1/beers/request");
    pub const PATH_API_BEERS_MY_REQUESTS: PathSpec = PathSpec::get("/api/v1/beers/my-requests");

    // Notifications
    pub const PATH_API_NOTIFICATIONS: PathSpec = PathSpec::get("/api/v1/notifications");
    pub const PATH_API_NOTIFICATIONS_UNREAD: PathSpec =
        PathSpec::get("/api/v1/notifications/unread");
    pub const PATH_API_NOTIFICATIONS_UNREAD_COUNT: PathSpec =
        PathSpec::get("/api/v1/notifications/unread/count");
    pub const PATH_API_NOTIFICATIONS_MARK_READ: PathSpec =
        PathSpec::put("/api/v1/notifications/{id}/read");

    // Admin (all require an administrator session)
    pub const PATH_API_ADMIN_BARS: PathSpec = PathSpec::get("/api/v1/admin/bars");
    pub const PATH_API_ADMIN_BARS_CREATE: PathSpec = PathSpec::post("/api/v1/admin/bars");
    pub const PATH_API_ADMIN_BARS_UNAPPROVED: PathSpec =
        PathSpec::get("/api/v1/admin/bars/unapproved");
    pub const PATH_API_ADMIN_BARS_BY_ID: PathSpec = PathSpec::get("/api/v1/admin/bars/{id}");
    pub const PATH_API_ADMIN_BARS_UPDATE: PathSpec = PathSpec::put("/api/v1/admin/bars/{id}");
    pub const PATH_API_ADMIN_BARS_DELETE: PathSpec = PathSpec::delete("/api/v1/admin/bars/{id}");
    pub const PATH_API_ADMIN_BARS_APPROVE: PathSpec =
        PathSpec::post("/api/v1/admin/bars/{id}/approve");
    pub const PATH_API_ADMIN_BARS_CHECK: PathSpec = PathSpec::post("/api/v1/admin/bars/{id}/check");
    pub const PATH_API_ADMIN_BARS_CHECKS: PathSpec =
        PathSpec::get("/api/v1/admin/bars/{id}/checks");
    pub const PATH_API_ADMIN_BARS_CHECKS_LATEST: PathSpec =
        PathSpec::get("/api/v1/admin/bars/{id}/checks/latest");
    pub const PATH_API_ADMIN_BEERS_CREATE: PathSpec = PathSpec::post("/api/v1/admin/beers");
    pub const PATH_API_ADMIN_BEERS_UNAPPROVED: PathSpec =
        PathSpec::get("/api/v1/admin/beers/unapproved");
    pub const PATH_API_ADMIN_BEERS_APPROVE: PathSpec =
        PathSpec::put("/api/v1/admin/beers/{id}/approve");
    pub const PATH_API_ADMIN_BEERS_UNAPPROVE: PathSpec =
        PathSpec::put("/api/v1/admin/beers/{id}/unapprove");
    pub const PATH_API_ADMIN_BEERS_FIND_OR_CREATE: PathSpec =
        PathSpec::post("/api/v1/admin/beers/find-or-create");
    pub const PATH_API_ADMIN_BEERS_UPDATE: PathSpec = PathSpec::put("/api/v1/admin/beers/{id}");
    pub const PATH_API_ADMIN_BEERS_DELETE: PathSpec =
        PathSpec::delete("/api/v1/admin/beers/{id}");
    pub const PATH_API_ADMIN_BEERS_ALIASES: PathSpec =
        PathSpec::get("/api/v1/admin/beers/{id}/aliases");
    pub const PATH_API_ADMIN_BEERS_ALIASES_ADD: PathSpec =
        PathSpec::post("/api/v1/admin/beers/{id}/aliases");
    pub const PATH_API_ADMIN_BEERS_ALIASES_DELETE: PathSpec =
        PathSpec::delete("/api/v1/admin/beers/aliases/{id}");
    pub const PATH_API_ADMIN_LOGS: PathSpec = PathSpec::get("/api/v1/admin/logs");
    pub const PATH_API_ADMIN_LOGS_BY_LEVEL: PathSpec = PathSpec::get("/api/v1/admin/logs/by-level");
    pub const PATH_API_ADMIN_LOGS_BY_DATE_RANGE: PathSpec =
        PathSpec::get("/api/v1/admin/logs/by-date-range");
    pub const PATH_API_ADMIN_LOGS_CLEAR: PathSpec = PathSpec::delete("/api/v1/admin/logs");
    pub const PATH_API_ADMIN_SCRAPER_SETTINGS: PathSpec =
        PathSpec::get("/api/v1/admin/scraper/settings");
    pub const PATH_API_ADMIN_SCRAPER_SETTINGS_UPDATE: PathSpec =
        PathSpec::put("/api/v1/admin/scraper/settings");
    pub const PATH_API_ADMIN_SCRAPER_STATS: PathSpec =
        PathSpec::get("/api/v1/admin/scraper/stats");
    pub const PATH_API_ADMIN_SCRAPER_STATS_BY_BAR: PathSpec =
        PathSpec::get("/api/v1/admin/scraper/stats/{id}");
    pub const PATH_API_ADMIN_SCRAPER_STATS_RESET: PathSpec =
        PathSpec::post("/api/v1/admin/scraper/stats/reset");
    pub const PATH_API_ADMIN_SCRAPER_ENABLE: PathSpec =
        PathSpec::post("/api/v1/admin/scraper/enable");
    pub const PATH_API_ADMIN_SCRAPER_DISABLE: PathSpec =
        PathSpec::post("/api/v1/admin/scraper/disable");
    pub const PATH_API_NOTIFICATIONS_ADMIN_SYSTEM: PathSpec =
        PathSpec::post("/api/v1/notifications/admin/system");
    pub const PATH_API_NOTIFICATIONS_ADMIN_PROCESS_UNSENT: PathSpec =
        PathSpec::post("/api/v1/notifications/admin/process-unsent");
}

#[cfg(test)]
mod tests {
    use static_assertions::const_assert;

    use super::client::CLIENT_TOKEN_STORAGE_KEY;

    const_assert!(!CLIENT_TOKEN_STORAGE_KEY.is_empty());
}
