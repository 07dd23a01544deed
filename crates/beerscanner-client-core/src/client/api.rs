//! Typed wrappers for the endpoints of `/api/v1`, grouped by resource

mod admin;
mod bars;
mod beers;
mod notifications;
mod users;
