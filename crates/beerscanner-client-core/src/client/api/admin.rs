//! Endpoints only an administrator may call. The server answers anyone else
//! with `403`, which surfaces as an [`beerscanner_shared::errors::ApiError`]
//! and leaves the session alone

mod bars;
mod beers;
mod logs;
mod notifications;
mod scraper;
