//! The JSON shapes exchanged with the Beer Scanner API (camelCase on the wire)

mod admin;
mod bar;
mod beer;
mod notification;
mod page;
mod user;

pub use admin::{
    BarAdmin, BarCheck, BeerAlias, LogEntry, LogLevel, ProcessingStatus, ScraperSettings,
    ScraperStats, ServerMessage,
};
pub use bar::{Bar, BarSimple, BeerAvailability};
pub use beer::{Beer, BeerExtended, BeerRequest};
pub use notification::{Notification, NotificationType, UnreadCount};
pub use page::{Page, Pageable, PageableObject, SortObject};
pub use user::{PartialUser, User};
