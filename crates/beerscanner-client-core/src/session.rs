//! Who is signed in.
//!
//! The bearer token in [`TokenStore`] is the only thing persisted. Everything
//! else is derived from it: [`SessionDecoder`] reads its claims locally,
//! [`SessionBroadcaster`] tells interested parties when it changes and
//! [`SessionStore`] turns all of that into the state the UI shows.

mod broadcaster;
mod decoder;
mod store;
mod token_store;

pub use broadcaster::{SessionBroadcaster, SessionEvent, SubscriptionId};
pub use decoder::{decode_claims, DecodeError, SessionDecoder};
pub use store::{SessionSnapshot, SessionState, SessionStore};
pub use token_store::TokenStore;
