//! Stores functionality that should be shared between different clients of
//! the Beer Scanner API: the session lifecycle (token, claims, current user),
//! the observable stores the UI binds to, and the REST client.
//!
//! NB: The assumption is made that a tokio runtime has already been started
//! before any functions from this library are called. Background requests are
//! spawned onto it.

#![warn(unused_crate_dependencies)]


mod client;
mod navigation;
mod notifications;
mod session;
mod storage;
mod tracked;

#[cfg(any(test, feature = "expose_internal"))]
pub mod test_support;

pub use client::{
    await_response, no_ui_notify,
    transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport},
    Client, UiCallBack, NO_ARGUMENT,
};
pub use navigation::{LogNavigator, Navigator};
pub use notifications::{NotificationStore, UnreadNotifications};
pub use session::{
    decode_claims, DecodeError, SessionBroadcaster, SessionDecoder, SessionEvent,
    SessionSnapshot, SessionState, SessionStore, SubscriptionId, TokenStore,
};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use tracked::{TrackedResources, TrackedSnapshot, TrackedStore};
