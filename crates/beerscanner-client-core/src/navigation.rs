use std::fmt::Debug;

use tracing::info;

/// Implemented by the host UI to move between its pages.
///
/// The session only ever asks for the routes in
/// [`beerscanner_shared::const_config::route`].
pub trait Navigator: Debug + Send + Sync + 'static {
    fn navigate(&self, route: &str);
}

/// For hosts without pages (e.g. a command line), only records the request
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: &str) {
        info!(route, "navigation requested");
    }
}
