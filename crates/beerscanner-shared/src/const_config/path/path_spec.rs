use reqwest::Method;
use std::fmt::Display;

/// Placeholder for the id segment of a path template
const ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone)]
pub struct PathSpec {
    pub path: &'static str,
    pub method: Method,
}

/// A [`PathSpec`] with every placeholder filled in, ready to be requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: String,
    pub method: Method,
}

impl PathSpec {
    pub const fn get(path: &'static str) -> Self {
        Self {
            path,
            method: Method::GET,
        }
    }

    pub const fn post(path: &'static str) -> Self {
        Self {
            path,
            method: Method::POST,
        }
    }

    pub const fn put(path: &'static str) -> Self {
        Self {
            path,
            method: Method::PUT,
        }
    }

    pub const fn delete(path: &'static str) -> Self {
        Self {
            path,
            method: Method::DELETE,
        }
    }

    pub fn has_id_placeholder(&self) -> bool {
        self.path.contains(ID_PLACEHOLDER)
    }

    /// Fills the `{id}` segment of the path
    pub fn with_id(&self, id: impl Display) -> Endpoint {
        debug_assert!(
            self.has_id_placeholder(),
            "{} does not take an id",
            self.path
        );
        Endpoint {
            path: self.path.replace(ID_PLACEHOLDER, &id.to_string()),
            method: self.method.clone(),
        }
    }
}

impl From<PathSpec> for Endpoint {
    fn from(value: PathSpec) -> Self {
        debug_assert!(
            !value.has_id_placeholder(),
            "{} needs an id, use `with_id`",
            value.path
        );
        Self {
            path: value.path.to_string(),
            method: value.method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::const_config::path::{PATH_API_BARS_PUBLIC, PATH_API_USERS_ME_TRACK_BEER};

    #[test]
    fn id_is_substituted() {
        // Act
        let actual = PATH_API_USERS_ME_TRACK_BEER.with_id(17);

        // Assert
        assert_eq!(actual.path, "/api/v1/users/me/tracked-beers/17");
        assert_eq!(actual.method, Method::POST);
    }

    #[test]
    fn plain_path_converts_unchanged() {
        let actual: Endpoint = PATH_API_BARS_PUBLIC.into();
        assert_eq!(actual.path, "/api/v1/bars/public");
        assert_eq!(actual.method, Method::GET);
    }
}
