// SPDX-License-Identifier: MPL-2.0
//! Navigation port definition.
//!
//! Some embedding components need to move the application between pages;
//! the notifier delegates those requests to a [`Navigator`] adapter
//! implemented by the application's routing layer.

use crate::error::Result;
use std::fmt;

/// A navigation target: either a bare path or a structured location
/// descriptor with an optional path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Path(String),
    Location(Location),
}

/// Structured location descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: Option<String>,
}

impl Location {
    #[must_use]
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl From<&str> for NavTarget {
    fn from(path: &str) -> Self {
        NavTarget::Path(path.to_string())
    }
}

impl From<String> for NavTarget {
    fn from(path: String) -> Self {
        NavTarget::Path(path)
    }
}

impl From<Location> for NavTarget {
    fn from(location: Location) -> Self {
        NavTarget::Location(location)
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavTarget::Path(path) => write!(f, "{}", path),
            NavTarget::Location(Location { path: Some(path) }) => write!(f, "{}", path),
            NavTarget::Location(Location { path: None }) => write!(f, "<unspecified location>"),
        }
    }
}

/// Trait for routing adapters.
pub trait Navigator: Send + Sync {
    /// Navigates to the given target.
    ///
    /// # Errors
    ///
    /// Returns an error when the target cannot be resolved or the routing
    /// layer rejects the navigation.
    fn navigate(&self, target: &NavTarget) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_target_from_str_is_path() {
        let target = NavTarget::from("/settings");
        assert_eq!(target, NavTarget::Path("/settings".to_string()));
    }

    #[test]
    fn nav_target_displays_location_path() {
        let target = NavTarget::from(Location::with_path("/home"));
        assert_eq!(target.to_string(), "/home");
    }

    #[test]
    fn empty_location_displays_placeholder() {
        let target = NavTarget::from(Location::default());
        assert_eq!(target.to_string(), "<unspecified location>");
    }
}
