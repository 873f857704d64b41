//! Route key type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered pair of location names identifying a transport link.
///
/// Keys are opaque: direction is significant, so `A-B` and `B-A` are
/// different routes unless the caller normalizes them.
///
/// # Examples
///
/// ```
/// use u_modal::models::RouteKey;
///
/// let key = RouteKey::new("Sydney", "Melbourne");
/// assert_eq!(key.origin(), "Sydney");
/// assert_eq!(key.to_string(), "Sydney-Melbourne");
/// assert_ne!(key, key.reversed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteKey {
    origin: String,
    destination: String,
}

impl RouteKey {
    /// Creates a route key from origin and destination names.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Origin location name.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Destination location name.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the key for the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            origin: self.destination.clone(),
            destination: self.origin.clone(),
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.origin, self.destination)
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for RouteKey {
    fn from((origin, destination): (A, B)) -> Self {
        Self::new(origin, destination)
    }
}
