//! Parsing of free-text route lists.
//!
//! Input is one route per line in the form `Origin-Destination,Distance`:
//!
//! ```text
//! Sydney-Melbourne,880
//! Sydney-Brisbane,920
//! Melbourne-Brisbane,1650
//! ```
//!
//! Lines that do not split into exactly two comma-separated fields (blank
//! lines, headers, partial edits) are skipped. A line that does split but
//! carries a malformed route name or distance is an error.

use thiserror::Error;

use crate::error::ModalError;
use crate::models::{Mode, RouteCatalog, RouteKey};

/// Errors from parsing route text or scenario files.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: route must be `Origin-Destination`, got {text:?}")]
    MalformedRoute { line: usize, text: String },

    #[error("line {line}: invalid distance {text:?}")]
    InvalidDistance { line: usize, text: String },

    #[error(transparent)]
    Model(#[from] ModalError),

    #[cfg(feature = "json")]
    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses `Origin-Destination,Distance` lines into a [`RouteCatalog`].
///
/// Names and distances are trimmed. A repeated route keeps its first
/// position and takes the later distance.
///
/// # Examples
///
/// ```
/// use u_modal::models::RouteKey;
/// use u_modal::parse::parse_routes;
///
/// let catalog = parse_routes("Sydney-Melbourne,880\nSydney-Brisbane, 920\n\n").unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.distance(&RouteKey::new("Sydney", "Brisbane")), Some(920.0));
/// ```
pub fn parse_routes(text: &str) -> Result<RouteCatalog, ParseError> {
    let mut catalog = RouteCatalog::new();
    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let mut fields = line.split(',');
        let (Some(route), Some(distance), None) = (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };

        let route = parse_route_key(route).ok_or_else(|| ParseError::MalformedRoute {
            line: line_no,
            text: route.to_string(),
        })?;

        let distance_km: f64 = distance
            .trim()
            .parse()
            .ok()
            .filter(|d: &f64| d.is_finite() && *d >= 0.0)
            .ok_or_else(|| ParseError::InvalidDistance {
                line: line_no,
                text: distance.to_string(),
            })?;

        catalog.insert(route, distance_km)?;
    }
    Ok(catalog)
}

/// Parses `Origin-Destination` into a key; both names must be non-empty.
pub fn parse_route_key(text: &str) -> Option<RouteKey> {
    let (origin, destination) = text.split_once('-')?;
    let (origin, destination) = (origin.trim(), destination.trim());
    if origin.is_empty() || destination.is_empty() || destination.contains('-') {
        return None;
    }
    Some(RouteKey::new(origin, destination))
}

/// Parses a mode name; `road` and `rail` map to the built-in modes.
pub fn parse_mode(text: &str) -> Mode {
    Mode::named(text)
}
