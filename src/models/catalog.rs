//! Route catalog: known routes and their distances.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::RouteKey;
use crate::error::{ModalError, Result};

/// A route together with its fixed distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Route key.
    pub route: RouteKey,
    /// Distance in kilometers.
    pub distance_km: f64,
}

/// The set of known routes, each with a fixed distance.
///
/// Keys are unique. Iteration follows first-insertion order, so everything
/// derived from "all routes" (optimizer output in particular) is
/// reproducible.
///
/// # Examples
///
/// ```
/// use u_modal::models::{RouteCatalog, RouteKey};
///
/// let mut catalog = RouteCatalog::new();
/// catalog.insert(RouteKey::new("Sydney", "Melbourne"), 880.0).unwrap();
/// catalog.insert(RouteKey::new("Sydney", "Brisbane"), 920.0).unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.distance(&RouteKey::new("Sydney", "Brisbane")), Some(920.0));
/// assert!(catalog.insert(RouteKey::new("A", "B"), -1.0).is_err());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<RouteEntry>", into = "Vec<RouteEntry>")]
pub struct RouteCatalog {
    entries: Vec<RouteEntry>,
    index: HashMap<RouteKey, usize>,
}

impl RouteCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from `(route, distance_km)` pairs.
    ///
    /// Later duplicates overwrite the distance of earlier ones.
    pub fn from_routes<I, K>(routes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<RouteKey>,
    {
        let mut catalog = Self::new();
        for (route, distance_km) in routes {
            catalog.insert(route.into(), distance_km)?;
        }
        Ok(catalog)
    }

    /// Inserts a route, or updates its distance if already present.
    ///
    /// An updated route keeps its original position in iteration order.
    /// Fails if `distance_km` is negative or not finite.
    pub fn insert(&mut self, route: RouteKey, distance_km: f64) -> Result<()> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(ModalError::InvalidDistance { route, distance_km });
        }
        match self.index.get(&route) {
            Some(&i) => self.entries[i].distance_km = distance_km,
            None => {
                self.index.insert(route.clone(), self.entries.len());
                self.entries.push(RouteEntry { route, distance_km });
            }
        }
        Ok(())
    }

    /// Distance of the given route, if known.
    pub fn distance(&self, route: &RouteKey) -> Option<f64> {
        self.index.get(route).map(|&i| self.entries[i].distance_km)
    }

    /// Returns `true` if the route is in the catalog.
    pub fn contains(&self, route: &RouteKey) -> bool {
        self.index.contains_key(route)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Iterates over route keys in insertion order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteKey> {
        self.entries.iter().map(|e| &e.route)
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no routes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for RouteCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl TryFrom<Vec<RouteEntry>> for RouteCatalog {
    type Error = ModalError;

    fn try_from(entries: Vec<RouteEntry>) -> Result<Self> {
        Self::from_routes(entries.into_iter().map(|e| (e.route, e.distance_km)))
    }
}

impl From<RouteCatalog> for Vec<RouteEntry> {
    fn from(catalog: RouteCatalog) -> Self {
        catalog.entries
    }
}
