//! Transport mode type.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named transport method.
///
/// `Road` and `Rail` are built in; any other mode is carried by name.
/// Names are normalized on construction, so `Mode::named("rail")` is
/// `Mode::Rail`.
///
/// # Examples
///
/// ```
/// use u_modal::models::Mode;
///
/// assert_eq!(Mode::named("RAIL"), Mode::Rail);
/// assert_eq!(Mode::named("sea").to_string(), "sea");
/// assert_eq!("road".parse::<Mode>().unwrap(), Mode::Road);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    /// Road freight.
    Road,
    /// Rail freight.
    Rail,
    /// Any other mode, identified by name.
    Named(String),
}

impl Mode {
    /// Creates a mode from its name, mapping `road` and `rail`
    /// (case-insensitive) to the built-in variants.
    pub fn named(name: impl AsRef<str>) -> Self {
        let name = name.as_ref().trim();
        if name.eq_ignore_ascii_case("road") {
            Mode::Road
        } else if name.eq_ignore_ascii_case("rail") {
            Mode::Rail
        } else {
            Mode::Named(name.to_string())
        }
    }

    /// The mode's name.
    pub fn name(&self) -> &str {
        match self {
            Mode::Road => "road",
            Mode::Rail => "rail",
            Mode::Named(name) => name,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Mode::named(s))
    }
}

impl From<String> for Mode {
    fn from(name: String) -> Self {
        Mode::named(name)
    }
}

impl From<&str> for Mode {
    fn from(name: &str) -> Self {
        Mode::named(name)
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Named(name) => name,
            builtin => builtin.name().to_string(),
        }
    }
}
