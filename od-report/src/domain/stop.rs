//! Stop type.

use std::fmt;
use std::sync::Arc;

/// Error returned when creating a stop with an invalid name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop: {reason}")]
pub struct InvalidStop {
    reason: &'static str,
}

/// A named location where a service calls to let passengers board or alight.
///
/// Stops are compared by their exact name: no case folding or whitespace
/// trimming, so `"ply "` and `"ply"` are different stops. The name is shared
/// behind an `Arc`, so cloning a stop into every segment, OD and booking that
/// mentions it is cheap.
///
/// # Examples
///
/// ```
/// use od_report::domain::Stop;
///
/// let ply = Stop::new("ply").unwrap();
/// assert_eq!(ply.name(), "ply");
/// assert_eq!(ply, Stop::new("ply").unwrap());
///
/// // Blank names are rejected
/// assert!(Stop::new("").is_err());
/// assert!(Stop::new("  ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Stop(Arc<str>);

impl Stop {
    /// Create a stop from its name, kept as given.
    pub fn new(name: &str) -> Result<Self, InvalidStop> {
        if name.trim().is_empty() {
            return Err(InvalidStop {
                reason: "stop name cannot be empty",
            });
        }
        Ok(Stop(Arc::from(name)))
    }

    /// Returns the stop name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stop({})", self.0)
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::Serialize for Stop {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any name with a visible character is a valid stop
        #[test]
        fn visible_names_accepted(s in "[a-zA-Z0-9][a-zA-Z0-9 -]{0,20}") {
            let stop = Stop::new(&s).unwrap();
            prop_assert_eq!(stop.name(), s.as_str());
        }
    }
}
