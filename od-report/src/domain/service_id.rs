//! Service identifier type.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Error returned when creating an invalid service identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid service id: {reason}")]
pub struct InvalidServiceId {
    reason: &'static str,
}

/// Identifier of a service (e.g. the train number "7601").
///
/// Every segment and OD carries the id of its service, so the text is shared
/// behind an `Arc` and cloning is cheap. Identifiers are compared exactly;
/// they must be non-empty and contain no whitespace or control characters.
///
/// # Examples
///
/// ```
/// use od_report::domain::ServiceId;
///
/// let id = ServiceId::new("7601").unwrap();
/// assert_eq!(id.as_str(), "7601");
/// assert_eq!("7601".parse::<ServiceId>().unwrap(), id);
///
/// assert!(ServiceId::new("").is_err());
/// assert!(ServiceId::new("76 01").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ServiceId(Arc<str>);

impl ServiceId {
    /// Create a service identifier.
    pub fn new(id: &str) -> Result<Self, InvalidServiceId> {
        if id.is_empty() {
            return Err(InvalidServiceId {
                reason: "service id cannot be empty",
            });
        }
        if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(InvalidServiceId {
                reason: "service id cannot contain whitespace",
            });
        }
        Ok(ServiceId(Arc::from(id)))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ServiceId {
    type Err = InvalidServiceId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceId::new(s)
    }
}

impl fmt::Debug for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceId({})", self.0)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::Serialize for ServiceId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for ServiceId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        ServiceId::new(&id).map_err(serde::de::Error::custom)
    }
}
