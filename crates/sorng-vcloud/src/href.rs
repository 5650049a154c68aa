//! Resource addressing.
//!
//! A [`ResourceHandle`] is the absolute `href` of one server-side object
//! (a vApp, a section of it, a task). Child locations are always derived
//! here, never by string concatenation at call sites.

use crate::error::{VcdError, VcdResult};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use url::Url;

/// Opaque absolute location of one addressable object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceHandle(Url);

impl ResourceHandle {
    /// Parse an absolute href. Relative references are rejected.
    pub fn parse(input: &str) -> VcdResult<Self> {
        let url = Url::parse(input).map_err(|e| VcdError::addressing(input, e.to_string()))?;
        Self::from_url(url)
    }

    /// Wrap an already-parsed URL.
    pub fn from_url(url: Url) -> VcdResult<Self> {
        if url.cannot_be_a_base() {
            return Err(VcdError::addressing(
                url.as_str(),
                "not a hierarchical location",
            ));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(VcdError::addressing(url.as_str(), "missing host"));
        }
        Ok(Self(url))
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Resolve `suffix` beneath this handle.
    ///
    /// An empty suffix (or `/`) addresses the handle itself. Otherwise every
    /// `/`-separated segment is appended to the parent path.
    pub fn resolve(&self, suffix: &str) -> VcdResult<Self> {
        let segments: Vec<&str> = suffix.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Ok(self.clone());
        }
        for segment in &segments {
            if *segment == "." || *segment == ".." {
                return Err(VcdError::addressing(suffix, "dot segments are not allowed"));
            }
            if segment.contains(['?', '#']) {
                return Err(VcdError::addressing(
                    suffix,
                    "query and fragment are not part of a path suffix",
                ));
            }
        }
        self.extended(&segments, suffix)
    }

    /// Append a single segment, percent-encoding it (metadata keys may
    /// contain `/`, spaces and so on).
    pub fn child(&self, segment: &str) -> VcdResult<Self> {
        if segment.is_empty() {
            return Err(VcdError::addressing(segment, "empty path segment"));
        }
        self.extended(&[segment], segment)
    }

    fn extended(&self, segments: &[&str], input: &str) -> VcdResult<Self> {
        let mut url = self.0.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| VcdError::addressing(input, "parent cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(Self(url))
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl std::str::FromStr for ResourceHandle {
    type Err = VcdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ResourceHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ResourceHandle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
