use serde::{Serialize, Deserialize};

pub use dotted_version_compare::Error;

/// A version that is known to compare without error against any other [Version]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    raw: VersionString,
}

/// Any string, ordered as a dotted version
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionString(pub String);

impl VersionString {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Compare, reporting a component with too many numeric runs instead of hiding it
    pub fn try_cmp(&self, other: &Self) -> Result<std::cmp::Ordering, Error> {
        dotted_version_compare::compare(Some(self.as_str()), Some(other.as_str()))
    }
}

impl PartialOrd for VersionString {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionString {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // no run limit here, use Version or try_cmp to see it
        dotted_version_compare::compare_unbounded(Some(self.as_str()), Some(other.as_str()))
    }
}

impl PartialEq for VersionString {
    fn eq(&self, other: &VersionString) -> bool {
        matches!(self.cmp(other), std::cmp::Ordering::Equal)
    }
}

impl Eq for VersionString {}

impl From<String> for VersionString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VersionString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl TryFrom<VersionString> for Version {
    type Error = Error;
    fn try_from(v: VersionString) -> Result<Self, Self::Error> {
        dotted_version_compare::check_version(v.as_str())?;
        Ok(Self { raw: v })
    }
}

impl TryFrom<String> for Version {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Version::try_from(VersionString(s))
    }
}

impl TryFrom<&str> for Version {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Version::parse(s)
    }
}

impl std::str::FromStr for Version {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.raw.0
    }
}

impl Version {

    pub fn parse(v: &str) -> Result<Self, Error> {
        Version::try_from(VersionString::from(v))
    }

    pub fn as_str(&self) -> &str {
        self.raw.as_str()
    }

    /// empty, or only spaces and control chars, sorts before every other version
    pub fn is_absent(&self) -> bool {
        dotted_version_compare::simplify(Some(self.as_str())).is_none()
    }
}

impl std::ops::Deref for Version {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl std::ops::Deref for VersionString {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Version) -> bool {
        self.raw.eq(&other.raw)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Version) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Version) -> std::cmp::Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl std::fmt::Display for VersionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
