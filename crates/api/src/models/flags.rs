use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered list of compiler command-line tokens.
///
/// Order matters: a path flag such as `-I` may be followed by its argument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagList(Vec<String>);

impl FlagList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, flag: impl Into<String>) {
        self.0.push(flag.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.0.iter().any(|f| f == flag)
    }

    /// Number of occurrences of `flag`.
    pub fn count(&self, flag: &str) -> usize {
        self.0.iter().filter(|f| *f == flag).count()
    }

    /// Removes the first occurrence of `flag`, returning whether one was found.
    pub fn remove_if_present(&mut self, flag: &str) -> bool {
        match self.0.iter().position(|f| f == flag) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl From<Vec<String>> for FlagList {
    fn from(flags: Vec<String>) -> Self {
        Self(flags)
    }
}

impl From<&[&str]> for FlagList {
    fn from(flags: &[&str]) -> Self {
        Self(flags.iter().map(|f| f.to_string()).collect())
    }
}

impl<S: Into<String>> FromIterator<S> for FlagList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for FlagList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for FlagList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FlagList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FlagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// The answer to "what flags should this file be parsed with".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagResolution {
    pub flags: FlagList,
    /// The caller may keep this result for the rest of the process lifetime.
    pub do_cache: bool,
}

impl FlagResolution {
    pub fn cached(flags: FlagList) -> Self {
        Self {
            flags,
            do_cache: true,
        }
    }
}
