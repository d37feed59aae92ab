use std::{fmt, ops::Deref};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A route path with a single leading `/`, no trailing `/` and no empty
/// segments. Placeholder segments survive normalization untouched, so a
/// template can be normalized before or after conversion.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedPath(String);

impl NormalizedPath {
    pub fn new(path: &str) -> Self {
        let mut normalized = String::with_capacity(path.len() + 1);

        for segment in path.split('/').map(str::trim).filter(|s| !s.is_empty()) {
            normalized.push('/');
            normalized.push_str(segment);
        }

        if normalized.is_empty() {
            normalized.push('/');
        }

        Self(normalized)
    }

    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Appends `postfix` under `self`, treating the root path as the
    /// identity on either side.
    pub fn join(self, postfix: Self) -> Self {
        if self.is_root() {
            postfix
        } else if postfix.is_root() {
            self
        } else {
            let mut path = self.0;
            path.push_str(&postfix.0);
            Self(path)
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for NormalizedPath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Deref for NormalizedPath {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> From<&'a str> for NormalizedPath {
    fn from(path: &'a str) -> Self {
        NormalizedPath::new(path)
    }
}

impl From<NormalizedPath> for String {
    fn from(path: NormalizedPath) -> Self {
        path.0
    }
}

impl Serialize for NormalizedPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NormalizedPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <String as Deserialize<'de>>::deserialize(deserializer).map(|s| NormalizedPath::new(&s))
    }
}

impl PartialEq<&str> for NormalizedPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<NormalizedPath> for &str {
    fn eq(&self, other: &NormalizedPath) -> bool {
        *self == other.0
    }
}

impl PartialEq<String> for NormalizedPath {
    fn eq(&self, other: &String) -> bool {
        self.0 == *other
    }
}

impl PartialEq<NormalizedPath> for String {
    fn eq(&self, other: &NormalizedPath) -> bool {
        *self == other.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert_path;

    #[test]
    fn test_normalize() {
        assert_eq!(NormalizedPath::new(""), "/");
        assert_eq!(NormalizedPath::new("/"), "/");
        assert_eq!(NormalizedPath::new("//"), "/");
        assert_eq!(NormalizedPath::new(" / / "), "/");

        assert_eq!(NormalizedPath::new("pets"), "/pets");
        assert_eq!(NormalizedPath::new("/pets/"), "/pets");
        assert_eq!(NormalizedPath::new("//pets//"), "/pets");

        assert_eq!(NormalizedPath::new("/pets/{petId}/"), "/pets/{petId}");
        assert_eq!(NormalizedPath::new("v1//pets/{petId}"), "/v1/pets/{petId}");
    }

    #[test]
    fn test_join() {
        fn join<'a>(prefix: &'a str, postfix: &'a str) -> NormalizedPath {
            NormalizedPath::new(prefix).join(NormalizedPath::new(postfix))
        }

        assert_eq!(join("", ""), "/");
        assert_eq!(join("/", "/pets"), "/pets");
        assert_eq!(join("/api/v1", "/"), "/api/v1");
        assert_eq!(join("/api/v1/", "/pets/{petId}/"), "/api/v1/pets/{petId}");
    }

    #[test]
    fn test_join_then_convert() {
        let full = NormalizedPath::new("/api/v1").join(NormalizedPath::new("/pets/{pet-id}"));
        assert_eq!(convert_path(&full), "/api/v1/pets/<pet_id>");
    }

    #[test]
    fn test_deserialize_normalizes() {
        let path: NormalizedPath = serde_json::from_str(r#""//api//v1/""#).unwrap();
        assert_eq!(path, "/api/v1");
    }
}
