//! Identifier newtypes for titles, people, and users.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from a string.
            pub fn new<S: Into<String>>(id: S) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// IMDb title identifier (`tconst`), e.g. `tt0111161`.
    ///
    /// # Examples
    ///
    /// ```
    /// use reelmatch_core::TitleId;
    ///
    /// let id = TitleId::new("tt0111161");
    /// assert_eq!(id.as_str(), "tt0111161");
    /// assert!(id.is_well_formed());
    /// ```
    TitleId
);

string_id!(
    /// IMDb person identifier (`nconst`), e.g. `nm0000151`.
    PersonId
);

string_id!(
    /// User profile identifier, e.g. `user_drama`.
    UserId
);

/// Two lowercase ASCII letters followed by at least seven digits.
fn has_imdb_shape(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .is_some_and(|digits| digits.len() >= 7 && digits.bytes().all(|b| b.is_ascii_digit()))
}

impl TitleId {
    /// Returns whether the id looks like an IMDb `tt` identifier.
    pub fn is_well_formed(&self) -> bool {
        has_imdb_shape(&self.0, "tt")
    }
}

impl PersonId {
    /// Returns whether the id looks like an IMDb `nm` identifier.
    pub fn is_well_formed(&self) -> bool {
        has_imdb_shape(&self.0, "nm")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_title_id_well_formed() {
        assert!(TitleId::new("tt0000001").is_well_formed());
        assert!(TitleId::new("tt12345678").is_well_formed());
        assert!(!TitleId::new("tt123").is_well_formed());
        assert!(!TitleId::new("nm0000001").is_well_formed());
        assert!(!TitleId::new("tt00000a1").is_well_formed());
    }

    #[test]
    fn test_person_id_well_formed() {
        assert!(PersonId::new("nm0000151").is_well_formed());
        assert!(!PersonId::new("tt0000151").is_well_formed());
    }

    #[test]
    fn test_user_id_display() {
        let id = UserId::from("user_scifi");
        assert_eq!(id.to_string(), "user_scifi");
        assert_eq!(id.as_ref(), "user_scifi");
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let id = TitleId::new("tt0111161");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"tt0111161\"");
        let back: TitleId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
