//! The fixed genre enumeration.
//!
//! A movie's `genre` field is an order-preserving set drawn from this
//! enumeration. Validation requires the exact canonical spelling; only
//! query-string *filtering* compares case-insensitively, via
//! [`Genre::matches`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// A canonical movie genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Crime,
    Drama,
    Fantasy,
    Horror,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Thriller,
}

/// All valid genres, in canonical listing order.
pub const ALL_GENRES: &[Genre] = &[
    Genre::Action,
    Genre::Adventure,
    Genre::Comedy,
    Genre::Crime,
    Genre::Drama,
    Genre::Fantasy,
    Genre::Horror,
    Genre::SciFi,
    Genre::Thriller,
];

impl Genre {
    /// The canonical display name (matches the JSON serialization).
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
        }
    }

    /// Parse an exact canonical name. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Genre> {
        ALL_GENRES.iter().copied().find(|g| g.as_str() == name)
    }

    /// Case-insensitive comparison against a user-supplied name.
    ///
    /// Used by the `?genre=` filter, where `drama` must match `Drama`.
    pub fn matches(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comma-separated list of all canonical names, for validation messages.
pub fn canonical_names() -> String {
    ALL_GENRES
        .iter()
        .map(|g| g.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
