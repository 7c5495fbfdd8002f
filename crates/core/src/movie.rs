//! Movie record model and its request payloads.

use serde::{Deserialize, Serialize};

use crate::genre::Genre;
use crate::types::MovieId;

// ---------------------------------------------------------------------------
// Entity struct (stored record)
// ---------------------------------------------------------------------------

/// A stored movie record.
///
/// `id` is assigned by the catalog on insert and never changes afterwards.
/// Every other field has passed full validation at creation time, and merged
/// validation after any partial update. Seed files deserialize directly into
/// this type, so malformed seed data is rejected at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,
    /// Runtime in minutes.
    pub duration: u32,
    /// 0.0 to 10.0.
    pub rating: f64,
    /// Order-preserving set of genres; never empty.
    pub genre: Vec<Genre>,
    /// Poster URL (validated at the boundary, stored as a plain string).
    pub poster: String,
}

impl Movie {
    /// Whether this movie's genre set contains `name`, case-insensitively.
    pub fn has_genre(&self, name: &str) -> bool {
        self.genre.iter().any(|g| g.matches(name))
    }

    /// Merge a validated patch into this record. `id` is never touched.
    pub fn apply_patch(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
    }
}

// ---------------------------------------------------------------------------
// Payloads (validated request bodies)
// ---------------------------------------------------------------------------

/// A fully validated creation payload.
///
/// Produced only by [`validate_new_movie`](crate::validate::validate_new_movie);
/// carries every stored field except `id`, which the catalog generates.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub rating: f64,
    pub genre: Vec<Genre>,
    pub poster: String,
}

impl NewMovie {
    /// Build the stored record under a freshly assigned id.
    pub fn into_movie(self, id: MovieId) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
            director: self.director,
            duration: self.duration,
            rating: self.rating,
            genre: self.genre,
            poster: self.poster,
        }
    }
}

/// A validated partial update.
///
/// Produced only by [`validate_movie_patch`](crate::validate::validate_movie_patch);
/// `None` fields are left untouched by the merge. There is deliberately no
/// `id` field here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub rating: Option<f64>,
    pub genre: Option<Vec<Genre>>,
    pub poster: Option<String>,
}

impl MoviePatch {
    /// True when no field is set (such a patch is rejected by validation).
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.director.is_none()
            && self.duration.is_none()
            && self.rating.is_none()
            && self.genre.is_none()
            && self.poster.is_none()
    }
}
