//! Request-body validation for movie payloads.
//!
//! Two entry points mirror the two write operations:
//! [`validate_new_movie`] for POST (every schema field required) and
//! [`validate_movie_patch`] for PATCH (at least one recognized field,
//! unrecognized fields rejected, `id` never accepted). Both are pure
//! functions over the raw JSON body; they collect every field issue in one
//! pass instead of stopping at the first.
//!
//! [`validate_movie`] applies the same value rules to an already-typed
//! record, for records that enter the system somewhere other than a request
//! body (the startup seed file).
//!
//! Unrecognized fields on *create* are ignored rather than rejected -- the
//! stored record is built only from recognized fields, so a client-supplied
//! `id` can never land in the catalog.

use chrono::Datelike;
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::genre::{self, Genre};
use crate::movie::{Movie, MoviePatch, NewMovie};

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Earliest accepted release year.
pub const MIN_YEAR: i32 = 1900;

/// Minimum allowed rating value.
pub const MIN_RATING: f64 = 0.0;

/// Maximum allowed rating value.
pub const MAX_RATING: f64 = 10.0;

/// Latest accepted release year: next year, so announced releases pass.
pub fn max_year() -> i32 {
    chrono::Utc::now().year() + 1
}

/* --------------------------------------------------------------------------
   Issue type
   -------------------------------------------------------------------------- */

/// A single field-level problem with a request body.
///
/// `field` names the offending body field; a body that is not a JSON object
/// at all is reported under the pseudo-field `body`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn non_object_issue() -> FieldIssue {
    FieldIssue::new("body", "Request body must be a JSON object")
}

/* --------------------------------------------------------------------------
   Entry points
   -------------------------------------------------------------------------- */

/// Validate a creation body: every schema field present and well-typed.
///
/// Returns the coerced payload, or every issue found. Unrecognized fields
/// (including `id`) are ignored.
pub fn validate_new_movie(body: &Value) -> Result<NewMovie, Vec<FieldIssue>> {
    let obj = match body.as_object() {
        Some(obj) => obj,
        None => return Err(vec![non_object_issue()]),
    };

    let mut issues = Vec::new();

    let title = require(obj, "title", &mut issues, |v| string_field(v, "title"));
    let year = require(obj, "year", &mut issues, year_field);
    let director = require(obj, "director", &mut issues, |v| {
        string_field(v, "director")
    });
    let duration = require(obj, "duration", &mut issues, duration_field);
    let rating = require(obj, "rating", &mut issues, rating_field);
    let genre = require(obj, "genre", &mut issues, genre_field);
    let poster = require(obj, "poster", &mut issues, poster_field);

    match (title, year, director, duration, rating, genre, poster) {
        (
            Some(title),
            Some(year),
            Some(director),
            Some(duration),
            Some(rating),
            Some(genre),
            Some(poster),
        ) if issues.is_empty() => Ok(NewMovie {
            title,
            year,
            director,
            duration,
            rating,
            genre,
            poster,
        }),
        _ => Err(issues),
    }
}

/// Validate a partial-update body: at least one recognized field, no
/// unrecognized fields, and never `id`.
pub fn validate_movie_patch(body: &Value) -> Result<MoviePatch, Vec<FieldIssue>> {
    let obj = match body.as_object() {
        Some(obj) => obj,
        None => return Err(vec![non_object_issue()]),
    };

    let mut issues = Vec::new();
    let mut patch = MoviePatch::default();

    for (key, value) in obj {
        match key.as_str() {
            "id" => issues.push(FieldIssue::new("id", "id cannot be modified")),
            "title" => patch.title = optional(value, &mut issues, |v| string_field(v, "title")),
            "year" => patch.year = optional(value, &mut issues, year_field),
            "director" => {
                patch.director = optional(value, &mut issues, |v| string_field(v, "director"))
            }
            "duration" => patch.duration = optional(value, &mut issues, duration_field),
            "rating" => patch.rating = optional(value, &mut issues, rating_field),
            "genre" => patch.genre = optional(value, &mut issues, genre_field),
            "poster" => patch.poster = optional(value, &mut issues, poster_field),
            _ => issues.push(FieldIssue::new(key, format!("Unrecognized field '{key}'"))),
        }
    }

    if patch.is_empty() && issues.is_empty() {
        issues.push(FieldIssue::new(
            "body",
            "At least one updatable field must be provided",
        ));
    }

    if issues.is_empty() {
        Ok(patch)
    } else {
        Err(issues)
    }
}

/// Validate an already-typed record.
///
/// Deserialization has already enforced field types and genre names; this
/// checks the value rules the body validators apply on the request path, so
/// a record that only ever existed as typed data (a seed record) meets the
/// same contract a POST body does.
pub fn validate_movie(movie: &Movie) -> Result<(), Vec<FieldIssue>> {
    let mut issues = Vec::new();

    if movie.title.trim().is_empty() {
        issues.push(FieldIssue::new("title", "title must be a non-empty string"));
    }
    if movie.year < MIN_YEAR || movie.year > max_year() {
        issues.push(FieldIssue::new(
            "year",
            format!("year must be between {MIN_YEAR} and {}", max_year()),
        ));
    }
    if movie.director.trim().is_empty() {
        issues.push(FieldIssue::new(
            "director",
            "director must be a non-empty string",
        ));
    }
    if movie.duration == 0 {
        issues.push(FieldIssue::new(
            "duration",
            "duration must be a positive integer (minutes)",
        ));
    }
    if !(MIN_RATING..=MAX_RATING).contains(&movie.rating) {
        issues.push(FieldIssue::new(
            "rating",
            format!("rating must be between {MIN_RATING} and {MAX_RATING}"),
        ));
    }
    if movie.genre.is_empty() {
        issues.push(FieldIssue::new("genre", "genre must not be empty"));
    }
    if Url::parse(&movie.poster).is_err() {
        issues.push(FieldIssue::new("poster", "poster must be a valid URL"));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/* --------------------------------------------------------------------------
   Field checks (shared by the body entry points)
   -------------------------------------------------------------------------- */

/// Look up a required field and run its check, recording an issue for a
/// missing (or explicit-null) field or a failed check.
fn require<T>(
    obj: &Map<String, Value>,
    field: &'static str,
    issues: &mut Vec<FieldIssue>,
    check: impl Fn(&Value) -> Result<T, FieldIssue>,
) -> Option<T> {
    match obj.get(field) {
        None | Some(Value::Null) => {
            issues.push(FieldIssue::new(field, format!("{field} is required")));
            None
        }
        Some(value) => match check(value) {
            Ok(parsed) => Some(parsed),
            Err(issue) => {
                issues.push(issue);
                None
            }
        },
    }
}

/// Run a check on a present optional field, recording an issue on failure.
fn optional<T>(
    value: &Value,
    issues: &mut Vec<FieldIssue>,
    check: impl Fn(&Value) -> Result<T, FieldIssue>,
) -> Option<T> {
    match check(value) {
        Ok(parsed) => Some(parsed),
        Err(issue) => {
            issues.push(issue);
            None
        }
    }
}

fn string_field(value: &Value, field: &'static str) -> Result<String, FieldIssue> {
    match value.as_str() {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        Some(_) => Err(FieldIssue::new(
            field,
            format!("{field} must be a non-empty string"),
        )),
        None => Err(FieldIssue::new(field, format!("{field} must be a string"))),
    }
}

fn year_field(value: &Value) -> Result<i32, FieldIssue> {
    let year = match value.as_i64() {
        Some(y) => y,
        None => return Err(FieldIssue::new("year", "year must be an integer")),
    };
    let max = i64::from(max_year());
    if year < i64::from(MIN_YEAR) || year > max {
        return Err(FieldIssue::new(
            "year",
            format!("year must be between {MIN_YEAR} and {max}"),
        ));
    }
    Ok(year as i32)
}

fn duration_field(value: &Value) -> Result<u32, FieldIssue> {
    match value.as_i64() {
        Some(d) if d >= 1 && d <= i64::from(u32::MAX) => Ok(d as u32),
        _ => Err(FieldIssue::new(
            "duration",
            "duration must be a positive integer (minutes)",
        )),
    }
}

fn rating_field(value: &Value) -> Result<f64, FieldIssue> {
    let rating = match value.as_f64() {
        Some(r) => r,
        None => return Err(FieldIssue::new("rating", "rating must be a number")),
    };
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(FieldIssue::new(
            "rating",
            format!("rating must be between {MIN_RATING} and {MAX_RATING}"),
        ));
    }
    Ok(rating)
}

/// Parse a genre array into the order-preserving set the record stores.
///
/// Entries must be exact canonical names; duplicates are coalesced keeping
/// the first occurrence.
fn genre_field(value: &Value) -> Result<Vec<Genre>, FieldIssue> {
    let items = match value.as_array() {
        Some(items) => items,
        None => {
            return Err(FieldIssue::new(
                "genre",
                "genre must be an array of genre names",
            ))
        }
    };
    if items.is_empty() {
        return Err(FieldIssue::new("genre", "genre must not be empty"));
    }

    let mut genres: Vec<Genre> = Vec::with_capacity(items.len());
    for item in items {
        let name = match item.as_str() {
            Some(name) => name,
            None => return Err(FieldIssue::new("genre", "genre entries must be strings")),
        };
        let parsed = match Genre::from_name(name) {
            Some(g) => g,
            None => {
                return Err(FieldIssue::new(
                    "genre",
                    format!(
                        "Invalid genre '{name}'. Must be one of: {}",
                        genre::canonical_names()
                    ),
                ))
            }
        };
        if !genres.contains(&parsed) {
            genres.push(parsed);
        }
    }
    Ok(genres)
}

fn poster_field(value: &Value) -> Result<String, FieldIssue> {
    let s = match value.as_str() {
        Some(s) => s,
        None => return Err(FieldIssue::new("poster", "poster must be a string")),
    };
    if Url::parse(s).is_err() {
        return Err(FieldIssue::new("poster", "poster must be a valid URL"));
    }
    Ok(s.to_string())
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
