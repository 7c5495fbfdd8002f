//! Startup loading of the movie seed file.
//!
//! The seed file is a JSON array of complete movie records. It is read once
//! at boot to fill the catalog; the service never writes it back.

use std::collections::HashSet;
use std::path::Path;

use cinelist_core::movie::Movie;
use cinelist_core::types::MovieId;
use cinelist_core::validate;

/// Errors raised while loading a seed file.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid seed record {id}: {reason}")]
    Invalid { id: MovieId, reason: String },

    #[error("duplicate movie id in seed file: {id}")]
    DuplicateId { id: MovieId },
}

/// Read and parse a movie seed file.
///
/// Every record must be complete, well-formed, and within the value rules
/// the write endpoints enforce, and ids must be unique. A single bad record
/// fails the whole load so the service never starts with a partial catalog.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<Movie>, SeedError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let movies: Vec<Movie> = serde_json::from_str(&raw)?;
    check_records(&movies)?;
    tracing::debug!(count = movies.len(), path = %path.display(), "Loaded movie seed file");
    Ok(movies)
}

/// Reject records that deserialize cleanly but break the domain rules, and
/// ids that appear more than once.
fn check_records(movies: &[Movie]) -> Result<(), SeedError> {
    let mut seen = HashSet::with_capacity(movies.len());
    for movie in movies {
        if let Err(issues) = validate::validate_movie(movie) {
            let reason = issues
                .iter()
                .map(|issue| issue.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(SeedError::Invalid {
                id: movie.id,
                reason,
            });
        }
        if !seen.insert(movie.id) {
            return Err(SeedError::DuplicateId { id: movie.id });
        }
    }
    Ok(())
}
