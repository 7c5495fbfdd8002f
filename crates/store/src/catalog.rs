//! In-memory movie collection shared across request handlers.

use cinelist_core::movie::{Movie, MoviePatch, NewMovie};
use cinelist_core::types::MovieId;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Holds every movie the service knows about.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. Reads take a shared lock, the three write
/// operations take an exclusive one, so lookups never observe a half-applied
/// change.
pub struct MovieCatalog {
    movies: RwLock<Vec<Movie>>,
}

impl MovieCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            movies: RwLock::new(Vec::new()),
        }
    }

    /// Create a catalog pre-filled with the given movies, preserving order.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    /// Return every movie in insertion order.
    pub async fn list(&self) -> Vec<Movie> {
        self.movies.read().await.clone()
    }

    /// Return every movie tagged with the named genre.
    ///
    /// The name is matched case-insensitively against canonical genre names;
    /// an unknown name simply matches nothing.
    pub async fn list_by_genre(&self, name: &str) -> Vec<Movie> {
        self.movies
            .read()
            .await
            .iter()
            .filter(|movie| movie.has_genre(name))
            .cloned()
            .collect()
    }

    /// Look up a single movie by ID.
    pub async fn find(&self, id: MovieId) -> Option<Movie> {
        self.movies
            .read()
            .await
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
    }

    /// Add a new movie, assigning it a fresh random ID.
    ///
    /// Returns the stored record, ID included.
    pub async fn insert(&self, new: NewMovie) -> Movie {
        let movie = new.into_movie(Uuid::new_v4());
        self.movies.write().await.push(movie.clone());
        tracing::debug!(id = %movie.id, title = %movie.title, "Added movie to catalog");
        movie
    }

    /// Merge a validated patch into the movie with the given ID.
    ///
    /// Returns the full updated record, or `None` if no such movie exists.
    /// The patch is applied while the exclusive lock is held, so concurrent
    /// readers see either the old record or the fully patched one.
    pub async fn update(&self, id: MovieId, patch: MoviePatch) -> Option<Movie> {
        let mut movies = self.movies.write().await;
        let movie = movies.iter_mut().find(|movie| movie.id == id)?;
        movie.apply_patch(patch);
        tracing::debug!(%id, "Updated movie");
        Some(movie.clone())
    }

    /// Delete the movie with the given ID.
    ///
    /// Returns `true` if a record was removed.
    pub async fn remove(&self, id: MovieId) -> bool {
        let mut movies = self.movies.write().await;
        let before = movies.len();
        movies.retain(|movie| movie.id != id);
        let removed = movies.len() < before;
        if removed {
            tracing::debug!(%id, "Removed movie from catalog");
        }
        removed
    }

    /// Return the current number of movies.
    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    /// Return `true` if the catalog holds no movies.
    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

impl Default for MovieCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinelist_core::genre::Genre;

    fn sample(title: &str, genre: Vec<Genre>) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            year: 1999,
            director: "Someone".to_string(),
            duration: 120,
            rating: 7.5,
            genre,
            poster: "https://example.com/poster.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn starts_empty() {
        let catalog = MovieCatalog::new();
        assert!(catalog.is_empty().await);
        assert!(catalog.list().await.is_empty());
    }

    #[tokio::test]
    async fn insert_assigns_unique_ids_and_persists() {
        let catalog = MovieCatalog::new();
        let a = catalog.insert(sample("A", vec![Genre::Drama])).await;
        let b = catalog.insert(sample("B", vec![Genre::Drama])).await;

        assert_ne!(a.id, b.id);
        assert_eq!(catalog.len().await, 2);
        assert_eq!(catalog.find(a.id).await.as_ref().map(|m| m.title.as_str()), Some("A"));
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let catalog = MovieCatalog::new();
        catalog.insert(sample("First", vec![Genre::Action])).await;
        catalog.insert(sample("Second", vec![Genre::Action])).await;
        catalog.insert(sample("Third", vec![Genre::Action])).await;

        let titles: Vec<String> = catalog.list().await.into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn find_misses_unknown_id() {
        let catalog = MovieCatalog::new();
        catalog.insert(sample("A", vec![Genre::Drama])).await;
        assert!(catalog.find(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn filters_by_genre_case_insensitively() {
        let catalog = MovieCatalog::new();
        catalog
            .insert(sample("Alien", vec![Genre::Horror, Genre::SciFi]))
            .await;
        catalog.insert(sample("Heat", vec![Genre::Crime])).await;

        let hits = catalog.list_by_genre("sci-fi").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Alien");

        assert!(catalog.list_by_genre("Western").await.is_empty());
    }

    #[tokio::test]
    async fn update_merges_patch_and_persists() {
        let catalog = MovieCatalog::new();
        let movie = catalog.insert(sample("Alien", vec![Genre::Horror])).await;

        let patch = MoviePatch {
            year: Some(1979),
            rating: Some(8.5),
            ..MoviePatch::default()
        };
        let updated = catalog.update(movie.id, patch).await.unwrap();

        assert_eq!(updated.year, 1979);
        assert_eq!(updated.rating, 8.5);
        assert_eq!(updated.title, "Alien");

        let reread = catalog.find(movie.id).await.unwrap();
        assert_eq!(reread, updated);
    }

    #[tokio::test]
    async fn update_misses_unknown_id() {
        let catalog = MovieCatalog::new();
        let patch = MoviePatch {
            year: Some(2000),
            ..MoviePatch::default()
        };
        assert!(catalog.update(Uuid::new_v4(), patch).await.is_none());
    }

    #[tokio::test]
    async fn remove_deletes_exactly_once() {
        let catalog = MovieCatalog::new();
        let movie = catalog.insert(sample("A", vec![Genre::Drama])).await;

        assert!(catalog.remove(movie.id).await);
        assert!(catalog.find(movie.id).await.is_none());
        assert!(catalog.is_empty().await);

        assert!(!catalog.remove(movie.id).await);
    }
}
