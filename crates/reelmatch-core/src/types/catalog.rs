//! The assembled movie catalog.

use std::collections::HashMap;

use super::{Movie, TitleId};

/// Ordered collection of catalog movies with lookup by title id.
///
/// Order is significant: neighbour indices and tie-breaking both refer to
/// positions in this list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
    by_id: HashMap<TitleId, usize>,
}

impl Catalog {
    /// Creates a catalog from movies in their dataset order.
    ///
    /// When an id repeats, lookups resolve to its first position.
    pub fn new(movies: Vec<Movie>) -> Self {
        let mut by_id = HashMap::with_capacity(movies.len());
        for (i, movie) in movies.iter().enumerate() {
            by_id.entry(movie.id.clone()).or_insert(i);
        }
        Self { movies, by_id }
    }

    /// All movies in catalog order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Movie at a catalog position.
    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    /// Movie by title id.
    pub fn find(&self, id: &TitleId) -> Option<&Movie> {
        self.by_id.get(id).map(|&i| &self.movies[i])
    }

    /// Number of movies.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Returns whether the catalog has no movies.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new(vec![
            Movie::new("tt0000001", "Uno", "Drama", 100),
            Movie::new("tt0000002", "Dos", "Comedy", 90),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find(&TitleId::new("tt0000002")).unwrap().title, "Dos");
        assert!(catalog.find(&TitleId::new("tt9999999")).is_none());
        assert_eq!(catalog.get(0).unwrap().title, "Uno");
    }

    #[test]
    fn test_catalog_duplicate_ids_resolve_to_first() {
        let catalog = Catalog::new(vec![
            Movie::new("tt0000001", "First", "Drama", 100),
            Movie::new("tt0000001", "Second", "Drama", 100),
        ]);
        assert_eq!(catalog.find(&TitleId::new("tt0000001")).unwrap().title, "First");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
    }
}
