//! Cache-representation models.
//!
//! Mirror images of the domain types used at the store boundary, so the
//! orchestrator never hands domain values directly to a store and the two
//! sides can evolve independently.

use crate::models::feed::{Movie, MoviesPage};

// == Cache Movie ==
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheMovie {
    pub id: u64,
    pub title: String,
}

// == Cache Movies Page ==
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheMoviesPage {
    pub page: u32,
    pub results: Vec<CacheMovie>,
    pub total_results: u32,
    pub total_pages: u32,
}

// == Domain Conversions ==
impl From<&MoviesPage> for CacheMoviesPage {
    fn from(page: &MoviesPage) -> Self {
        Self {
            page: page.page,
            results: page
                .results
                .iter()
                .map(|movie| CacheMovie {
                    id: movie.id,
                    title: movie.title.clone(),
                })
                .collect(),
            total_results: page.total_results,
            total_pages: page.total_pages,
        }
    }
}

impl From<CacheMoviesPage> for MoviesPage {
    fn from(page: CacheMoviesPage) -> Self {
        Self {
            page: page.page,
            results: page
                .results
                .into_iter()
                .map(|movie| Movie {
                    id: movie.id,
                    title: movie.title,
                })
                .collect(),
            total_results: page.total_results,
            total_pages: page.total_pages,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_to_cache_and_back() {
        let page = MoviesPage::new(
            3,
            vec![Movie::new(1, "First"), Movie::new(2, "Second")],
            42,
            5,
        );

        let cached = CacheMoviesPage::from(&page);
        assert_eq!(cached.results.len(), 2);
        assert_eq!(cached.results[0].title, "First");

        let restored: MoviesPage = cached.into();
        assert_eq!(restored, page);
    }
}
