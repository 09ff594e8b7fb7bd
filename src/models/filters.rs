/// Filter state for the lawyer listing.
///
/// `Default` is the match-everything filter: empty query, toggles off,
/// no categories selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LawyerFilter {
    /// Free-text search, matched against name and specialty.
    pub query: String,
    /// Only records with the verified flag.
    pub verified_only: bool,
    /// Only records at or above the experience threshold.
    pub experienced_only: bool,
    /// Selected practice-area labels; empty means no category filtering.
    pub categories: Vec<String>,
}

impl LawyerFilter {
    /// Filter with a single category pre-selected, as when arriving from
    /// the home-page search.
    pub fn for_category(category: impl Into<String>) -> Self {
        Self {
            categories: vec![category.into()],
            ..Self::default()
        }
    }

    /// True when no predicate is active.
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty()
            && !self.verified_only
            && !self.experienced_only
            && self.categories.is_empty()
    }
}
