//! Lawyer directory — the dataset plus the filter engine over it.
//!
//! Filtering is the conjunction of four independent predicates (free-text,
//! verified toggle, experience toggle, category membership) applied as a
//! stable filter: output preserves dataset order, no re-sorting, no
//! pagination. The landing-URL helper derives the initial filter state
//! from a `category` query parameter.

use url::Url;

use crate::dataset;
use crate::models::{Lawyer, LawyerFilter};

/// Years of practice the "experienced only" toggle requires.
pub const EXPERIENCED_YEARS: u32 = 10;

/// The in-memory lawyer directory. Owns the immutable record list.
#[derive(Debug, Clone)]
pub struct Directory {
    lawyers: Vec<Lawyer>,
}

impl Directory {
    pub fn new(lawyers: Vec<Lawyer>) -> Self {
        Self { lawyers }
    }

    /// Directory over the built-in sample dataset.
    pub fn with_sample_data() -> Self {
        Self::new(dataset::sample_lawyers())
    }

    /// All records, in dataset order.
    pub fn lawyers(&self) -> &[Lawyer] {
        &self.lawyers
    }

    pub fn len(&self) -> usize {
        self.lawyers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lawyers.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: u32) -> Option<&Lawyer> {
        self.lawyers.iter().find(|l| l.id == id)
    }

    /// Apply the listing predicates, preserving dataset order.
    pub fn filter(&self, filter: &LawyerFilter) -> Vec<&Lawyer> {
        let query = filter.query.to_lowercase();
        self.lawyers
            .iter()
            .filter(|lawyer| matches(lawyer, filter, &query))
            .collect()
    }
}

/// Conjunction of the four listing predicates.
///
/// `query_lower` is the already-lowercased free-text query; an empty query
/// matches everything, as does an empty category set.
fn matches(lawyer: &Lawyer, filter: &LawyerFilter, query_lower: &str) -> bool {
    let matches_text = query_lower.is_empty()
        || lawyer.name.to_lowercase().contains(query_lower)
        || lawyer.specialty.to_lowercase().contains(query_lower);

    let matches_verified = !filter.verified_only || lawyer.verified;
    let matches_experience = !filter.experienced_only || lawyer.experience >= EXPERIENCED_YEARS;

    let matches_category =
        filter.categories.is_empty() || filter.categories.iter().any(|c| c == &lawyer.specialty);

    matches_text && matches_verified && matches_experience && matches_category
}

/// Derive the initial filter from the landing URL.
///
/// A `category` query parameter pre-selects exactly that category (first
/// occurrence wins, exact string match — an unknown category simply
/// matches nothing). Absent parameter, empty value, or no query at all
/// yields the match-everything filter. Accepts either a full URL or a bare
/// `path?query` fragment.
pub fn landing_filter(page_url: &str) -> LawyerFilter {
    let category = match Url::parse(page_url) {
        Ok(url) => url
            .query_pairs()
            .find(|(key, _)| key == "category")
            .map(|(_, value)| value.into_owned()),
        // Not an absolute URL: fall back to parsing the query part alone.
        Err(_) => page_url.split_once('?').and_then(|(_, query)| {
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == "category")
                .map(|(_, value)| value.into_owned())
        }),
    };

    match category {
        Some(value) if !value.is_empty() => {
            tracing::debug!(category = %value, "Pre-selecting category from landing URL");
            LawyerFilter::for_category(value)
        }
        _ => LawyerFilter::default(),
    }
}
