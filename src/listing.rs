//! Listing page data layer — immutable view models derived from the
//! directory.
//!
//! `build_listing` is a pure, total mapping from an ordered record list to
//! the view the page shows; `load_listing` is the initial page load, which
//! also applies any landing-URL category. Rendering the view to markup is
//! a separate concern (`markup`).

use serde::{Deserialize, Serialize};

use crate::directory::{self, Directory};
use crate::models::{Lawyer, LawyerFilter};

/// Message shown when no record survives filtering.
pub const EMPTY_MESSAGE: &str = "No lawyers found matching your criteria.";

/// One education line on a card: school plus a "degree | year" detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationLine {
    pub school: String,
    pub detail: String,
}

/// View model for one lawyer card.
///
/// Carries everything the card shows, pre-formatted, plus the record id
/// the send-request and view-profile actions are keyed by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LawyerCard {
    pub lawyer_id: u32,
    pub name: String,
    pub image: String,
    pub rating: f64,
    pub review_count: u32,
    pub verified_badge: bool,
    pub specialty: String,
    /// "City, State • N Yrs Exp."
    pub location_line: String,
    /// "₹N/hr"
    pub price_line: String,
    pub education: Vec<EducationLine>,
}

/// The listing view: either the empty state or a count line plus cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListingView {
    Empty {
        message: String,
    },
    Results {
        /// "Found N lawyers"
        count_line: String,
        cards: Vec<LawyerCard>,
    },
}

impl ListingView {
    pub fn card_count(&self) -> usize {
        match self {
            ListingView::Empty { .. } => 0,
            ListingView::Results { cards, .. } => cards.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ListingView::Empty { .. })
    }
}

fn build_card(lawyer: &Lawyer) -> LawyerCard {
    LawyerCard {
        lawyer_id: lawyer.id,
        name: lawyer.name.clone(),
        image: lawyer.image.clone(),
        rating: lawyer.rating,
        review_count: lawyer.review_count,
        verified_badge: lawyer.verified,
        specialty: lawyer.specialty.clone(),
        location_line: format!("{} • {} Yrs Exp.", lawyer.location, lawyer.experience),
        price_line: format!("₹{}/hr", lawyer.price),
        education: lawyer
            .education
            .iter()
            .map(|e| EducationLine {
                school: e.school.clone(),
                detail: format!("{} | {}", e.degree, e.year),
            })
            .collect(),
    }
}

/// Pure mapping from an ordered record list to the listing view.
pub fn build_listing(lawyers: &[&Lawyer]) -> ListingView {
    if lawyers.is_empty() {
        return ListingView::Empty {
            message: EMPTY_MESSAGE.to_string(),
        };
    }
    ListingView::Results {
        count_line: format!("Found {} lawyers", lawyers.len()),
        cards: lawyers.iter().map(|l| build_card(l)).collect(),
    }
}

/// Re-derive the view for the current filter state.
pub fn render_filtered(directory: &Directory, filter: &LawyerFilter) -> ListingView {
    build_listing(&directory.filter(filter))
}

/// Initial page load: apply any landing-URL category, then build the view.
pub fn load_listing(directory: &Directory, page_url: &str) -> ListingView {
    let filter = directory::landing_filter(page_url);
    render_filtered(directory, &filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Directory {
        Directory::with_sample_data()
    }

    // ── build_listing ────────────────────────────────────

    #[test]
    fn zero_records_render_empty_state_only() {
        let view = build_listing(&[]);
        assert!(view.is_empty());
        assert_eq!(view.card_count(), 0);
        match view {
            ListingView::Empty { message } => assert_eq!(message, EMPTY_MESSAGE),
            other => panic!("Expected empty state, got: {other:?}"),
        }
    }

    #[test]
    fn full_dataset_renders_count_line_and_six_cards() {
        let dir = directory();
        let records = dir.filter(&LawyerFilter::default());
        let view = build_listing(&records);

        match &view {
            ListingView::Results { count_line, cards } => {
                assert_eq!(count_line, "Found 6 lawyers");
                assert_eq!(cards.len(), 6);
                let ids: Vec<u32> = cards.iter().map(|c| c.lawyer_id).collect();
                assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
            }
            other => panic!("Expected results, got: {other:?}"),
        }
    }

    #[test]
    fn card_formats_display_lines() {
        let dir = directory();
        let records = dir.filter(&LawyerFilter::default());
        let view = build_listing(&records);

        let ListingView::Results { cards, .. } = view else {
            panic!("Expected results");
        };
        let sarah = &cards[0];
        assert_eq!(sarah.name, "Sarah Jenkins, Esq.");
        assert!(sarah.verified_badge);
        assert_eq!(sarah.location_line, "Chicago, IL • 15 Yrs Exp.");
        assert_eq!(sarah.price_line, "₹350/hr");
        assert_eq!(sarah.education.len(), 2);
        assert_eq!(sarah.education[0].school, "Harvard Law School");
        assert_eq!(sarah.education[0].detail, "J.D. | 2008");

        let maria = &cards[2];
        assert!(!maria.verified_badge, "Unverified record shows no badge");
    }

    // ── load_listing ─────────────────────────────────────

    #[test]
    fn load_without_parameters_shows_all() {
        let view = load_listing(&directory(), "http://localhost:8000/lawyers.html");
        assert_eq!(view.card_count(), 6);
    }

    #[test]
    fn load_with_category_filters_listing() {
        let view = load_listing(
            &directory(),
            "http://localhost:8000/lawyers.html?category=Family%20Law",
        );
        match view {
            ListingView::Results { count_line, cards } => {
                assert_eq!(count_line, "Found 2 lawyers");
                let ids: Vec<u32> = cards.iter().map(|c| c.lawyer_id).collect();
                assert_eq!(ids, vec![1, 5]);
            }
            other => panic!("Expected results, got: {other:?}"),
        }
    }

    #[test]
    fn load_with_unknown_category_shows_empty_state() {
        let view = load_listing(
            &directory(),
            "http://localhost:8000/lawyers.html?category=Space%20Law",
        );
        assert!(view.is_empty());
        assert_eq!(view.card_count(), 0);
    }

    #[test]
    fn single_result_still_reads_found_n_lawyers() {
        let dir = directory();
        let filter = LawyerFilter {
            query: "langdon".to_string(),
            ..LawyerFilter::default()
        };
        let view = render_filtered(&dir, &filter);
        match view {
            ListingView::Results { count_line, cards } => {
                assert_eq!(count_line, "Found 1 lawyers");
                assert_eq!(cards.len(), 1);
            }
            other => panic!("Expected results, got: {other:?}"),
        }
    }
}
