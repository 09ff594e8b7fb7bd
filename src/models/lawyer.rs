use serde::{Deserialize, Serialize};

/// One entry in a lawyer's education history. Display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub year: u32,
}

/// A lawyer record as listed on the directory page.
///
/// Records are built once at load and never mutated; `id` is unique within
/// the dataset. Serialized camelCase to match the page's data shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lawyer {
    pub id: u32,
    pub name: String,
    pub image: String,
    /// 0.0–5.0, as displayed next to the review count.
    pub rating: f64,
    pub review_count: u32,
    /// Practice-area label; doubles as the category filter key.
    pub specialty: String,
    /// Free-form "City, State".
    pub location: String,
    /// Years of practice.
    pub experience: u32,
    /// Hourly rate, currency-unit-less.
    pub price: u32,
    pub verified: bool,
    pub education: Vec<Education>,
}
