//! The fixed fashion vocabulary and the pipeline's sizing constants.

/// Topic vocabulary. Posts are searched for any of these terms and the
/// trend report only counts tokens that match one of them exactly.
pub const FASHION_KEYWORDS: [&str; 24] = [
    "fashion",
    "style",
    "trend",
    "outfit",
    "clothes",
    "wear",
    "dress",
    "shoes",
    "accessories",
    "designer",
    "collection",
    "runway",
    "model",
    "brand",
    "luxury",
    "vintage",
    "sustainable",
    "couture",
    "vogue",
    "chic",
    "elegant",
    "glamour",
    "fashionweek",
    "streetwear",
];

/// Maximum number of posts requested from the search API per collection run.
pub const SEARCH_BATCH_SIZE: u32 = 100;

/// Language filter passed to the search API.
pub const SEARCH_LANGUAGE: &str = "en";

/// Number of most recent posts the trend analysis reads.
pub const ANALYSIS_WINDOW: i64 = 1000;

/// Length cap for the top-terms and top-hashtags lists.
pub const TOP_N: usize = 10;

/// Build the search query: every keyword joined with ` OR `.
#[must_use]
pub fn search_query() -> String {
    FASHION_KEYWORDS.join(" OR ")
}

/// Returns `true` if `token` is one of the vocabulary terms.
#[must_use]
pub fn is_fashion_keyword(token: &str) -> bool {
    FASHION_KEYWORDS.contains(&token)
}
