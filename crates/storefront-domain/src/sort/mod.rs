//! Result ordering options offered by the storefront.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use storefront_core::StorefrontError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    Rating,
    Newest,
    Downloads,
}

impl SortBy {
    pub const ALL: [SortBy; 6] = [
        SortBy::Relevance,
        SortBy::PriceAsc,
        SortBy::PriceDesc,
        SortBy::Rating,
        SortBy::Newest,
        SortBy::Downloads,
    ];

    /// Value sent to the search endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::PriceAsc => "price-asc",
            SortBy::PriceDesc => "price-desc",
            SortBy::Rating => "rating",
            SortBy::Newest => "newest",
            SortBy::Downloads => "downloads",
        }
    }

    /// Label shown in the storefront's sort selector.
    pub fn label(self) -> &'static str {
        match self {
            SortBy::Relevance => "الأكثر صلة",
            SortBy::PriceAsc => "السعر: من الأقل إلى الأعلى",
            SortBy::PriceDesc => "السعر: من الأعلى إلى الأقل",
            SortBy::Rating => "التقييم",
            SortBy::Newest => "الأحدث",
            SortBy::Downloads => "الأكثر تحميلاً",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| StorefrontError::UnknownSortOption(s.to_string()))
    }
}
