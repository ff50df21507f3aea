use crate::cli::{FilterArgs, PageCountArgs};
use std::path::Path;
use storefront_core::{total_pages_for, AppConfig, StorefrontError, StorefrontResult};
use storefront_domain::{FilterState, FilterUpdate, PriceRange, SortBy};

pub struct CliContext {
    pub config: AppConfig,
}

impl CliContext {
    /// An explicit config path must be readable; the default location is
    /// optional and falls back to built-in settings.
    pub fn load(config_path: Option<&str>) -> StorefrontResult<Self> {
        let config = match config_path {
            Some(path) => AppConfig::from_path(Path::new(path))?,
            None => AppConfig::load(),
        };
        Ok(Self { config })
    }

    pub fn per_page(&self, requested: Option<usize>) -> StorefrontResult<usize> {
        match requested.unwrap_or(self.config.results.items_per_page) {
            0 => Err(StorefrontError::InvalidPerPage),
            n => Ok(n),
        }
    }

    pub fn total_pages(&self, args: &PageCountArgs) -> StorefrontResult<usize> {
        match (args.total, args.count) {
            (Some(total), _) => Ok(total),
            (None, Some(count)) => total_pages_for(count, self.per_page(args.per_page)?),
            (None, None) => Err(StorefrontError::NoPages),
        }
    }

    /// Result count that spans the requested pages.
    pub fn total_count(&self, args: &PageCountArgs) -> StorefrontResult<usize> {
        match (args.count, args.total) {
            (Some(count), _) => Ok(count),
            (None, Some(total)) => {
                let per_page = self.per_page(args.per_page)?;
                total
                    .checked_mul(per_page)
                    .ok_or(StorefrontError::ResultCountOverflow { total, per_page })
            }
            (None, None) => Err(StorefrontError::NoPages),
        }
    }

    pub fn filters(&self, args: &FilterArgs) -> StorefrontResult<FilterState> {
        let defaults = PriceRange::default();
        let price_range = match (args.min_price, args.max_price) {
            (None, None) => None,
            (min, max) => Some(PriceRange::new(
                min.unwrap_or(defaults.min()),
                max.unwrap_or(defaults.max()),
            )?),
        };
        let sort_by = args
            .sort_by
            .as_deref()
            .map(str::parse::<SortBy>)
            .transpose()?;

        let mut filters = FilterState::default();
        filters.apply(FilterUpdate {
            search_term: args.search.clone(),
            category: args.category.clone(),
            price_range,
            selected_tags: (!args.tags.is_empty()).then(|| args.tags.clone()),
            sort_by,
        });
        Ok(filters)
    }
}
