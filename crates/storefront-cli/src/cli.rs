use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Page windows and search queries for the game storefront", long_about = None)]
#[command(version, long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")"))]
pub struct Cli {
    /// Path to a config file (or set STOREFRONT_CONFIG env var)
    #[arg(long, global = true, value_name = "FILE", env = "STOREFRONT_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the pagination control for a page
    Paginate(PaginateArgs),
    /// Build the search query string for a set of filters
    Query(QueryArgs),
    /// Page through results interactively
    Browse(BrowseArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Page count given directly or derived from a result count.
#[derive(Args)]
pub struct PageCountArgs {
    /// Total number of pages
    #[arg(long, conflicts_with = "count", required_unless_present = "count")]
    pub total: Option<usize>,
    /// Total number of results; pages are derived from --per-page
    #[arg(long)]
    pub count: Option<usize>,
    /// Results per page (defaults to the configured page size)
    #[arg(long)]
    pub per_page: Option<usize>,
}

#[derive(Args)]
pub struct PaginateArgs {
    /// Current page (1-based)
    #[arg(long, default_value_t = 1)]
    pub current: usize,
    #[command(flatten)]
    pub pages: PageCountArgs,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Default)]
pub struct FilterArgs {
    /// Free-text search term
    #[arg(long)]
    pub search: Option<String>,
    /// Category slug, or "all"
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub min_price: Option<u32>,
    #[arg(long)]
    pub max_price: Option<u32>,
    /// Tag to require (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// relevance, price-asc, price-desc, rating, newest or downloads
    #[arg(long)]
    pub sort_by: Option<String>,
}

#[derive(Args)]
pub struct QueryArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Results per page (defaults to the configured page size)
    #[arg(long)]
    pub limit: Option<usize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct BrowseArgs {
    /// Page to start on
    #[arg(long, default_value_t = 1)]
    pub current: usize,
    #[command(flatten)]
    pub pages: PageCountArgs,
    #[command(flatten)]
    pub filters: FilterArgs,
}
