use crate::cli::BrowseArgs;
use crate::context::CliContext;
use storefront_domain::SearchResults;
use storefront_tui::PagerApp;

pub fn handle(ctx: &CliContext, args: BrowseArgs) -> anyhow::Result<()> {
    let per_page = ctx.per_page(args.pages.per_page)?;
    let mut results = SearchResults::new(per_page)?.with_filters(ctx.filters(&args.filters)?);
    results.set_total_count(ctx.total_count(&args.pages)?);
    results.go_to(args.current)?;

    let mut app = PagerApp::new(results, ctx.config.pagination.clone());
    app.run()?;

    tracing::info!("Left pager on page {}", app.results.current_page());
    Ok(())
}
