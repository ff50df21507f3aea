use crate::cli::{OutputFormat, QueryArgs};
use crate::context::CliContext;
use crate::output;
use serde::Serialize;
use storefront_domain::SearchQuery;

#[derive(Serialize)]
struct QueryOutput {
    query: String,
    params: Vec<(&'static str, String)>,
}

pub fn handle(ctx: &CliContext, args: QueryArgs) -> anyhow::Result<()> {
    if args.page == 0 {
        anyhow::bail!("--page must be at least 1");
    }
    let filters = ctx.filters(&args.filters)?;
    let limit = ctx.per_page(args.limit)?;
    let query = SearchQuery::new(filters, args.page, limit);
    let encoded = query.to_query_string()?;

    match args.format {
        OutputFormat::Text => println!("{}", encoded),
        OutputFormat::Json => output::output_success(QueryOutput {
            query: encoded,
            params: query.params(),
        })?,
    }
    Ok(())
}
