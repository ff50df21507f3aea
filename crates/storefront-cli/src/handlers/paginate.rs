use crate::cli::{OutputFormat, PaginateArgs};
use crate::context::CliContext;
use crate::output;
use serde::Serialize;
use storefront_core::{Control, ControlItem, PageRequest, PageWindow};

#[derive(Serialize)]
struct PaginationOutput {
    current: usize,
    total: usize,
    has_previous: bool,
    has_next: bool,
    window: PageWindow,
    controls: Vec<ControlItem>,
}

pub fn handle(ctx: &CliContext, args: PaginateArgs) -> anyhow::Result<()> {
    let total = ctx.total_pages(&args.pages)?;
    let request = PageRequest::new(args.current, total)?;
    tracing::debug!(current = request.current(), total, "rendering pagination");

    match args.format {
        OutputFormat::Text => {
            println!("{}", render_text(&request, ctx));
        }
        OutputFormat::Json => {
            output::output_success(PaginationOutput {
                current: request.current(),
                total: request.total(),
                has_previous: request.has_previous(),
                has_next: request.has_next(),
                window: request.window(),
                controls: request.controls(),
            })?;
        }
    }
    Ok(())
}

/// One line of text: active page in brackets, disabled buttons in parentheses.
pub fn render_text(request: &PageRequest, ctx: &CliContext) -> String {
    let labels = &ctx.config.pagination;
    request
        .controls()
        .iter()
        .map(|item| {
            let text = match item.control {
                Control::Previous => labels.effective_previous_label().to_string(),
                Control::Next => labels.effective_next_label().to_string(),
                Control::Ellipsis => labels.effective_ellipsis().to_string(),
                Control::Page(n) => n.to_string(),
            };
            if item.active {
                format!("[{text}]")
            } else if item.disabled {
                format!("({text})")
            } else {
                text
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
