use crate::app::PagerApp;
use crate::theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(app: &mut PagerApp, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    render_summary(app, frame, chunks[0]);
    render_footer(app, frame, chunks[1]);
}

fn render_summary(app: &PagerApp, frame: &mut Frame, area: Rect) {
    let results = &app.results;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border())
        .title(Span::styled(" Game search ", theme::title()));

    let mut lines = vec![Line::from(showing_line(
        results.current_page(),
        results.items_per_page(),
        results.total_count(),
    ))];
    lines.push(Line::from(format!(
        "Page {} of {}",
        results.current_page(),
        results.total_pages().max(1)
    )));
    match results.query().to_query_string() {
        Ok(query) => lines.push(Line::from(vec![
            Span::styled("Query: ", theme::label_text()),
            Span::raw(query),
        ])),
        Err(e) => tracing::warn!("Could not encode search query: {}", e),
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "←/→ page  Home/End first/last  click a page  q quit",
        theme::label_text(),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_footer(app: &mut PagerApp, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.pagination_area = inner;
    match app.pagination_view() {
        Some(view) => frame.render_widget(&view, inner),
        None => frame.render_widget(
            Paragraph::new("All results fit on one page")
                .style(theme::label_text())
                .alignment(Alignment::Center),
            inner,
        ),
    }
}

/// "Showing games 13–24 of 130", or a notice when nothing matched.
pub fn showing_line(current_page: usize, per_page: usize, total_count: usize) -> String {
    if total_count == 0 {
        return "No games match these filters".to_string();
    }
    let first = current_page
        .saturating_sub(1)
        .saturating_mul(per_page)
        .saturating_add(1);
    let last = current_page.saturating_mul(per_page).min(total_count);
    format!("Showing games {first}–{last} of {total_count}")
}
