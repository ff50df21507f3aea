use crate::components::PaginationView;
use crate::events::{should_quit, Event, EventHandler};
use crate::ui;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use storefront_core::PaginationConfig;
use storefront_domain::SearchResults;

/// Interactive pager over a results screen.
///
/// The app owns the results state and is the only thing that changes the
/// current page; the pagination view just reports what was clicked.
pub struct PagerApp {
    pub should_quit: bool,
    pub results: SearchResults,
    pub pagination: PaginationConfig,
    pub(crate) pagination_area: Rect,
}

impl PagerApp {
    pub fn new(results: SearchResults, pagination: PaginationConfig) -> Self {
        Self {
            should_quit: false,
            results,
            pagination,
            pagination_area: Rect::default(),
        }
    }

    /// The control for the current state, if the results span several pages.
    pub fn pagination_view(&self) -> Option<PaginationView> {
        self.results
            .page_request()
            .map(|request| PaginationView::new(request, &self.pagination))
    }

    /// Where the control was last drawn.
    pub fn pagination_area(&self) -> Rect {
        self.pagination_area
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if should_quit(&key) => self.should_quit = true,
            Event::Key(key) => {
                if let Some(view) = self.pagination_view() {
                    view.handle_key(key, &mut self.results);
                }
            }
            Event::Mouse(mouse) => {
                if let Some(view) = self.pagination_view() {
                    view.handle_mouse(mouse, self.pagination_area, &mut self.results);
                }
            }
            Event::Resize | Event::Tick => {}
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut terminal = setup_terminal()?;
        tracing::debug!(
            total_pages = self.results.total_pages(),
            "starting interactive pager"
        );

        let result = self.event_loop(&mut terminal);
        restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let events = EventHandler::default();
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;
            let event = events.next()?;
            self.handle_event(event);
        }
        Ok(())
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
