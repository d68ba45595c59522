//! TUI application: main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                  request task (tokio::spawn)
//!   ├─ crossterm EventStream               └─ PendingRequest::send()
//!   ├─ outcome_rx (RequestOutcome)  <──────────── outcome_tx
//!   └─ tick_interval (spinner, flash expiry)
//! ```
//!
//! The loop owns the [`TuiState`] and with it the session; requests run on
//! their own task and report back over the channel, where the session's
//! ticket check drops anything superseded.

use super::keys::handle_key_event;
use super::state::TuiState;
use super::widgets::{
    MainLayout, header::HeaderWidget, input::InputWidget, results::ResultsWidget,
    status_bar::StatusBarWidget,
};
use crate::view::ResultsView;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use panel_application::{ComparisonSession, PendingRequest, RequestOutcome};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Main TUI application
pub struct TuiApp {
    state: TuiState,
    outcome_tx: mpsc::UnboundedSender<RequestOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<RequestOutcome>,
    tick_rate: Duration,
}

impl TuiApp {
    pub fn new(session: ComparisonSession) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: TuiState::new(session),
            outcome_tx,
            outcome_rx,
            tick_rate: Duration::from_millis(120),
        }
    }

    /// Interval for spinner animation and flash expiry
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Run the TUI main loop until the user quits
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
            original_hook(info);
        }));

        info!("TUI started (endpoint {})", self.state.session.endpoint());
        let result = self.event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;

        info!("TUI stopped");
        result
    }

    async fn event_loop(&mut self, terminal: &mut CrosstermTerminal) -> io::Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.tick_rate);

        loop {
            // Render
            let mut max_scroll = 0;
            terminal.draw(|frame| {
                max_scroll = Self::render(frame, &self.state);
            })?;
            self.state.clamp_scroll(max_scroll);

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(term_event);
                }

                // Finished requests
                Some(outcome) = self.outcome_rx.recv() => {
                    self.state.apply_outcome(outcome);
                }

                // Tick for spinner animation and flash expiry
                _ = tick.tick() => {
                    self.state.tick();
                }
            }
        }

        Ok(())
    }

    /// Render all widgets; returns the largest useful results scroll offset
    fn render(frame: &mut ratatui::Frame, state: &TuiState) -> u16 {
        let layout = MainLayout::compute(frame.area(), state.input_rows());
        let view = ResultsView::from_state(state.session.state());

        let max_scroll = ResultsWidget::new(&view, 0, 0).max_scroll(layout.results);
        let scroll = state.scroll_offset.min(max_scroll);

        frame.render_widget(HeaderWidget::new(state), layout.header);
        frame.render_widget(
            ResultsWidget::new(&view, scroll, state.spinner_frame),
            layout.results,
        );
        frame.render_widget(InputWidget::new(state), layout.input);
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

        max_scroll
    }

    /// Handle a terminal (crossterm) event
    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                let action = handle_key_event(key);
                if let Some(pending) = self.state.apply_action(action) {
                    self.dispatch(pending);
                }
            }
            Event::Paste(text) => self.state.insert_paste(&text),
            // Terminal auto-resizes on next draw
            _ => {}
        }
    }

    /// Run a request on its own task and route the outcome back to the loop
    fn dispatch(&self, pending: PendingRequest) {
        debug!("Dispatching request {}", pending.ticket());
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = pending.send().await;
            // The receiver only goes away when the TUI exits
            let _ = tx.send(outcome);
        });
    }
}
