//! TUI application: main loop
//!
//! Architecture:
//! ```text
//! ChatApp (select! loop)                request task (tokio::spawn, one per Enter)
//!   ├─ crossterm EventStream              └─ use_case.execute(request)
//!   ├─ event_rx (AppEvent)  <──────────────── event_tx.send(RequestCompleted)
//!   └─ tick_interval
//! ```
//!
//! Requests never block the loop. Each Enter spawns its own task and the
//! results are applied in the order they come back.

use super::event::AppEvent;
use super::keys::{KeyAction, map_key};
use super::state::TuiState;
use super::widgets::{
    MainLayout, alert::AlertWidget, header::HeaderWidget, history::HistoryWidget,
    input::InputWidget, status_bar::StatusBarWidget,
};
use crate::config::ChatViewConfig;
use crossterm::{
    event::{Event, EventStream, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use qachat_application::SubmitQueryUseCase;
use qachat_domain::{AskRequest, ChatState};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// Interactive chat view
pub struct ChatApp {
    use_case: SubmitQueryUseCase,
    config: ChatViewConfig,

    // -- Completion channel (request tasks → loop) --
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,

    // -- Submission counter, for log correlation --
    next_seq: u64,
}

impl ChatApp {
    pub fn new(use_case: SubmitQueryUseCase, config: ChatViewConfig) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            use_case,
            config,
            event_tx,
            event_rx,
            next_seq: 0,
        }
    }

    /// Run the TUI until the user quits and return the final chat state.
    pub async fn run(&mut self, initial: ChatState) -> io::Result<ChatState> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = TuiState::new(initial);
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.config.tick);

        info!("Chat view started");

        let result = loop {
            let area = match terminal.draw(|frame| render(frame, &state, &self.config)) {
                Ok(frame) => frame.area,
                Err(e) => break Err(e),
            };
            let history_area = MainLayout::compute(area).history;
            state.set_max_scroll(HistoryWidget::max_scroll(state.chat.history(), history_area));

            if state.should_quit {
                break Ok(());
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) => self.handle_key(&mut state, key),
                        Some(Ok(_)) => {}
                        Some(Err(e)) => break Err(e),
                        None => state.should_quit = true,
                    }
                }

                // Completed requests
                Some(app_event) = self.event_rx.recv() => {
                    self.apply_event(&mut state, app_event);
                }

                // Periodic redraw
                _ = tick.tick() => {}
            }
        };

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        info!("Chat view closed");
        result.map(|()| state.chat)
    }

    /// Apply one key press to the state, spawning a request on Enter.
    pub fn handle_key(&mut self, state: &mut TuiState, key: KeyEvent) {
        match map_key(key, state.alert.is_some()) {
            KeyAction::Submit => {
                if let Some(request) = state.take_submission() {
                    self.spawn_request(request);
                }
            }
            KeyAction::InsertChar(c) => state.insert_char(c),
            KeyAction::DeleteBack => state.delete_char(),
            KeyAction::DeleteForward => state.delete_char_forward(),
            KeyAction::CursorLeft => state.cursor_left(),
            KeyAction::CursorRight => state.cursor_right(),
            KeyAction::CursorHome => state.cursor_home(),
            KeyAction::CursorEnd => state.cursor_end(),
            KeyAction::ScrollUp => state.scroll_up(),
            KeyAction::ScrollDown => state.scroll_down(),
            KeyAction::DismissAlert => state.dismiss_alert(),
            KeyAction::Quit => state.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// Apply an event delivered by a request task.
    pub fn apply_event(&self, state: &mut TuiState, event: AppEvent) {
        match event {
            AppEvent::RequestCompleted { seq, result } => {
                match &result {
                    Ok(response) => debug!(
                        "Request #{} completed with {} history entries",
                        seq,
                        response.history.len()
                    ),
                    Err(e) => error!("Request #{} failed: {}", seq, e),
                }
                state.apply_result(result);
            }
        }
    }

    fn spawn_request(&mut self, request: AskRequest) {
        self.next_seq += 1;
        let seq = self.next_seq;
        let use_case = self.use_case.clone();
        let tx = self.event_tx.clone();

        debug!("Spawning request #{}", seq);
        tokio::spawn(async move {
            let result = use_case.execute(request).await;
            // Receiver is gone only once the app has shut down
            let _ = tx.send(AppEvent::RequestCompleted { seq, result });
        });
    }

    /// Wait for the next event from a request task.
    #[cfg(test)]
    async fn next_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }
}

/// Draw the whole chat view
pub fn render(frame: &mut Frame, state: &TuiState, config: &ChatViewConfig) {
    let layout = MainLayout::compute(frame.area());

    frame.render_widget(HeaderWidget::new(&config.title), layout.header);
    frame.render_widget(
        HistoryWidget::new(state.chat.history(), state.scroll_offset),
        layout.history,
    );
    frame.render_widget(
        InputWidget::new(
            state.chat.input(),
            state.clamped_cursor(),
            &config.placeholder,
        )
        .active(state.alert.is_none()),
        layout.input,
    );
    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

    if let Some(message) = &state.alert {
        frame.render_widget(AlertWidget::new(message), AlertWidget::area(frame.area()));
    }
}
