//! TUI application state
//!
//! Single source of truth for everything the TUI renders. The chat state
//! itself lives in [`ChatState`]; this wraps it with what only a terminal
//! needs (cursor, scroll, alert).

use qachat_application::SubmitQueryError;
use qachat_domain::{AskRequest, AskResponse, ChatState};

/// Central TUI state: owned by the ChatApp select! loop
#[derive(Debug, Default)]
pub struct TuiState {
    // -- Chat (input buffer, history, session) --
    pub chat: ChatState,

    // -- Cursor position in the input, in bytes --
    pub cursor_pos: usize,

    // -- History scroll: 0 = pinned to the newest message --
    pub scroll_offset: usize,
    max_scroll: usize,

    // -- Blocking alert text, if shown --
    pub alert: Option<String>,

    // -- Requests sent but not yet answered (display only) --
    pub pending_requests: usize,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(chat: ChatState) -> Self {
        let cursor_pos = chat.input().len();
        Self {
            chat,
            cursor_pos,
            ..Self::default()
        }
    }

    // -- Input editing --

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.clamped_cursor();
        self.chat.input_mut().insert(cursor, c);
        self.cursor_pos = cursor + c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        let cursor = self.clamped_cursor();
        if let Some(prev) = self.chat.input()[..cursor].chars().next_back() {
            let start = cursor - prev.len_utf8();
            self.chat.input_mut().remove(start);
            self.cursor_pos = start;
        }
    }

    pub fn delete_char_forward(&mut self) {
        let cursor = self.clamped_cursor();
        if cursor < self.chat.input().len() {
            self.chat.input_mut().remove(cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        let cursor = self.clamped_cursor();
        if let Some(prev) = self.chat.input()[..cursor].chars().next_back() {
            self.cursor_pos = cursor - prev.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        let cursor = self.clamped_cursor();
        if let Some(next) = self.chat.input()[cursor..].chars().next() {
            self.cursor_pos = cursor + next.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.chat.input().len();
    }

    /// Cursor position guaranteed to sit on a char boundary of the input
    pub fn clamped_cursor(&self) -> usize {
        let input = self.chat.input();
        let mut pos = self.cursor_pos.min(input.len());
        while pos > 0 && !input.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    // -- Submission --

    /// Prepare a request for the current input and count it as pending.
    /// The input is left in place until a response arrives.
    pub fn take_submission(&mut self) -> Option<AskRequest> {
        let request = self.chat.prepare_submission()?;
        self.pending_requests += 1;
        Some(request)
    }

    /// Apply a finished request.
    ///
    /// Success adopts the server's history and clears the input; failure
    /// opens the alert and leaves everything else as it was.
    pub fn apply_result(&mut self, result: Result<AskResponse, SubmitQueryError>) {
        self.pending_requests = self.pending_requests.saturating_sub(1);
        match result {
            Ok(response) => {
                self.chat.apply_response(response);
                self.cursor_pos = 0;
                self.scroll_to_bottom();
            }
            Err(e) => {
                self.alert = Some(e.user_message().to_string());
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    // -- Scrolling --

    pub fn scroll_up(&mut self) {
        self.scroll_offset = (self.scroll_offset + 1).min(self.max_scroll);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    /// Record how far the history can scroll at the current size and pull
    /// the offset back inside it.
    pub fn set_max_scroll(&mut self, max_scroll: usize) {
        self.max_scroll = max_scroll;
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qachat_application::GatewayError;
    use qachat_domain::Message;

    fn typed(text: &str) -> TuiState {
        let mut state = TuiState::new(ChatState::new());
        for c in text.chars() {
            state.insert_char(c);
        }
        state
    }

    #[test]
    fn test_input_editing() {
        let mut state = typed("helo");
        state.cursor_left();
        state.insert_char('l');
        assert_eq!(state.chat.input(), "hello");

        state.cursor_end();
        state.delete_char();
        assert_eq!(state.chat.input(), "hell");

        state.cursor_home();
        state.delete_char_forward();
        assert_eq!(state.chat.input(), "ell");
        assert_eq!(state.cursor_pos, 0);
    }

    #[test]
    fn test_multibyte_cursor_movement() {
        let mut state = typed("aé");
        assert_eq!(state.cursor_pos, 3);
        state.cursor_left();
        assert_eq!(state.cursor_pos, 1);
        state.cursor_right();
        assert_eq!(state.cursor_pos, 3);
        state.delete_char();
        assert_eq!(state.chat.input(), "a");
    }

    #[test]
    fn test_blank_submission_is_not_pending() {
        let mut state = typed("  ");
        assert!(state.take_submission().is_none());
        assert_eq!(state.pending_requests, 0);
    }

    #[test]
    fn test_submission_keeps_input_until_response() {
        let mut state = typed("hi");
        let request = state.take_submission().unwrap();
        assert_eq!(request.query, "hi");
        assert_eq!(state.chat.input(), "hi");
        assert_eq!(state.pending_requests, 1);
    }

    #[test]
    fn test_apply_success() {
        let mut state = typed("hi");
        state.take_submission();
        state.set_max_scroll(5);
        state.scroll_up();
        assert_eq!(state.scroll_offset, 1);

        state.apply_result(Ok(AskResponse::new("s1", vec![Message::user("hi")])));

        assert_eq!(state.chat.history(), &[Message::user("hi")]);
        assert_eq!(state.chat.input(), "");
        assert_eq!(state.cursor_pos, 0);
        assert_eq!(state.scroll_offset, 0);
        assert_eq!(state.pending_requests, 0);
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_apply_failure_opens_alert_and_keeps_state() {
        let mut state = typed("hi");
        state.take_submission();

        state.apply_result(Err(SubmitQueryError::from(GatewayError::Timeout)));

        assert_eq!(
            state.alert.as_deref(),
            Some("Failed to get response. Please try again.")
        );
        assert_eq!(state.chat.input(), "hi");
        assert!(state.chat.history().is_empty());
        assert!(state.chat.session_id().is_none());

        state.dismiss_alert();
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_late_response_overwrites_newer_one() {
        let mut state = typed("q");
        state.take_submission();
        state.take_submission();

        // Second request answers first, then the first one arrives
        state.apply_result(Ok(AskResponse::new(
            "s1",
            vec![Message::user("q"), Message::user("q")],
        )));
        state.apply_result(Ok(AskResponse::new("s1", vec![Message::user("q")])));

        assert_eq!(state.chat.history().len(), 1);
        assert_eq!(state.pending_requests, 0);
    }

    #[test]
    fn test_scroll_stops_at_oldest_line() {
        let mut state = TuiState::default();
        state.set_max_scroll(2);
        for _ in 0..10 {
            state.scroll_up();
        }
        assert_eq!(state.scroll_offset, 2);

        // One press back down moves off the top right away
        state.scroll_down();
        assert_eq!(state.scroll_offset, 1);
    }

    #[test]
    fn test_shrinking_history_area_pulls_offset_back() {
        let mut state = TuiState::default();
        state.set_max_scroll(10);
        for _ in 0..8 {
            state.scroll_up();
        }
        state.set_max_scroll(3);
        assert_eq!(state.scroll_offset, 3);
    }

    #[test]
    fn test_cursor_clamped_after_external_clear() {
        let mut state = typed("abc");
        state.chat.input_mut().clear();
        assert_eq!(state.clamped_cursor(), 0);
        state.insert_char('z');
        assert_eq!(state.chat.input(), "z");
    }
}
