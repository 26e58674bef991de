//! TUI application model (Elm architecture).

use std::io;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use tachsplit_core::{
    apply_keystroke, derive, format_hours, CopyIndicator, SplitOptions, Totals,
};

use crate::copy::spawn_copy;
use crate::fields::render_field;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::messages::TuiMessage;
use crate::styles::ColorTheme;
use crate::summary::render_summary;

/// Which reading field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    /// The checkout (start) reading.
    #[default]
    Start,
    /// The end reading.
    End,
}

impl Field {
    /// The other field.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Field::Start => Field::End,
            Field::End => Field::Start,
        }
    }
}

/// TUI application state (Elm Model).
///
/// The derived summary is never stored: [`TachApp::totals`] recomputes
/// it from the raw inputs on every read, so field edits are reflected
/// synchronously.
pub struct TachApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Raw text of the checkout (start) reading.
    pub start_raw: String,
    /// Raw text of the end reading.
    pub end_raw: String,
    /// Field currently receiving keystrokes.
    pub focus: Field,
    /// Pipeline options.
    pub opts: SplitOptions,
    /// Transient copy confirmation.
    pub indicator: CopyIndicator,
    /// Last clipboard failure, shown muted under the summary.
    pub copy_error: Option<String>,
    /// Color theme.
    pub theme: ColorTheme,
    /// Message receiver.
    rx: Receiver<TuiMessage>,
    /// Sender handed to spawned copy threads.
    tx: Sender<TuiMessage>,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
}

impl TachApp {
    /// Create a new TUI app.
    #[must_use]
    pub fn new(rx: Receiver<TuiMessage>, tx: Sender<TuiMessage>, opts: SplitOptions) -> Self {
        Self {
            should_quit: false,
            start_raw: String::new(),
            end_raw: String::new(),
            focus: Field::default(),
            opts,
            indicator: CopyIndicator::new(),
            copy_error: None,
            theme: ColorTheme::default(),
            rx,
            tx,
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    /// Prefill the readings, filtered through the input policy so a
    /// constrained form never starts with an invalid value.
    pub fn set_readings(&mut self, start: &str, end: &str) {
        self.start_raw = apply_keystroke(self.opts.input, "", start);
        self.end_raw = apply_keystroke(self.opts.input, "", end);
    }

    /// The currently derived flight summary.
    #[must_use]
    pub fn totals(&self) -> Totals {
        derive(&self.start_raw, &self.end_raw, &self.opts)
    }

    /// The check-in text a copy action would export right now.
    #[must_use]
    pub fn check_in_text(&self) -> String {
        format_hours(self.totals().check_in, self.opts.precision)
    }

    fn focused_value(&mut self) -> &mut String {
        match self.focus {
            Field::Start => &mut self.start_raw,
            Field::End => &mut self.end_raw,
        }
    }

    /// Handle a keyboard action (Elm Update).
    ///
    /// Returns the text to export when the action requests a copy; the
    /// event loop performs the actual clipboard write off-thread.
    pub fn handle_key_action(&mut self, action: KeyAction) -> Option<String> {
        match action {
            KeyAction::Quit | KeyAction::Cancel => {
                self.should_quit = true;
            }
            KeyAction::NextField | KeyAction::PrevField => {
                self.focus = self.focus.toggled();
            }
            KeyAction::Insert(c) => {
                let policy = self.opts.input;
                let value = self.focused_value();
                let candidate = format!("{value}{c}");
                *value = apply_keystroke(policy, value.as_str(), &candidate);
            }
            KeyAction::Backspace => {
                self.focused_value().pop();
            }
            KeyAction::ClearField => {
                self.focused_value().clear();
            }
            KeyAction::Copy => {
                return Some(self.check_in_text());
            }
            KeyAction::None => {}
        }
        None
    }

    /// Handle a clipboard outcome from the copy thread.
    ///
    /// A success arms the confirmation window at `now` (replacing any
    /// pending window); a failure goes to the diagnostic log and a
    /// muted note, never a blocking error.
    pub fn handle_copy_finished(&mut self, result: Result<String, String>, now: Instant) {
        match result {
            Ok(text) => {
                tracing::debug!(%text, "clipboard write succeeded");
                self.indicator.arm(now);
                self.copy_error = None;
            }
            Err(error) => {
                tracing::warn!(%error, "clipboard write failed");
                self.copy_error = Some(error);
            }
        }
    }

    /// Handle a single message, returning a copy request if one arises.
    pub fn handle_message(&mut self, msg: TuiMessage, now: Instant) -> Option<String> {
        match msg {
            TuiMessage::KeyPress(action) => return self.handle_key_action(action),
            TuiMessage::Tick => {
                // Tick triggers re-render; indicator expiry is a pure
                // function of time, nothing to update here.
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::CopyFinished(result) => self.handle_copy_finished(result, now),
            TuiMessage::Quit => {
                self.should_quit = true;
            }
        }
        None
    }

    /// Drain pending messages from the channel (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            if let Some(text) = self.handle_message(msg, Instant::now()) {
                spawn_copy(text, self.tx.clone());
            }
        }
    }

    /// Compute the screen layout.
    ///
    /// Returns (header, fields, summary, footer) rects; the fields rect
    /// holds the two 3-line reading boxes.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(6), // reading fields
                Constraint::Min(7),    // summary
                Constraint::Length(2), // footer
            ])
            .split(area);

        (outer[0], outer[1], outer[2], outer[3])
    }

    /// Split the fields rect into the two reading boxes.
    #[must_use]
    pub fn compute_field_layout(fields_area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .split(fields_area);

        (chunks[0], chunks[1])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, fields_area, summary_area, footer_area) =
            Self::compute_layout(frame.area());

        render_header(frame, header_area, &self.theme);

        let (start_area, end_area) = Self::compute_field_layout(fields_area);
        render_field(
            frame,
            start_area,
            "Checkout Tach Time",
            &self.start_raw,
            self.focus == Field::Start,
            &self.theme,
        );
        render_field(
            frame,
            end_area,
            "End Tach Time",
            &self.end_raw,
            self.focus == Field::End,
            &self.theme,
        );

        let totals = self.totals();
        render_summary(
            frame,
            summary_area,
            &totals,
            self.opts.precision,
            self.indicator.is_visible(Instant::now()),
            self.copy_error.as_deref(),
            &self.theme,
        );

        render_footer(frame, footer_area);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// Sets up the terminal, runs the main loop (poll events, update,
    /// render), and tears down on exit. Teardown cancels any pending
    /// copy-confirmation deadline so it cannot fire after the screen is
    /// gone.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) => {
                        let action = map_key(key_event);
                        if let Some(text) = self.handle_key_action(action) {
                            spawn_copy(text, self.tx.clone());
                        }
                    }
                    Event::Resize(w, h) => {
                        self.terminal_width = w;
                        self.terminal_height = h;
                    }
                    _ => {}
                }
            }

            // Process pending clipboard outcomes
            self.update();
        }

        self.indicator.cancel();
        Self::teardown_terminal(&mut terminal)?;
        Ok(())
    }
}
