//! TUI application state and event loop

use crate::core::{Mark, WORD_LENGTH};
use crate::service::{ServiceError, WordService};
use crate::session::{
    Key, KeyOutcome, MAX_GUESSES, Phase, Session, SubmitOutcome, Surface, ValidationRequest,
};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// How long the event loop waits for a key before checking on the worker
const TICK: Duration = Duration::from_millis(50);

/// What the display surface has been told so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub painted: [Option<[Mark; WORD_LENGTH]>; MAX_GUESSES],
    pub banner: Option<String>,
    pub loading: bool,
}

impl Surface for Board {
    fn paint_row(&mut self, slot: usize, cells: &[(usize, Mark)]) {
        let Some(row) = self.painted.get_mut(slot) else {
            return;
        };
        let marks = row.get_or_insert([Mark::Incorrect; WORD_LENGTH]);
        for &(i, mark) in cells {
            if let Some(cell) = marks.get_mut(i) {
                *cell = mark;
            }
        }
    }

    fn show_message(&mut self, text: &str) {
        self.banner = Some(text.to_string());
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// A legality check running on a worker thread
struct PendingCheck {
    request: ValidationRequest,
    answer: Receiver<Result<bool, ServiceError>>,
}

/// Application state
pub struct App {
    pub session: Session,
    pub board: Board,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    service: Arc<dyn WordService>,
    pending: Option<PendingCheck>,
}

impl App {
    #[must_use]
    pub fn new(session: Session, service: Arc<dyn WordService>, board: Board) -> Self {
        Self {
            session,
            board,
            messages: vec![Message {
                text: format!("Guess the five-letter word in {MAX_GUESSES} tries."),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            service,
            pending: None,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub const fn is_checking(&self) -> bool {
        self.pending.is_some()
    }

    /// React to a terminal key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('q') if self.session.is_over() => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => self.handle_key(Key::Char(c)),
            KeyCode::Backspace => self.handle_key(Key::Backspace),
            KeyCode::Enter => self.handle_key(Key::Enter),
            _ => {}
        }
    }

    /// Feed a logical key to the session
    pub fn handle_key(&mut self, key: Key) {
        match self.session.handle_key(key) {
            KeyOutcome::Submit(request) => self.start_check(request),
            KeyOutcome::Edited | KeyOutcome::Ignored => {}
        }
    }

    fn start_check(&mut self, request: ValidationRequest) {
        self.board.set_loading(true);

        let (tx, rx) = mpsc::channel();
        let service = Arc::clone(&self.service);
        let word = request.word.clone();
        thread::spawn(move || {
            // The receiver is gone if the player quit meanwhile
            let _ = tx.send(service.validate(&word));
        });

        debug!(id = request.id, "legality check started");
        self.pending = Some(PendingCheck {
            request,
            answer: rx,
        });
    }

    /// Apply the worker's answer, if it has arrived
    ///
    /// Returns `true` if a check finished.
    pub fn poll_check(&mut self) -> bool {
        let Some(pending) = &self.pending else {
            return false;
        };

        let verdict = match pending.answer.try_recv() {
            Ok(verdict) => verdict,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                warn!(id = pending.request.id, "legality check worker vanished");
                Err(ServiceError::Interrupted)
            }
        };

        let Some(PendingCheck { request, .. }) = self.pending.take() else {
            return false;
        };

        self.board.set_loading(false);
        let outcome = self
            .session
            .complete_submit(&request, verdict, &mut self.board);
        self.report(outcome);
        true
    }

    fn report(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Rejected => {
                self.add_message("Not in word list", MessageStyle::Error);
            }
            SubmitOutcome::Failed(_) => {
                self.add_message(
                    "Word service unavailable. Press Enter to retry.",
                    MessageStyle::Error,
                );
            }
            SubmitOutcome::Scored { phase, .. } => match phase {
                Phase::Won | Phase::Lost => {
                    if let Some(text) = self.session.final_message() {
                        let style = if phase == Phase::Won {
                            MessageStyle::Success
                        } else {
                            MessageStyle::Error
                        };
                        self.add_message(&text, style);
                    }
                }
                _ => {
                    let left = MAX_GUESSES - self.session.guesses_used();
                    self.add_message(
                        &format!("{left} {} left", if left == 1 { "guess" } else { "guesses" }),
                        MessageStyle::Info,
                    );
                }
            },
            SubmitOutcome::Ignored | SubmitOutcome::Stale => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, the word of the day
/// cannot be fetched, or there's an I/O error during rendering or event
/// handling.
pub fn run_tui(service: Arc<dyn WordService>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, service);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    service: Arc<dyn WordService>,
) -> Result<()> {
    let mut board = Board {
        loading: true,
        ..Board::default()
    };
    terminal.draw(super::rendering::loading_screen)?;

    let session = Session::start(service.as_ref(), &mut board)
        .context("Could not fetch the word of the day")?;
    let mut app = App::new(session, service, board);

    loop {
        app.poll_check();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key_event(key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
