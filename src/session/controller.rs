//! Game session state machine
//!
//! A [`Session`] owns the target word and the six guess slots, consumes key
//! events and drives each submission through the word service:
//!
//! ```text
//! AwaitingInput --5th letter--> ReadyToSubmit --submit--> Validating
//!       ^                                                     |
//!       +------------- illegal word / service failure --------+
//!       +------------- scored, guesses left ------------------+
//!                                           scored, win ------+--> Won
//!                                           scored, 6th miss -+--> Lost
//! ```

use super::{Key, Slot, Surface};
use crate::core::{Feedback, Word};
use crate::service::{ServiceError, WordService};
use tracing::{debug, error, info, warn};

/// Number of attempts per session
pub const MAX_GUESSES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Active slot is being edited
    AwaitingInput,
    /// Active slot holds five letters
    ReadyToSubmit,
    /// A legality check is outstanding
    Validating,
    Won,
    Lost,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// An outstanding legality check, handed out by [`Session::begin_submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    pub id: u64,
    pub slot: usize,
    pub word: Word,
}

/// What happened to a submission
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Nothing to submit in the current phase
    Ignored,
    /// Response for a request that is no longer pending; dropped
    Stale,
    /// The service does not know the word; letters kept, no attempt used
    Rejected,
    /// The service could not answer; letters kept, no attempt used
    Failed(ServiceError),
    /// The guess was scored
    Scored {
        slot: usize,
        feedback: Feedback,
        phase: Phase,
    },
}

/// Effect of a single key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Edited,
    /// Enter on a full slot; the caller must run the check and call
    /// [`Session::complete_submit`]
    Submit(ValidationRequest),
}

/// State of one game
#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    slots: [Slot; MAX_GUESSES],
    active: usize,
    phase: Phase,
    next_request_id: u64,
    pending: Option<u64>,
}

impl Session {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            slots: Default::default(),
            active: 0,
            phase: Phase::AwaitingInput,
            next_request_id: 0,
            pending: None,
        }
    }

    /// Look up the word of the day and start a session with it
    ///
    /// The loading indicator is shown for the duration of the lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails or the service answers with
    /// something that is not a 5-letter word. No session is created then.
    pub fn start<W, S>(service: &W, surface: &mut S) -> Result<Self, ServiceError>
    where
        W: WordService + ?Sized,
        S: Surface + ?Sized,
    {
        surface.set_loading(true);
        let fetched = service.word_of_the_day();
        surface.set_loading(false);

        let raw = fetched
            .inspect_err(|err| error!(error = %err, "could not fetch the word of the day"))?;

        let target = Word::new(raw.trim()).map_err(|source| {
            error!(word = %raw, error = %source, "word of the day is not a 5-letter word");
            ServiceError::MalformedWord {
                word: raw.clone(),
                source,
            }
        })?;

        info!("session started");
        Ok(Self::new(target))
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Index of the slot being edited (0-5)
    #[must_use]
    pub const fn active_slot(&self) -> usize {
        self.active
    }

    /// Position of the next letter in the active slot (0-5)
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.slots[self.active].len()
    }

    #[must_use]
    pub const fn slots(&self) -> &[Slot; MAX_GUESSES] {
        &self.slots
    }

    /// Number of guesses scored so far
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.slots.iter().filter(|s| s.is_scored()).count()
    }

    /// Announcement for a finished game
    #[must_use]
    pub fn final_message(&self) -> Option<String> {
        match self.phase {
            Phase::Won => Some("You won!!".to_string()),
            Phase::Lost => Some(format!("Game over. The word was {}", self.target)),
            _ => None,
        }
    }

    /// Type a letter into the active slot
    ///
    /// Returns `false` (and changes nothing) for non-letters, a full slot, or
    /// outside letter entry.
    pub fn append_letter(&mut self, ch: char) -> bool {
        if self.phase != Phase::AwaitingInput || !ch.is_ascii_alphabetic() {
            return false;
        }

        let Ok(letter) = u8::try_from(ch.to_ascii_uppercase()) else {
            return false;
        };

        let slot = &mut self.slots[self.active];
        if !slot.push(letter) {
            return false;
        }

        if slot.is_full() {
            self.phase = Phase::ReadyToSubmit;
        }
        true
    }

    /// Erase the last letter of the active slot
    pub fn delete_letter(&mut self) -> bool {
        if !matches!(self.phase, Phase::AwaitingInput | Phase::ReadyToSubmit) {
            return false;
        }

        if !self.slots[self.active].pop() {
            return false;
        }

        self.phase = Phase::AwaitingInput;
        true
    }

    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        let edited = match key {
            Key::Char(ch) => self.append_letter(ch),
            Key::Backspace => self.delete_letter(),
            Key::Enter => {
                return self
                    .begin_submit()
                    .map_or(KeyOutcome::Ignored, KeyOutcome::Submit);
            }
        };

        if edited {
            KeyOutcome::Edited
        } else {
            KeyOutcome::Ignored
        }
    }

    /// Start validating the active slot
    ///
    /// Accepted when the slot is full and no other check is outstanding,
    /// including a retry after a rejected or failed submission.
    pub fn begin_submit(&mut self) -> Option<ValidationRequest> {
        if !matches!(self.phase, Phase::AwaitingInput | Phase::ReadyToSubmit) {
            return None;
        }

        let word = self.slots[self.active].word()?;
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.pending = Some(id);
        self.phase = Phase::Validating;

        debug!(id, slot = self.active, %word, "submitting guess");
        Some(ValidationRequest {
            id,
            slot: self.active,
            word,
        })
    }

    /// Apply the answer to a legality check
    ///
    /// Responses for anything but the pending request are discarded without
    /// touching the session.
    pub fn complete_submit<S>(
        &mut self,
        request: &ValidationRequest,
        verdict: Result<bool, ServiceError>,
        surface: &mut S,
    ) -> SubmitOutcome
    where
        S: Surface + ?Sized,
    {
        if self.phase != Phase::Validating || self.pending != Some(request.id) {
            debug!(id = request.id, "discarding stale validation response");
            return SubmitOutcome::Stale;
        }
        self.pending = None;

        match verdict {
            Err(err) => {
                warn!(error = %err, word = %request.word, "validation failed, guess not consumed");
                self.phase = Phase::AwaitingInput;
                SubmitOutcome::Failed(err)
            }
            Ok(false) => {
                info!(word = %request.word, "guess is not an accepted word");
                self.phase = Phase::AwaitingInput;
                SubmitOutcome::Rejected
            }
            Ok(true) => self.score(&request.word, surface),
        }
    }

    /// Validate and score the active slot in one blocking call
    pub fn submit<W, S>(&mut self, service: &W, surface: &mut S) -> SubmitOutcome
    where
        W: WordService + ?Sized,
        S: Surface + ?Sized,
    {
        let Some(request) = self.begin_submit() else {
            return SubmitOutcome::Ignored;
        };

        surface.set_loading(true);
        let verdict = service.validate(&request.word);
        surface.set_loading(false);

        self.complete_submit(&request, verdict, surface)
    }

    fn score<S>(&mut self, guess: &Word, surface: &mut S) -> SubmitOutcome
    where
        S: Surface + ?Sized,
    {
        let slot = self.active;
        let feedback = Feedback::evaluate(guess, &self.target);
        self.slots[slot].score(feedback);

        let cells: Vec<_> = feedback.cells().collect();
        surface.paint_row(slot, &cells);

        self.phase = if feedback.is_win() {
            Phase::Won
        } else if slot + 1 == MAX_GUESSES {
            Phase::Lost
        } else {
            self.active += 1;
            Phase::AwaitingInput
        };

        info!(slot, %guess, feedback = %feedback.to_emoji(), phase = ?self.phase, "guess scored");
        if let Some(message) = self.final_message() {
            surface.show_message(&message);
        }

        SubmitOutcome::Scored {
            slot,
            feedback,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;

    struct StubService {
        target: &'static str,
        legal: &'static [&'static str],
        offline: bool,
    }

    impl StubService {
        const fn new(target: &'static str, legal: &'static [&'static str]) -> Self {
            Self {
                target,
                legal,
                offline: false,
            }
        }
    }

    impl WordService for StubService {
        fn word_of_the_day(&self) -> Result<String, ServiceError> {
            if self.offline {
                return Err(ServiceError::Interrupted);
            }
            Ok(self.target.to_string())
        }

        fn validate(&self, word: &Word) -> Result<bool, ServiceError> {
            if self.offline {
                return Err(ServiceError::Interrupted);
            }
            Ok(self.legal.iter().any(|w| w.eq_ignore_ascii_case(word.text())))
        }
    }

    #[derive(Default)]
    struct Recorder {
        rows: Vec<(usize, Vec<(usize, Mark)>)>,
        messages: Vec<String>,
        loading: Vec<bool>,
    }

    impl Surface for Recorder {
        fn paint_row(&mut self, slot: usize, cells: &[(usize, Mark)]) {
            self.rows.push((slot, cells.to_vec()));
        }

        fn show_message(&mut self, text: &str) {
            self.messages.push(text.to_string());
        }

        fn set_loading(&mut self, loading: bool) {
            self.loading.push(loading);
        }
    }

    const LEGAL: &[&str] = &[
        "crane", "slate", "speed", "erase", "audio", "robot", "ghost", "plumb",
    ];

    fn session(target: &str) -> Session {
        Session::new(Word::new(target).unwrap())
    }

    fn type_word(session: &mut Session, word: &str) {
        for ch in word.chars() {
            session.append_letter(ch);
        }
    }

    #[test]
    fn start_normalizes_target_and_toggles_loading() {
        let service = StubService::new(" erase\n", LEGAL);
        let mut surface = Recorder::default();

        let session = Session::start(&service, &mut surface).unwrap();

        assert_eq!(session.target().text(), "ERASE");
        assert_eq!(session.phase(), Phase::AwaitingInput);
        assert_eq!(session.active_slot(), 0);
        assert_eq!(session.cursor(), 0);
        assert_eq!(surface.loading, vec![true, false]);
    }

    #[test]
    fn start_failure_creates_no_session() {
        let service = StubService {
            offline: true,
            ..StubService::new("erase", LEGAL)
        };
        let mut surface = Recorder::default();

        assert!(matches!(
            Session::start(&service, &mut surface),
            Err(ServiceError::Interrupted)
        ));
        assert_eq!(surface.loading, vec![true, false]);
    }

    #[test]
    fn start_rejects_malformed_target() {
        let service = StubService::new("toolong", LEGAL);
        let mut surface = Recorder::default();

        assert!(matches!(
            Session::start(&service, &mut surface),
            Err(ServiceError::MalformedWord { .. })
        ));
    }

    #[test]
    fn append_accepts_only_letters_up_to_five() {
        let mut s = session("erase");

        assert!(!s.append_letter('1'));
        assert!(!s.append_letter(' '));
        assert!(!s.append_letter('é'));
        assert_eq!(s.cursor(), 0);

        type_word(&mut s, "cranes");
        assert_eq!(s.cursor(), 5);
        assert_eq!(s.slots()[0].text(), "CRANE");
        assert_eq!(s.phase(), Phase::ReadyToSubmit);
        assert!(!s.append_letter('x'));
    }

    #[test]
    fn delete_retreats_cursor_and_reopens_entry() {
        let mut s = session("erase");
        assert!(!s.delete_letter());

        type_word(&mut s, "crane");
        assert!(s.delete_letter());
        assert_eq!(s.cursor(), 4);
        assert_eq!(s.phase(), Phase::AwaitingInput);

        assert!(s.append_letter('k'));
        assert_eq!(s.slots()[0].text(), "CRANK");
    }

    #[test]
    fn handle_key_dispatch() {
        let mut s = session("erase");

        assert_eq!(s.handle_key(Key::Enter), KeyOutcome::Ignored);
        assert_eq!(s.handle_key(Key::Char('c')), KeyOutcome::Edited);
        assert_eq!(s.handle_key(Key::Char('?')), KeyOutcome::Ignored);
        assert_eq!(s.handle_key(Key::Backspace), KeyOutcome::Edited);
        assert_eq!(s.handle_key(Key::Backspace), KeyOutcome::Ignored);

        type_word(&mut s, "crane");
        match s.handle_key(Key::Enter) {
            KeyOutcome::Submit(request) => {
                assert_eq!(request.slot, 0);
                assert_eq!(request.word.text(), "CRANE");
            }
            other => panic!("expected submit, got {other:?}"),
        }
        assert_eq!(s.phase(), Phase::Validating);
    }

    #[test]
    fn submit_scores_and_advances() {
        let service = StubService::new("erase", LEGAL);
        let mut surface = Recorder::default();
        let mut s = session("erase");

        type_word(&mut s, "speed");
        let outcome = s.submit(&service, &mut surface);

        assert!(matches!(
            outcome,
            SubmitOutcome::Scored {
                slot: 0,
                phase: Phase::AwaitingInput,
                ..
            }
        ));
        assert_eq!(s.active_slot(), 1);
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.guesses_used(), 1);
        assert_eq!(surface.loading, vec![true, false]);
        assert_eq!(
            surface.rows,
            vec![(
                0,
                vec![
                    (0, Mark::Misplaced),
                    (1, Mark::Incorrect),
                    (2, Mark::Misplaced),
                    (3, Mark::Misplaced),
                    (4, Mark::Incorrect),
                ]
            )]
        );
        assert!(surface.messages.is_empty());
    }

    #[test]
    fn submit_requires_full_slot() {
        let service = StubService::new("erase", LEGAL);
        let mut surface = Recorder::default();
        let mut s = session("erase");

        type_word(&mut s, "cra");
        assert!(matches!(
            s.submit(&service, &mut surface),
            SubmitOutcome::Ignored
        ));
        assert!(surface.loading.is_empty());
        assert_eq!(s.phase(), Phase::AwaitingInput);
    }

    #[test]
    fn illegal_word_keeps_slot_and_letters() {
        let service = StubService::new("erase", LEGAL);
        let mut surface = Recorder::default();
        let mut s = session("erase");

        type_word(&mut s, "xxxxx");
        assert!(matches!(
            s.submit(&service, &mut surface),
            SubmitOutcome::Rejected
        ));

        assert_eq!(s.phase(), Phase::AwaitingInput);
        assert_eq!(s.active_slot(), 0);
        assert_eq!(s.slots()[0].text(), "XXXXX");
        assert_eq!(s.guesses_used(), 0);
        assert!(surface.rows.is_empty());

        // Edit and resubmit
        for _ in 0..5 {
            s.delete_letter();
        }
        type_word(&mut s, "crane");
        assert!(matches!(
            s.submit(&service, &mut surface),
            SubmitOutcome::Scored { slot: 0, .. }
        ));
    }

    #[test]
    fn service_failure_consumes_no_attempt_and_allows_retry() {
        let offline = StubService {
            offline: true,
            ..StubService::new("erase", LEGAL)
        };
        let online = StubService::new("erase", LEGAL);
        let mut surface = Recorder::default();
        let mut s = session("erase");

        type_word(&mut s, "crane");
        assert!(matches!(
            s.submit(&offline, &mut surface),
            SubmitOutcome::Failed(ServiceError::Interrupted)
        ));
        assert_eq!(s.phase(), Phase::AwaitingInput);
        assert_eq!(s.active_slot(), 0);
        assert_eq!(s.slots()[0].text(), "CRANE");
        assert_eq!(surface.loading, vec![true, false]);

        // Retry without editing
        assert!(matches!(
            s.submit(&online, &mut surface),
            SubmitOutcome::Scored { slot: 0, .. }
        ));
    }

    #[test]
    fn winning_guess_ends_session() {
        let service = StubService::new("erase", LEGAL);
        let mut surface = Recorder::default();
        let mut s = session("erase");

        type_word(&mut s, "crane");
        s.submit(&service, &mut surface);
        type_word(&mut s, "erase");
        let outcome = s.submit(&service, &mut surface);

        assert!(matches!(
            outcome,
            SubmitOutcome::Scored {
                slot: 1,
                feedback: Feedback::PERFECT,
                phase: Phase::Won,
            }
        ));
        assert!(s.is_over());
        assert_eq!(surface.messages, vec!["You won!!".to_string()]);

        assert!(!s.append_letter('a'));
        assert!(!s.delete_letter());
        assert_eq!(s.handle_key(Key::Enter), KeyOutcome::Ignored);
        assert_eq!(s.active_slot(), 1);
    }

    #[test]
    fn six_misses_lose_and_reveal_target() {
        let service = StubService::new("erase", LEGAL);
        let mut surface = Recorder::default();
        let mut s = session("erase");

        for word in ["crane", "slate", "speed", "audio", "robot", "ghost"] {
            type_word(&mut s, word);
            assert!(matches!(
                s.submit(&service, &mut surface),
                SubmitOutcome::Scored { .. }
            ));
        }

        assert_eq!(s.phase(), Phase::Lost);
        assert_eq!(s.active_slot(), 5);
        assert_eq!(s.guesses_used(), 6);
        assert_eq!(surface.rows.len(), 6);
        assert_eq!(
            surface.messages,
            vec!["Game over. The word was ERASE".to_string()]
        );

        assert!(!s.append_letter('p'));
        assert!(matches!(
            s.submit(&service, &mut surface),
            SubmitOutcome::Ignored
        ));
        assert_eq!(s.final_message().unwrap(), "Game over. The word was ERASE");
    }

    #[test]
    fn validating_rejects_input_and_second_submit() {
        let mut s = session("erase");
        type_word(&mut s, "crane");

        let request = s.begin_submit().unwrap();
        assert_eq!(s.phase(), Phase::Validating);
        assert!(s.begin_submit().is_none());
        assert!(!s.append_letter('a'));
        assert!(!s.delete_letter());
        assert_eq!(s.handle_key(Key::Enter), KeyOutcome::Ignored);

        let mut surface = Recorder::default();
        assert!(matches!(
            s.complete_submit(&request, Ok(true), &mut surface),
            SubmitOutcome::Scored { slot: 0, .. }
        ));
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut surface = Recorder::default();
        let mut s = session("erase");
        type_word(&mut s, "crane");

        let request = s.begin_submit().unwrap();
        let forged = ValidationRequest {
            id: request.id + 7,
            ..request.clone()
        };
        assert!(matches!(
            s.complete_submit(&forged, Ok(true), &mut surface),
            SubmitOutcome::Stale
        ));
        assert_eq!(s.phase(), Phase::Validating);

        s.complete_submit(&request, Ok(false), &mut surface);
        assert_eq!(s.phase(), Phase::AwaitingInput);

        // Late duplicate of an already answered request
        assert!(matches!(
            s.complete_submit(&request, Ok(true), &mut surface),
            SubmitOutcome::Stale
        ));
        assert_eq!(s.guesses_used(), 0);
        assert!(surface.rows.is_empty());
    }

    #[test]
    fn late_response_after_game_over_is_ignored() {
        let mut surface = Recorder::default();
        let mut s = session("erase");
        type_word(&mut s, "erase");

        let request = s.begin_submit().unwrap();
        s.complete_submit(&request, Ok(true), &mut surface);
        assert_eq!(s.phase(), Phase::Won);

        assert!(matches!(
            s.complete_submit(&request, Ok(true), &mut surface),
            SubmitOutcome::Stale
        ));
        assert_eq!(surface.rows.len(), 1);
        assert_eq!(surface.messages.len(), 1);
    }
}
