//! Practice session state: target letter, last feedback and listeners.
//!
//! One `Session` belongs to one event loop. Navigation calls and
//! [`FramePipeline::process_for_session`](crate::FramePipeline::process_for_session)
//! both take it by `&mut`, so there is exactly one writer. Subscribers are
//! called synchronously, in registration order, before the mutating call
//! returns.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use fingerspell_letters::{ClassificationResult, Letter};

/// Change notification delivered to subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum SessionEvent {
    LetterChanged(Letter),
    Feedback(ClassificationResult),
}

/// Handle returned by [`Session::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&SessionEvent)>;

pub struct Session {
    current_letter: Letter,
    last_result: ClassificationResult,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::starting_at(Letter::A)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("current_letter", &self.current_letter)
            .field("last_result", &self.last_result)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Session {
    /// New session on letter A, waiting for a hand.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(letter: Letter) -> Self {
        Self {
            current_letter: letter,
            last_result: ClassificationResult::Waiting,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn current_letter(&self) -> Letter {
        self.current_letter
    }

    pub fn last_result(&self) -> ClassificationResult {
        self.last_result
    }

    /// Advance one letter, wrapping from Z to A.
    pub fn next_letter(&mut self) -> Letter {
        self.select(self.current_letter.next());
        self.current_letter
    }

    /// Go back one letter. Stays on A.
    pub fn previous_letter(&mut self) -> Letter {
        self.select(self.current_letter.previous());
        self.current_letter
    }

    /// Jump to the letter named by `code` (one ASCII letter, any case).
    ///
    /// Anything else is ignored and leaves the session untouched. Returns
    /// whether the current letter changed.
    pub fn set_letter(&mut self, code: &str) -> bool {
        match Letter::from_code(code) {
            Some(letter) => self.select(letter),
            None => {
                debug!("ignoring invalid letter code {code:?}");
                false
            }
        }
    }

    /// Typed counterpart of [`set_letter`](Self::set_letter).
    ///
    /// Re-selecting the current letter is a no-op and emits nothing. This
    /// differs from a subject that republishes every assignment. Listeners
    /// that need the letter at subscribe time should read
    /// [`current_letter`](Self::current_letter).
    pub fn select(&mut self, letter: Letter) -> bool {
        if letter == self.current_letter {
            return false;
        }
        self.current_letter = letter;
        self.emit(SessionEvent::LetterChanged(letter));
        true
    }

    /// Store the latest frame result. Every call notifies subscribers, even
    /// when the result repeats.
    pub fn record_result(&mut self, result: ClassificationResult) {
        self.last_result = result;
        self.emit(SessionEvent::Feedback(result));
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&SessionEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn emit(&mut self, event: SessionEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}
