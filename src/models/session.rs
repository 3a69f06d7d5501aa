// src/models/session.rs

use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::config::{LIKERT_MAX, LIKERT_MIN};
use crate::models::question::QuestionView;

/// Lifecycle of a quiz run. `Completed` is terminal until `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    InProgress,
    Completed,
}

/// DTO for the client-facing snapshot of the session: the phase plus,
/// while in progress, the question to show.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionView {
    pub phase: Phase,
    pub question: Option<QuestionView>,
}

/// A single in-memory quiz run: cursor position, the answers chosen so
/// far, and the phase.
///
/// Answers are keyed by 0-based question index and stay sparse until
/// the user has visited every question. All mutations are guarded
/// no-ops outside their preconditions; nothing here returns an error.
#[derive(Debug)]
pub struct QuizSession {
    total: usize,
    current: usize,
    answers: HashMap<usize, u8>,
    phase: Phase,
}

impl QuizSession {
    /// Creates a fresh session over `total` questions (`total` >= 1).
    pub fn new(total: usize) -> Self {
        debug_assert!(total >= 1, "a quiz needs at least one question");
        Self {
            total,
            current: 0,
            answers: HashMap::new(),
            phase: Phase::InProgress,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 0-based index of the question currently shown.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Sparse map of 0-based question index to chosen value.
    pub fn answers(&self) -> &HashMap<usize, u8> {
        &self.answers
    }

    pub fn answer_at(&self, index: usize) -> Option<u8> {
        self.answers.get(&index).copied()
    }

    /// Stores `value` at the current index, overwriting any prior
    /// choice (last-write-wins, no history). Returns `false` without
    /// touching state when the value is outside the Likert scale or
    /// the session is already completed.
    pub fn record_answer(&mut self, value: u8) -> bool {
        if self.phase == Phase::Completed {
            return false;
        }
        if !(LIKERT_MIN..=LIKERT_MAX).contains(&value) {
            return false;
        }
        self.answers.insert(self.current, value);
        true
    }

    /// Moves to the next question, or completes the session when the
    /// cursor is on the last one. Requires an answer at the current
    /// index; without one this is a no-op and returns `false`.
    pub fn advance(&mut self) -> bool {
        if self.phase == Phase::Completed {
            return false;
        }
        if !self.answers.contains_key(&self.current) {
            return false;
        }
        if self.current + 1 < self.total {
            self.current += 1;
        } else {
            self.phase = Phase::Completed;
        }
        true
    }

    /// Moves back one question, saturating at index 0.
    pub fn retreat(&mut self) -> bool {
        if self.phase == Phase::Completed || self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Restores the exact initial state: empty answers, index 0,
    /// phase `InProgress`.
    pub fn reset(&mut self) {
        self.current = 0;
        self.answers.clear();
        self.phase = Phase::InProgress;
    }
}
