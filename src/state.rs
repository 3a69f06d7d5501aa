// src/state.rs

use std::sync::{Arc, RwLock};

use axum::extract::FromRef;

use crate::bank::QuestionBank;
use crate::models::session::QuizSession;

/// The single quiz session of this process. User-interaction events
/// are serialized through this lock, so each operation is atomic with
/// respect to the answer set and phase.
pub type SharedSession = Arc<RwLock<QuizSession>>;

#[derive(Clone)]
pub struct AppState {
    pub bank: Arc<QuestionBank>,
    pub session: SharedSession,
}

impl AppState {
    pub fn new(bank: QuestionBank) -> Self {
        let session = Arc::new(RwLock::new(QuizSession::new(bank.len())));
        Self {
            bank: Arc::new(bank),
            session,
        }
    }
}

impl FromRef<AppState> for Arc<QuestionBank> {
    fn from_ref(state: &AppState) -> Self {
        state.bank.clone()
    }
}

impl FromRef<AppState> for SharedSession {
    fn from_ref(state: &AppState) -> Self {
        state.session.clone()
    }
}
