use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

use crate::answer::{Answer, AnswerError, AnswerStore};
use crate::quiz::{Question, QuestionCatalog};
use crate::score::{self, ScoreError};
use crate::state::SessionState;
use crate::SessionResult;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid answer: {0}")]
    InvalidAnswer(#[from] AnswerError),
    #[error("'{operation}' is not allowed while the session is {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },
    #[error(transparent)]
    Scoring(#[from] ScoreError),
}

/// What a successful submission did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Next(usize),
    Complete { score: u8 },
}

/// Drives one onboarding session over a fixed catalog. Advancement happens
/// only through a successfully validated submission, so a session that
/// reaches `Complete` holds an answer for every catalog index.
#[derive(Debug)]
pub struct QuizRunner {
    session_id: Uuid,
    catalog: QuestionCatalog,
    answers: AnswerStore,
    state: SessionState,
}

impl QuizRunner {
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            catalog,
            answers: AnswerStore::new(),
            state: SessionState::NotStarted,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::InProgress { current } => self.catalog.get(current),
            _ => None,
        }
    }

    pub fn progress(&self) -> Option<(usize, usize)> {
        match self.state {
            SessionState::InProgress { current } => Some((current, self.catalog.len())),
            _ => None,
        }
    }

    pub fn score(&self) -> Option<u8> {
        match self.state {
            SessionState::Complete { score } => Some(score),
            _ => None,
        }
    }

    #[instrument(level = "info", skip(self))]
    pub fn start(&mut self) -> SessionResult<()> {
        match self.state {
            SessionState::NotStarted => {
                self.session_id = Uuid::new_v4();
                self.state = SessionState::InProgress { current: 0 };
                log::info!(
                    "session {} started with {} questions",
                    self.session_id,
                    self.catalog.len()
                );
                Ok(())
            }
            state => Err(SessionError::InvalidState {
                operation: "start",
                state: state.name(),
            }),
        }
    }

    #[instrument(level = "info", skip(self, value))]
    pub fn submit_answer(&mut self, value: Answer) -> SessionResult<SubmitOutcome> {
        let current = match self.state {
            SessionState::InProgress { current } => current,
            state => {
                return Err(SessionError::InvalidState {
                    operation: "submit_answer",
                    state: state.name(),
                })
            }
        };

        self.answers.record(&self.catalog, current, value)?;

        if current + 1 == self.catalog.len() {
            let score = match score::health_score(&self.catalog, &self.answers) {
                Ok(score) => score,
                Err(e) => {
                    log::error!("session {} finished with an unscorable store: {e}", self.session_id);
                    return Err(e.into());
                }
            };
            self.state = SessionState::Complete { score };
            log::info!("session {} complete with health score {score}", self.session_id);
            Ok(SubmitOutcome::Complete { score })
        } else {
            self.state = SessionState::InProgress { current: current + 1 };
            Ok(SubmitOutcome::Next(current + 1))
        }
    }

    #[instrument(level = "info", skip(self))]
    pub fn reset(&mut self) -> SessionResult<()> {
        match self.state {
            SessionState::Complete { .. } => {
                self.answers.clear();
                self.state = SessionState::NotStarted;
                log::info!("session {} reset", self.session_id);
                Ok(())
            }
            state => Err(SessionError::InvalidState {
                operation: "reset",
                state: state.name(),
            }),
        }
    }
}
