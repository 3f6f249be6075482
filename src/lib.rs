use runner::SessionError;

pub mod answer;
pub mod config;
pub mod quiz;
pub mod runner;
pub mod score;
pub mod state;
pub mod submit;

pub type SessionResult<T> = Result<T, SessionError>;
