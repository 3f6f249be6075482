use thiserror::Error;

use crate::answer::{Answer, AnswerStore};
use crate::quiz::{QuestionCatalog, QuestionInput};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("cannot score an incomplete session: question {index} is unanswered")]
    Incomplete { index: usize },
    #[error("the answer recorded for question {index} does not fit its input type")]
    Mismatch { index: usize },
}

/// Derives the health score for a fully answered catalog.
///
/// Each answer is normalized to a [0, 1] contribution: sliders by position
/// within their bounds, text by how much of the length cap was used (after
/// trimming), multiple choice by how many of the allowed selections were
/// used, checkboxes by checked/unchecked. The score is the unweighted mean
/// of the contributions, scaled to [0, 100] and rounded to the nearest
/// integer. Every question type weighs the same; intent is encoded entirely
/// through the chosen input variant and its bounds.
pub fn health_score(catalog: &QuestionCatalog, answers: &AnswerStore) -> Result<u8, ScoreError> {
    let mut sum = 0.0;
    for (index, question) in catalog.questions().iter().enumerate() {
        let answer = answers.get(index).ok_or(ScoreError::Incomplete { index })?;
        let term = contribution(question.input_type(), answer).ok_or(ScoreError::Mismatch { index })?;
        sum += term;
    }

    Ok((sum / catalog.len() as f64 * 100.0).round() as u8)
}

fn contribution(input: &QuestionInput, answer: &Answer) -> Option<f64> {
    Some(match (input, answer) {
        (QuestionInput::Slider { min, max }, Answer::Number(value)) => {
            (value - min) as f64 / (max - min) as f64
        }
        (QuestionInput::TextBox { maxlen }, Answer::Text(text)) => {
            (text.trim().chars().count() as f64 / *maxlen as f64).min(1.0)
        }
        (QuestionInput::MultipleChoice { max_select, .. }, Answer::Selection(selected)) => {
            selected.len() as f64 / *max_select as f64
        }
        (QuestionInput::Checkbox { .. }, Answer::Checked(checked)) => {
            if *checked {
                1.0
            } else {
                0.0
            }
        }
        _ => return None,
    })
}
