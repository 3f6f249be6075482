use std::collections::BTreeMap;

use thiserror::Error;

use crate::quiz::{QuestionCatalog, QuestionInput};

/// A recorded answer. Only meaningful next to the question it answers; the
/// store refuses to record a value whose shape or constraints don't match.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Number(i64),
    Text(String),
    Selection(Vec<String>),
    Checked(bool),
}

impl Answer {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Selection(_) => "selection",
            Self::Checked(_) => "yes/no",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnswerError {
    #[error("question index {index} is out of bounds for a catalog of {len} questions")]
    OutOfBounds { index: usize, len: usize },
    #[error("expected a {expected} answer, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
    #[error("slider value {value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },
    #[error("text answer is {len} characters long, the limit is {maxlen}")]
    TooLong { len: usize, maxlen: usize },
    #[error("{count} options selected, at most {max_select} allowed")]
    TooManySelected { count: usize, max_select: usize },
    #[error("'{option}' is not one of the available options")]
    UnknownOption { option: String },
    #[error("option '{option}' was selected more than once")]
    DuplicateSelection { option: String },
}

fn validate(input: &QuestionInput, value: &Answer) -> Result<(), AnswerError> {
    match (input, value) {
        (QuestionInput::Slider { min, max }, Answer::Number(n)) => {
            if n < min || n > max {
                Err(AnswerError::OutOfRange {
                    value: *n,
                    min: *min,
                    max: *max,
                })
            } else {
                Ok(())
            }
        }
        (QuestionInput::TextBox { maxlen }, Answer::Text(text)) => {
            let len = text.chars().count();
            if len > *maxlen {
                Err(AnswerError::TooLong { len, maxlen: *maxlen })
            } else {
                Ok(())
            }
        }
        (QuestionInput::MultipleChoice { options, max_select }, Answer::Selection(selected)) => {
            if selected.len() > *max_select {
                return Err(AnswerError::TooManySelected {
                    count: selected.len(),
                    max_select: *max_select,
                });
            }
            for (i, option) in selected.iter().enumerate() {
                if !options.contains(option) {
                    return Err(AnswerError::UnknownOption { option: option.clone() });
                }
                if selected[..i].contains(option) {
                    return Err(AnswerError::DuplicateSelection { option: option.clone() });
                }
            }
            Ok(())
        }
        (QuestionInput::Checkbox { .. }, Answer::Checked(_)) => Ok(()),
        (input, value) => Err(AnswerError::TypeMismatch {
            expected: input.kind(),
            got: value.kind(),
        }),
    }
}

/// One answer per question index, in catalog order. An index is present only
/// once it has been answered; re-recording overwrites.
#[derive(Debug, Clone, Default)]
pub struct AnswerStore {
    answers: BTreeMap<usize, Answer>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        catalog: &QuestionCatalog,
        index: usize,
        value: Answer,
    ) -> Result<(), AnswerError> {
        let question = catalog.get(index).ok_or(AnswerError::OutOfBounds {
            index,
            len: catalog.len(),
        })?;

        validate(question.input_type(), &value)?;
        self.answers.insert(index, value);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Answer> {
        self.answers.get(&index)
    }

    pub fn is_complete(&self, catalog: &QuestionCatalog) -> bool {
        (0..catalog.len()).all(|index| self.answers.contains_key(&index))
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Question;

    fn catalog() -> QuestionCatalog {
        QuestionCatalog::new(vec![
            Question::new("Are you healthy?", QuestionInput::Checkbox { label: "Yes".into() }),
            Question::new(
                "How are you doing today?",
                QuestionInput::MultipleChoice {
                    options: vec!["Fine".into(), "Horrible".into(), "Could be better".into()],
                    max_select: 2,
                },
            ),
            Question::new("Tell me about your best lift", QuestionInput::TextBox { maxlen: 10 }),
            Question::new("Rank your coolness", QuestionInput::Slider { min: 1, max: 10 }),
        ])
        .unwrap()
    }

    #[test]
    fn records_valid_answers() {
        let catalog = catalog();
        let mut store = AnswerStore::new();

        store.record(&catalog, 0, Answer::Checked(true)).unwrap();
        store.record(&catalog, 1, Answer::Selection(vec!["Fine".into()])).unwrap();
        store.record(&catalog, 2, Answer::Text("405 squat".into())).unwrap();
        store.record(&catalog, 3, Answer::Number(7)).unwrap();

        assert_eq!(store.len(), 4);
        assert!(store.is_complete(&catalog));
        assert_eq!(store.get(3), Some(&Answer::Number(7)));
    }

    #[test]
    fn rejects_out_of_bounds_indices() {
        let catalog = catalog();
        let mut store = AnswerStore::new();

        let err = store.record(&catalog, 4, Answer::Checked(true)).unwrap_err();
        assert_eq!(err, AnswerError::OutOfBounds { index: 4, len: 4 });
        assert!(store.is_empty());
    }

    #[test]
    fn rejects_mismatched_shapes() {
        let catalog = catalog();
        let mut store = AnswerStore::new();

        let err = store.record(&catalog, 0, Answer::Number(1)).unwrap_err();
        assert_eq!(
            err,
            AnswerError::TypeMismatch { expected: "checkbox", got: "number" }
        );
        assert_eq!(store.get(0), None);
    }

    #[test]
    fn rejects_sliders_outside_their_bounds() {
        let catalog = catalog();
        let mut store = AnswerStore::new();

        assert_eq!(
            store.record(&catalog, 3, Answer::Number(0)).unwrap_err(),
            AnswerError::OutOfRange { value: 0, min: 1, max: 10 }
        );
        assert_eq!(
            store.record(&catalog, 3, Answer::Number(11)).unwrap_err(),
            AnswerError::OutOfRange { value: 11, min: 1, max: 10 }
        );

        store.record(&catalog, 3, Answer::Number(1)).unwrap();
        store.record(&catalog, 3, Answer::Number(10)).unwrap();
    }

    #[test]
    fn rejects_over_long_text_but_allows_empty() {
        let catalog = catalog();
        let mut store = AnswerStore::new();

        assert_eq!(
            store.record(&catalog, 2, Answer::Text("12345678901".into())).unwrap_err(),
            AnswerError::TooLong { len: 11, maxlen: 10 }
        );
        store.record(&catalog, 2, Answer::Text(String::new())).unwrap();
        store.record(&catalog, 2, Answer::Text("1234567890".into())).unwrap();
    }

    #[test]
    fn rejects_bad_selections() {
        let catalog = catalog();
        let mut store = AnswerStore::new();

        assert_eq!(
            store
                .record(
                    &catalog,
                    1,
                    Answer::Selection(vec!["Fine".into(), "Horrible".into(), "Could be better".into()]),
                )
                .unwrap_err(),
            AnswerError::TooManySelected { count: 3, max_select: 2 }
        );
        assert_eq!(
            store.record(&catalog, 1, Answer::Selection(vec!["Great".into()])).unwrap_err(),
            AnswerError::UnknownOption { option: "Great".into() }
        );
        assert_eq!(
            store
                .record(&catalog, 1, Answer::Selection(vec!["Fine".into(), "Fine".into()]))
                .unwrap_err(),
            AnswerError::DuplicateSelection { option: "Fine".into() }
        );

        store.record(&catalog, 1, Answer::Selection(vec![])).unwrap();
    }

    #[test]
    fn overwrites_instead_of_duplicating() {
        let catalog = catalog();
        let mut store = AnswerStore::new();

        store.record(&catalog, 0, Answer::Checked(false)).unwrap();
        store.record(&catalog, 0, Answer::Checked(true)).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0), Some(&Answer::Checked(true)));
    }

    #[test]
    fn clear_empties_the_store() {
        let catalog = catalog();
        let mut store = AnswerStore::new();

        store.record(&catalog, 0, Answer::Checked(true)).unwrap();
        store.clear();

        assert!(store.is_empty());
        assert!(!store.is_complete(&catalog));
    }
}
