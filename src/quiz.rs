use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QuestionInput {
    Slider {
        min: i64,
        max: i64,
    },
    TextBox {
        maxlen: usize,
    },
    MultipleChoice {
        options: Vec<String>,
        #[serde(rename = "maxSelect")]
        max_select: usize,
    },
    Checkbox {
        label: String,
    },
}

impl QuestionInput {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Slider { .. } => "slider",
            Self::TextBox { .. } => "text box",
            Self::MultipleChoice { .. } => "multiple choice",
            Self::Checkbox { .. } => "checkbox",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "textPrompt")]
    text_prompt: String,
    #[serde(rename = "inputType")]
    input_type: QuestionInput,
}

impl Question {
    pub fn new(text_prompt: impl Into<String>, input_type: QuestionInput) -> Self {
        Self {
            text_prompt: text_prompt.into(),
            input_type,
        }
    }

    pub fn text_prompt(&self) -> &str {
        &self.text_prompt
    }

    pub fn input_type(&self) -> &QuestionInput {
        &self.input_type
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.text_prompt, self.input_type)
    }
}

impl fmt::Display for QuestionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slider { min, max } => write!(f, "(pick a number from {} to {})", min, max),
            Self::TextBox { maxlen } => write!(f, "(free text, up to {} characters)", maxlen),
            Self::MultipleChoice { options, max_select } => {
                let mut listing = String::new();
                for (i, option) in options.iter().enumerate() {
                    listing.push_str(&format!("  {}) {}\n", i + 1, option));
                }
                write!(f, "(choose up to {})\n{}", max_select, listing.trim_end())
            }
            Self::Checkbox { label } => write!(f, "[{}] (yes/no)", label),
        }
    }
}

/// The fixed, ordered question list for one onboarding session. Indices are
/// stable and contiguous; content is validated once here and never re-checked.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("a question catalog needs at least one question")]
    Empty,
    #[error("question {index} has an empty prompt")]
    EmptyPrompt { index: usize },
    #[error("question {index} has slider bounds {min}..{max}, expected min < max")]
    SliderBounds { index: usize, min: i64, max: i64 },
    #[error("question {index} has a text box with maxlen 0")]
    ZeroMaxLen { index: usize },
    #[error("question {index} has no options to choose from")]
    NoOptions { index: usize },
    #[error("question {index} repeats the option '{option}'")]
    DuplicateOption { index: usize, option: String },
    #[error("question {index} allows {max_select} selections out of {available} options")]
    BadMaxSelect {
        index: usize,
        max_select: usize,
        available: usize,
    },
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, question) in questions.iter().enumerate() {
            if question.text_prompt.trim().is_empty() {
                return Err(CatalogError::EmptyPrompt { index });
            }

            match question.input_type() {
                QuestionInput::Slider { min, max } => {
                    if min >= max {
                        return Err(CatalogError::SliderBounds {
                            index,
                            min: *min,
                            max: *max,
                        });
                    }
                }
                QuestionInput::TextBox { maxlen } => {
                    if *maxlen == 0 {
                        return Err(CatalogError::ZeroMaxLen { index });
                    }
                }
                QuestionInput::MultipleChoice { options, max_select } => {
                    if options.is_empty() {
                        return Err(CatalogError::NoOptions { index });
                    }
                    for (i, option) in options.iter().enumerate() {
                        if options[..i].contains(option) {
                            return Err(CatalogError::DuplicateOption {
                                index,
                                option: option.clone(),
                            });
                        }
                    }
                    if *max_select == 0 || *max_select > options.len() {
                        return Err(CatalogError::BadMaxSelect {
                            index,
                            max_select: *max_select,
                            available: options.len(),
                        });
                    }
                }
                QuestionInput::Checkbox { .. } => {}
            }
        }

        Ok(Self { questions })
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
