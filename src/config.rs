use std::fs;

use anyhow::{Context, Result};
use tracing::instrument;

use crate::quiz::{Question, QuestionCatalog};

pub const DEFAULT_CATALOG_PATH: &str = "data/onboarding.json";

/// Loads a question catalog from a JSON file: an array of questions in the
/// same shape the mobile client ships (`textPrompt` / tagged `inputType`).
#[instrument(level = "info")]
pub fn load_catalog(path: &str) -> Result<QuestionCatalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read the question catalog at '{path}'"))?;
    let questions: Vec<Question> =
        serde_json::from_str(&raw).context("question catalog is not valid JSON")?;
    let catalog = QuestionCatalog::new(questions).context("question catalog failed validation")?;

    log::info!("loaded {} questions from '{path}'", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuestionInput;

    const DEMO_CATALOG: &str = r#"[
        { "textPrompt": "Are you healthy?", "inputType": { "type": "Checkbox", "label": "Yes" } },
        { "textPrompt": "Rank your coolness from 1 to 10", "inputType": { "type": "Slider", "min": 1, "max": 10 } }
    ]"#;

    #[test]
    fn parses_a_catalog_file_shape() {
        let questions: Vec<Question> = serde_json::from_str(DEMO_CATALOG).unwrap();
        let catalog = QuestionCatalog::new(questions).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(1).unwrap().input_type(),
            &QuestionInput::Slider { min: 1, max: 10 }
        );
    }

    #[test]
    fn surfaces_validation_failures_from_the_file() {
        let questions: Vec<Question> =
            serde_json::from_str(r#"[{ "textPrompt": "", "inputType": { "type": "Checkbox", "label": "Yes" } }]"#)
                .unwrap();
        assert!(QuestionCatalog::new(questions).is_err());
    }
}
