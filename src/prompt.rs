use std::io::{self, Write};

use forge_onboarding::answer::Answer;
use forge_onboarding::quiz::{Question, QuestionInput};

/// Shows a question and keeps asking until the input parses into the right
/// answer shape. Constraint checks (ranges, limits) stay with the session;
/// this only turns a line of text into a draft value.
pub(crate) fn read_answer(question: &Question) -> io::Result<Answer> {
    println!("\n{question}");
    loop {
        match parse_answer(question.input_type(), &read_line("> ")?) {
            Ok(answer) => return Ok(answer),
            Err(reason) => println!("{reason}"),
        }
    }
}

pub(crate) fn wait_for_enter(message: &str) -> io::Result<()> {
    read_line(&format!("{message} ")).map(|_| ())
}

pub(crate) fn confirm(message: &str) -> io::Result<bool> {
    loop {
        match read_line(&format!("{message} "))?.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer yes or no."),
        }
    }
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn parse_answer(input: &QuestionInput, raw: &str) -> Result<Answer, String> {
    match input {
        QuestionInput::Slider { min, max } => raw
            .trim()
            .parse::<i64>()
            .map(Answer::Number)
            .map_err(|_| format!("Please enter a whole number between {min} and {max}.")),
        QuestionInput::TextBox { .. } => Ok(Answer::Text(raw.to_owned())),
        QuestionInput::MultipleChoice { options, .. } => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(Answer::Selection(Vec::new()));
            }

            let mut selected = Vec::new();
            for part in trimmed.split(',') {
                let number: usize = part
                    .trim()
                    .parse()
                    .map_err(|_| "Please list option numbers separated by commas, e.g. 1,3.".to_owned())?;
                let option = number
                    .checked_sub(1)
                    .and_then(|i| options.get(i))
                    .ok_or_else(|| format!("There is no option {number}."))?;
                selected.push(option.clone());
            }
            Ok(Answer::Selection(selected))
        }
        QuestionInput::Checkbox { .. } => match raw.trim().to_lowercase().as_str() {
            "y" | "yes" => Ok(Answer::Checked(true)),
            "n" | "no" => Ok(Answer::Checked(false)),
            _ => Err("Please answer yes or no.".to_owned()),
        },
    }
}
