//! Interactive questionnaire on the terminal

use crate::quiz::input::parse_choice;
use colored::Colorize;
use pawtype_domain::{ANSWER_COUNT, answer_options, questions};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Answers collected from one interactive run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswers {
    pub pet_name: String,
    pub breed: String,
    pub answers: Vec<u8>,
}

/// Walks the owner through pet details and the fifteen questions
pub struct QuizRunner {
    editor: DefaultEditor,
}

impl QuizRunner {
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    /// Run the questionnaire. Returns `Ok(None)` when the user aborts
    /// with Ctrl-C or Ctrl-D.
    pub fn run(
        &mut self,
        pet_name: Option<String>,
        breed: Option<String>,
    ) -> rustyline::Result<Option<QuizAnswers>> {
        self.print_welcome();

        let Some(pet_name) = self.ask_text("Dog's name", pet_name)? else {
            return Ok(None);
        };
        let Some(breed) = self.ask_text("Breed", breed)? else {
            return Ok(None);
        };

        let mut answers = Vec::with_capacity(ANSWER_COUNT);
        for question in questions() {
            println!(
                "\n{} {}",
                format!("[{}/{}]", question.id, ANSWER_COUNT).cyan(),
                question.text.bold()
            );
            println!("  {}", question.behavior);
            for option in answer_options() {
                println!("    {}) {}", option.value, option.label);
            }

            loop {
                match self.editor.readline("> ") {
                    Ok(line) => match parse_choice(&line) {
                        Some(value) => {
                            answers.push(value);
                            break;
                        }
                        None => println!("{}", "Please enter a number from 1 to 5.".yellow()),
                    },
                    Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(None),
                    Err(err) => return Err(err),
                }
            }
        }

        Ok(Some(QuizAnswers {
            pet_name,
            breed,
            answers,
        }))
    }

    /// Use `preset` when it is non-blank, otherwise prompt until the user
    /// types something.
    fn ask_text(
        &mut self,
        label: &str,
        preset: Option<String>,
    ) -> rustyline::Result<Option<String>> {
        if let Some(value) = preset.filter(|v| !v.trim().is_empty()) {
            return Ok(Some(value));
        }

        loop {
            match self.editor.readline(&format!("{}: ", label)) {
                Ok(line) if !line.trim().is_empty() => return Ok(Some(line.trim().to_string())),
                Ok(_) => println!("{}", format!("{} is required.", label).yellow()),
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(err),
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        pawtype - Dog Personality Quiz       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Answer {} questions about how your dog usually behaves.", ANSWER_COUNT);
        println!("Press Ctrl-C to quit.");
        println!();
    }
}
