//! Interactive sentence analysis.
//!
//! Each input line is treated as a short document: it is split into
//! sentences and the engine inputs of every sentence are printed. Lines
//! starting with `:` are commands.

use std::io::{self, Write};

use semgram_foundation::{Error, Result};
use semgram_pipeline::{Pipeline, WordLemmaTagDictionary};

use crate::commands;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};

const COMMANDS: [&str; 4] = [":help", ":grammar", ":types", ":quit"];

/// What a REPL line produced.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplOutput {
    /// Text to print.
    Text(String),
    /// Leave the loop.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,
    pipeline: Pipeline<WordLemmaTagDictionary>,
    show_banner: bool,
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(pipeline: Pipeline<WordLemmaTagDictionary>) -> Result<Self> {
        Ok(Self::with_editor(RustylineEditor::new()?, pipeline))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(mut editor: E, pipeline: Pipeline<WordLemmaTagDictionary>) -> Self {
        editor.set_keywords(keywords(&pipeline));
        Self {
            editor,
            pipeline,
            show_banner: true,
            prompt: "semgram> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The pipeline behind the REPL.
    #[must_use]
    pub const fn pipeline(&self) -> &Pipeline<WordLemmaTagDictionary> {
        &self.pipeline
    }

    /// Runs the loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    println!();
                    continue;
                }
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval(&line) {
                Ok(ReplOutput::Text(text)) => print!("{text}"),
                Ok(ReplOutput::Quit) => break,
                Err(e) => print_error(&e),
            }
            let _ = io::stdout().flush();
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Evaluates one line.
    ///
    /// # Errors
    ///
    /// Returns planning and grammar errors.
    pub fn eval(&mut self, line: &str) -> Result<ReplOutput> {
        let line = line.trim();
        let Some(command) = line.strip_prefix(':') else {
            return commands::candidates(&mut self.pipeline, line).map(ReplOutput::Text);
        };

        let (name, argument) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, rest)| (name, rest.trim()));
        match name {
            "q" | "quit" => Ok(ReplOutput::Quit),
            "grammar" => {
                let compiled = commands::compile(&self.pipeline, None)?;
                Ok(ReplOutput::Text(compiled.text + "\n"))
            }
            "types" => Ok(ReplOutput::Text(self.types_of(argument))),
            _ => Ok(ReplOutput::Text(help_text())),
        }
    }

    fn types_of(&self, word: &str) -> String {
        match self.pipeline.vocabulary().types_of(word) {
            Some(types) => {
                let types: Vec<&str> = types.iter().map(String::as_str).collect();
                format!("{word}: {}\n", types.join(" "))
            }
            None => format!("{word}: not in the vocabulary\n"),
        }
    }
}

fn keywords(pipeline: &Pipeline<WordLemmaTagDictionary>) -> Vec<String> {
    COMMANDS
        .iter()
        .map(ToString::to_string)
        .chain(pipeline.vocabulary().words().map(ToString::to_string))
        .collect()
}

fn help_text() -> String {
    "\
:grammar        print the bundled grammar compiled against the vocabulary
:types WORD     list the semantic types of a vocabulary word
:quit           exit
any other line  split into sentences and list the engine inputs
"
    .to_string()
}

fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

fn print_banner() {
    println!("semgram {}", env!("CARGO_PKG_VERSION"));
    println!("Type a sentence to list its readings, :help for commands, Ctrl+D to exit.\n");
    let _ = io::stdout().flush();
}
