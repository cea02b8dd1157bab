//! Command-line configuration.

use std::path::PathBuf;

use semgram_foundation::{Error, ErrorKind, Result};

/// Subcommand selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the compiled grammar.
    Compile,
    /// Print the engine inputs of every sentence of a document.
    Candidates,
    /// Interactive sentence analysis.
    Repl,
}

impl Command {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "compile" => Some(Self::Compile),
            "candidates" => Some(Self::Candidates),
            "repl" => Some(Self::Repl),
            _ => None,
        }
    }
}

/// CLI configuration parsed from arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Selected subcommand; `None` when only help or version was asked for.
    pub command: Option<Command>,
    /// Grammar file for `compile`, document for `candidates`.
    pub input: Option<PathBuf>,
    /// `type:word` vocabulary file.
    pub vocabulary: Option<PathBuf>,
    /// `word:lemma:tag` dictionary file.
    pub dictionary: Option<PathBuf>,
    /// Log filter directive overriding `LOGLEVEL`.
    pub log_level: Option<String>,
    /// Print help and exit.
    pub show_help: bool,
    /// Print the version and exit.
    pub show_version: bool,
}

impl CliConfig {
    /// Parses arguments, the first of which is the program name.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error for unknown options or subcommands, a missing
    /// option value, a missing `candidates` input, or extra positional
    /// arguments.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().skip(1);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "-V" | "--version" => config.show_version = true,
                "--vocabulary" => config.vocabulary = Some(value_of(&arg, args.next())?.into()),
                "--dictionary" => config.dictionary = Some(value_of(&arg, args.next())?.into()),
                "--log-level" => config.log_level = Some(value_of(&arg, args.next())?),
                option if option.starts_with('-') => {
                    return Err(usage(format!("unknown option: {option}")));
                }
                positional => {
                    if config.command.is_none() {
                        config.command = Some(Command::from_name(positional).ok_or_else(|| {
                            usage(format!("unknown command: {positional}"))
                        })?);
                    } else if config.input.is_none() && config.command != Some(Command::Repl) {
                        config.input = Some(PathBuf::from(positional));
                    } else {
                        return Err(usage(format!("unexpected argument: {positional}")));
                    }
                }
            }
        }

        if config.command == Some(Command::Candidates)
            && config.input.is_none()
            && !config.show_help
        {
            return Err(usage("candidates requires an input file"));
        }

        Ok(config)
    }
}

fn value_of(option: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| usage(format!("{option} requires a value")))
}

fn usage(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::Config(message.into()))
}
