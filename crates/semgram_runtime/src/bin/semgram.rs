//! semgram CLI entry point.

use std::env;
use std::fs;
use std::process::ExitCode;

use semgram_pipeline::Pipeline;
use semgram_runtime::commands::{self, load_dictionary, load_vocabulary};
use semgram_runtime::{CliConfig, Command, Repl, init_logging};

fn main() -> ExitCode {
    match run(env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(args: impl IntoIterator<Item = String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("semgram {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(command) = config.command else {
        print_help();
        return Ok(());
    };

    init_logging(config.log_level.as_deref())?;

    let vocabulary = load_vocabulary(config.vocabulary.as_deref())?;
    let dictionary = load_dictionary(config.dictionary.as_deref())?;
    let mut pipeline = Pipeline::new(dictionary, vocabulary);

    match command {
        Command::Compile => {
            let compiled = commands::compile(&pipeline, config.input.as_deref())?;
            println!("{}", compiled.text);
        }
        Command::Candidates => {
            let Some(input) = config.input.as_deref() else {
                return Err("candidates requires an input file".into());
            };
            let text = fs::read_to_string(input)?;
            print!("{}", commands::candidates(&mut pipeline, &text)?);
        }
        Command::Repl => Repl::new(pipeline)?.run()?,
    }

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1msemgram\x1b[0m - semantic-type sentence classification

\x1b[1mUSAGE:\x1b[0m
    semgram <COMMAND> [OPTIONS]

\x1b[1mCOMMANDS:\x1b[0m
    compile [GRAMMAR]     Print the compiled grammar (bundled grammar if omitted)
    candidates <INPUT>    Print the engine inputs of every sentence in INPUT
    repl                  Analyze sentences interactively

\x1b[1mOPTIONS:\x1b[0m
    --vocabulary FILE     type:word records (bundled vocabulary if omitted)
    --dictionary FILE     word:lemma:tag morphology records
    --log-level LEVEL     Log filter, overrides the LOGLEVEL variable
    -h, --help            Print help information
    -V, --version         Print version information

\x1b[1mEXAMPLES:\x1b[0m
    semgram compile > food.lark
    semgram compile my.grammar --vocabulary words.txt
    semgram candidates menu.txt --dictionary morph.txt
    LOGLEVEL=debug semgram repl --dictionary morph.txt"
    );
}
