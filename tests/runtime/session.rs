//! Subcommands and REPL evaluation over the bundled data.

use semgram_pipeline::{Analysis, MorphTags, Pipeline, WordLemmaTagDictionary};
use semgram_runtime::commands::{self, load_dictionary, load_vocabulary};
use semgram_runtime::{LineEditor, ReadResult, Repl, ReplOutput};

struct ScriptedEditor {
    lines: std::vec::IntoIter<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> semgram_foundation::Result<ReadResult> {
        Ok(self.lines.next().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn pipeline() -> Pipeline<WordLemmaTagDictionary> {
    let mut dictionary = load_dictionary(None).unwrap();
    dictionary.insert("polévka", Analysis::new("polévka", MorphTags::parse("k1gFnSc1")));
    dictionary.insert("nudle", Analysis::new("nudle", MorphTags::parse("k1gFnPc1")));
    Pipeline::new(dictionary, load_vocabulary(None).unwrap())
}

#[test]
fn compile_bundled_grammar() {
    let compiled = commands::compile(&pipeline(), None).unwrap();
    assert!(compiled.text.contains("POLEVKA: \"#polevka\""));
    assert!(compiled.stats.generated_terminals > 10);
}

#[test]
fn candidates_report() {
    let out = commands::candidates(&mut pipeline(), "Polévka, nudle.").unwrap();
    assert_eq!(
        out,
        "[001] Polévka, nudle.\n  Polévka: #polevka\n  ,: ,\n  nudle: #testoviny\n  > #polevka , #testoviny\n"
    );
}

#[test]
fn repl_evaluates_sentences_and_commands() {
    let mut repl = Repl::with_editor(ScriptedEditor::new(&[]), pipeline()).without_banner();
    assert!(matches!(repl.eval("polévka").unwrap(), ReplOutput::Text(t) if t.contains("> #polevka")));
    assert_eq!(
        repl.eval(":types nudle").unwrap(),
        ReplOutput::Text("nudle: #testoviny\n".to_string())
    );
    assert!(matches!(repl.eval(":grammar").unwrap(), ReplOutput::Text(t) if t.ends_with("%ignore \" \"\n")));
}

#[test]
fn repl_runs_script_to_eof() {
    let editor = ScriptedEditor::new(&["polévka", ":types nic"]);
    let mut repl = Repl::with_editor(editor, pipeline()).without_banner();
    repl.run().unwrap();
    assert_eq!(repl.pipeline().sentence_counter(), 1);
}
