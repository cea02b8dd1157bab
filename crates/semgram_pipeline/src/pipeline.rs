//! Main pipeline.
//!
//! Orchestrates the flow from raw text to parsed sentences:
//! tokenize, analyze each word, map lemmas to semantic types, enumerate
//! combinations and hand every combination to the engine.

use semgram_foundation::Result;
use semgram_grammar::{CompiledGrammar, GrammarAssembler};
use tracing::{debug, info, warn};

use crate::combination::{Combination, WordReadings, combinations, normalize_reading};
use crate::config::PipelineConfig;
use crate::engine::{ParseEngine, ParseOutcome};
use crate::export::{ExportedFiles, TreeExporter};
use crate::morphology::{Analysis, Blocklist, LocalOverrides, MorphAnalyzer};
use crate::tokenizer::{SentenceTokenizer, WordTokenizer, strip_emoticons};
use crate::tree::{ParseTree, align_words};
use crate::vocabulary::Vocabulary;

/// Sentence-final tokens dropped before parsing.
const TRAILING_PUNCTUATION: [&str; 3] = [".", "!", "..."];

/// Lemmas the dictionary returns without tags that are still valid.
const UNTAGGED_LEMMAS: [&str; 1] = ["s"];

/// Why a sentence was not sent to the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing left after tokenization.
    Empty,
    /// No analysis for this word.
    UnknownWord(String),
    /// The word has an analysis without any tags.
    UntaggedWord(String),
    /// Every analysis of this word is a verb.
    ContainsVerb(String),
    /// The word has no reading the grammar can match.
    Unresolvable(String),
}

/// Candidates for one sentence, or why it was skipped.
pub type SentenceOutcome = std::result::Result<SentenceCandidates, SkipReason>;

/// A sentence ready for parsing.
#[derive(Clone, Debug)]
pub struct SentenceCandidates {
    /// Readings per word, trailing punctuation removed.
    pub words: Vec<WordReadings>,
    /// Every engine input for the sentence.
    pub combinations: Vec<Combination>,
}

/// What the pipeline decided for one sentence.
#[derive(Clone, Debug)]
pub struct SentencePlan {
    /// 1-based index across every document processed so far.
    pub index: usize,
    /// The sentence as split from the document.
    pub text: String,
    /// Candidates, or the reason the sentence was skipped.
    pub candidates: SentenceOutcome,
}

/// A combination the engine accepted.
#[derive(Clone, Debug)]
pub struct SuccessfulParse {
    /// 1-based count of successes within the sentence.
    pub variant: usize,
    /// The accepted combination.
    pub combination: Combination,
    /// Every tree the engine returned.
    pub trees: Vec<ParseTree>,
    /// `(word, token)` pairs of the first tree.
    pub aligned: Vec<(String, String)>,
    /// Files written, if an exporter was given.
    pub files: Option<ExportedFiles>,
}

/// Outcome of parsing one sentence.
#[derive(Clone, Debug)]
pub struct SentenceReport {
    /// 1-based sentence index.
    pub index: usize,
    /// The sentence text.
    pub text: String,
    /// Set when the sentence never reached the engine.
    pub skipped: Option<SkipReason>,
    /// Combinations sent to the engine.
    pub tried: usize,
    /// Accepted combinations in order.
    pub successes: Vec<SuccessfulParse>,
}

/// Sentence classification pipeline.
pub struct Pipeline<A: MorphAnalyzer> {
    analyzer: A,
    overrides: LocalOverrides,
    blocklist: Blocklist,
    vocabulary: Vocabulary,
    config: PipelineConfig,
    sentence_counter: usize,
}

impl<A: MorphAnalyzer> Pipeline<A> {
    /// Creates a pipeline with the default overrides, blocklist and
    /// configuration.
    #[must_use]
    pub fn new(analyzer: A, vocabulary: Vocabulary) -> Self {
        Self {
            analyzer,
            overrides: LocalOverrides::default(),
            blocklist: Blocklist::default(),
            vocabulary,
            config: PipelineConfig::default(),
            sentence_counter: 0,
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the local override table.
    #[must_use]
    pub fn with_overrides(mut self, overrides: LocalOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Sets the blocklist.
    #[must_use]
    pub fn with_blocklist(mut self, blocklist: Blocklist) -> Self {
        self.blocklist = blocklist;
        self
    }

    /// The vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Number of sentences processed so far.
    #[must_use]
    pub fn sentence_counter(&self) -> usize {
        self.sentence_counter
    }

    /// Compiles a grammar against the vocabulary's semantic types.
    ///
    /// # Errors
    ///
    /// Propagates grammar preprocessing errors.
    pub fn compile_grammar(&self, source: &str) -> Result<CompiledGrammar> {
        GrammarAssembler::default().compile(source, &self.vocabulary.registry(&self.config))
    }

    /// Analyses of a word from the analyzer and the override table, with
    /// blocked analyses removed. The second value is false if any analysis
    /// came back without tags.
    fn analyze_word(&self, word: &str) -> (Vec<Analysis>, bool) {
        let mut analyses = self.analyzer.analyze(word);
        analyses.extend(self.overrides.analyze(word));
        let tagged = analyses
            .iter()
            .all(|a| !a.tags.is_empty() || UNTAGGED_LEMMAS.contains(&a.lemma.as_str()));
        (self.blocklist.filter(analyses), tagged)
    }

    /// Raw readings of one analysis: its semantic labels, or the lemma.
    fn readings_of(&self, analysis: &Analysis) -> Vec<String> {
        let labels = self
            .vocabulary
            .semtypes_for_lemma(&analysis.lemma, &analysis.tags, &self.config);
        if labels.is_empty() {
            vec![analysis.lemma.clone()]
        } else {
            labels
        }
    }

    /// Plans one sentence without parsing it.
    ///
    /// # Errors
    ///
    /// Returns `TooManyCombinations` if the sentence is too ambiguous.
    pub fn plan_sentence(&self, sentence: &str) -> Result<SentenceOutcome> {
        let cleaned = strip_emoticons(sentence);
        let tokens = WordTokenizer::tokenize(&cleaned);
        if tokens.is_empty() {
            return Ok(Err(SkipReason::Empty));
        }

        let mut raw = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let (analyses, tagged) = self.analyze_word(token);
            if analyses.is_empty() && tagged {
                debug!(word = %token, "unknown token");
                return Ok(Err(SkipReason::UnknownWord(token.clone())));
            }
            if !tagged {
                debug!(word = %token, "token recognized without tags");
                return Ok(Err(SkipReason::UntaggedWord(token.clone())));
            }
            if analyses.iter().all(Analysis::is_verb) {
                return Ok(Err(SkipReason::ContainsVerb(token.clone())));
            }
            let readings: Vec<String> = analyses.iter().flat_map(|a| self.readings_of(a)).collect();
            raw.push(WordReadings::new(token.clone(), readings));
        }

        if raw
            .last()
            .is_some_and(|w| matches!(w.readings.as_slice(), [only] if TRAILING_PUNCTUATION.contains(&only.as_str())))
        {
            raw.pop();
        }
        if raw.is_empty() {
            return Ok(Err(SkipReason::Empty));
        }

        let mut words = Vec::with_capacity(raw.len());
        for word in raw {
            let known: Vec<String> = word
                .readings
                .iter()
                .map(|reading| normalize_reading(reading, &self.config))
                .filter(|reading| !reading.starts_with(&self.config.unknown_prefix))
                .collect();
            if known.is_empty() {
                return Ok(Err(SkipReason::Unresolvable(word.word)));
            }
            words.push(WordReadings::new(word.word, known));
        }

        debug!(readings = ?words, "semantic types for every word in the sentence");
        let combinations = combinations(&words, &self.config)?;
        Ok(Ok(SentenceCandidates {
            words,
            combinations,
        }))
    }

    /// Splits a document and plans every sentence.
    ///
    /// # Errors
    ///
    /// See [`Pipeline::plan_sentence`].
    pub fn candidates(&mut self, text: &str) -> Result<Vec<SentencePlan>> {
        let mut plans = Vec::new();
        for sentence in SentenceTokenizer::split(text) {
            self.sentence_counter += 1;
            plans.push(SentencePlan {
                index: self.sentence_counter,
                candidates: self.plan_sentence(&sentence)?,
                text: sentence,
            });
        }
        Ok(plans)
    }

    /// Parses every sentence of a document with the engine.
    ///
    /// Accepted combinations are exported when an exporter is given.
    ///
    /// # Errors
    ///
    /// Returns planning errors and export I/O errors.
    pub fn parse_document<E: ParseEngine>(
        &mut self,
        text: &str,
        engine: &E,
        exporter: Option<&TreeExporter>,
    ) -> Result<Vec<SentenceReport>> {
        let plans = self.candidates(text)?;
        let mut reports = Vec::with_capacity(plans.len());

        for plan in plans {
            debug!(index = plan.index, "begin of the sentence parsing");
            let mut report = SentenceReport {
                index: plan.index,
                text: plan.text,
                skipped: None,
                tried: 0,
                successes: Vec::new(),
            };

            match plan.candidates {
                Err(reason) => {
                    info!(index = report.index, ?reason, "sentence skipped");
                    report.skipped = Some(reason);
                }
                Ok(candidates) => {
                    let label = strip_emoticons(&report.text);
                    for combination in candidates.combinations {
                        report.tried += 1;
                        let input = combination.input();
                        match engine.parse(&input) {
                            ParseOutcome::Success(trees) if !trees.is_empty() => {
                                let variant = report.successes.len() + 1;
                                let aligned = align_words(&trees[0], &combination.readings);
                                let files = match exporter {
                                    Some(exporter) => Some(exporter.export(
                                        report.index,
                                        variant,
                                        &trees,
                                        &format!("{label}\n{input}"),
                                    )?),
                                    None => None,
                                };
                                report.successes.push(SuccessfulParse {
                                    variant,
                                    combination,
                                    trees,
                                    aligned,
                                    files,
                                });
                            }
                            ParseOutcome::Success(_) => {
                                info!(%input, "engine returned no trees");
                            }
                            ParseOutcome::Failure(message) => {
                                info!(%input, %message, "unable to create a tree");
                            }
                        }
                    }
                }
            }

            if report.successes.is_empty() {
                warn!(sentence = %report.text, "unable to create any parsing tree");
            }
            debug!(index = report.index, "end of the sentence parsing");
            reports.push(report);
        }

        Ok(reports)
    }
}
