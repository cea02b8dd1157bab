//! Sentence and word tokenization.
//!
//! Splits a document into sentences and a sentence into word tokens, with
//! punctuation kept as separate tokens so it can reach the grammar.

/// Splits text into sentences.
pub struct SentenceTokenizer;

impl SentenceTokenizer {
    /// Splits at runs of `.`, `!`, `?` or `…` followed by whitespace or the
    /// end of input. Sentences are trimmed; empty ones are dropped.
    #[must_use]
    pub fn split(text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            current.push(ch);
            if !is_terminator(ch) {
                continue;
            }
            while let Some(&next) = chars.peek() {
                if !is_terminator(next) {
                    break;
                }
                current.push(next);
                chars.next();
            }
            if chars.peek().is_none_or(|c| c.is_whitespace()) {
                flush_sentence(&mut sentences, &mut current);
            }
        }

        flush_sentence(&mut sentences, &mut current);
        sentences
    }
}

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | '…')
}

fn flush_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

/// Splits a sentence into word and punctuation tokens.
pub struct WordTokenizer;

impl WordTokenizer {
    /// Tokenizes one sentence.
    ///
    /// - Whitespace separates words
    /// - `, ! ? ; : ( ) "` become tokens of their own
    /// - A run of dots (or `…`) is one token; a single dot between digits
    ///   stays inside the number
    #[must_use]
    pub fn tokenize(sentence: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut chars = sentence.chars().peekable();
        let mut current_word = String::new();

        while let Some(ch) = chars.next() {
            match ch {
                c if c.is_whitespace() => flush_word(&mut tokens, &mut current_word),
                '.' => {
                    let in_number = current_word.chars().last().is_some_and(|c| c.is_ascii_digit())
                        && chars.peek().is_some_and(char::is_ascii_digit);
                    if in_number {
                        current_word.push(ch);
                        continue;
                    }
                    flush_word(&mut tokens, &mut current_word);
                    let mut dots = String::from(".");
                    while chars.peek() == Some(&'.') {
                        dots.push('.');
                        chars.next();
                    }
                    tokens.push(dots);
                }
                '…' => {
                    flush_word(&mut tokens, &mut current_word);
                    tokens.push("...".to_string());
                }
                ',' | '!' | '?' | ';' | ':' | '(' | ')' | '"' => {
                    flush_word(&mut tokens, &mut current_word);
                    tokens.push(ch.to_string());
                }
                _ => current_word.push(ch),
            }
        }

        flush_word(&mut tokens, &mut current_word);
        tokens
    }
}

fn flush_word(tokens: &mut Vec<String>, current_word: &mut String) {
    if !current_word.is_empty() {
        tokens.push(std::mem::take(current_word));
    }
}

/// Removes pictographic emoticons and the textual `;)`.
#[must_use]
pub fn strip_emoticons(text: &str) -> String {
    text.chars()
        .filter(|&c| !is_pictograph(c))
        .collect::<String>()
        .replace(";)", "")
}

fn is_pictograph(c: char) -> bool {
    matches!(
        c,
        '\u{1F300}'..='\u{1F64F}'
            | '\u{1F680}'..='\u{1F6FF}'
            | '\u{2600}'..='\u{26FF}'
            | '\u{2700}'..='\u{27BF}'
    )
}
