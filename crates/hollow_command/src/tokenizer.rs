//! Input tokenization.
//!
//! Converts a raw input line into a command word and an optional argument.

/// A tokenized input line.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TokenizedInput {
    /// The first word, lower-cased. `None` for a blank line.
    pub verb: Option<String>,
    /// The remaining words joined by single spaces. `None` when there are none.
    pub argument: Option<String>,
}

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input line.
    ///
    /// - Converts the whole line to lowercase
    /// - Splits on any run of whitespace
    /// - Rejoins everything after the first word with single spaces
    #[must_use]
    pub fn tokenize(input: &str) -> TokenizedInput {
        let lowered = input.to_lowercase();
        let mut words = lowered.split_whitespace();

        let verb = words.next().map(str::to_string);
        let rest: Vec<&str> = words.collect();
        let argument = if rest.is_empty() {
            None
        } else {
            Some(rest.join(" "))
        };

        TokenizedInput { verb, argument }
    }
}
