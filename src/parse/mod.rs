mod error;
mod grammar;

pub use error::ParseError;

use crate::types::RuleNode;

/// Parse CSS source text into an ordered rule tree.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not valid CSS.
pub fn parse(input: &str) -> Result<Vec<RuleNode>, ParseError> {
    use winnow::Parser;
    grammar::stylesheet
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))
}
