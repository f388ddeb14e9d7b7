mod grammar;
mod tokens;

pub use tokens::RuleTokens;

pub(crate) use grammar::decimal;

use crate::RuleError;

/// Split rule text into trimmed, non-empty lines.
pub fn lines(input: &str) -> impl Iterator<Item = &str> {
    input.split('\n').map(str::trim).filter(|line| !line.is_empty())
}

/// Split one trimmed rule line into `(field, operator, literal)`.
///
/// # Errors
///
/// Returns [`RuleError::MalformedRule`] unless the line splits into exactly
/// three non-empty parts.
pub fn tokenize_line(line: &str) -> Result<RuleTokens<'_>, RuleError> {
    use winnow::Parser;
    grammar::rule_line
        .parse(line)
        .map_err(|_| RuleError::MalformedRule {
            line: line.to_owned(),
        })
}

/// Tokenize every rule line of `input`. Empty or whitespace-only input yields
/// no lines.
///
/// # Errors
///
/// Returns the [`RuleError::MalformedRule`] of the first malformed line.
pub fn tokenize(input: &str) -> Result<Vec<RuleTokens<'_>>, RuleError> {
    lines(input).map(tokenize_line).collect()
}
