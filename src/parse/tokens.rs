/// A rule line split into its three raw tokens.
///
/// The operator is kept as text: the tokenizer only guarantees the shape
/// `<field> <operator> <literal>`; the validator decides whether the operator
/// is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTokens<'a> {
    /// The whole trimmed line, for diagnostics.
    pub line: &'a str,
    pub field: &'a str,
    pub operator: &'a str,
    pub literal: &'a str,
}
