use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{one_of, rest, take_till, take_while};

use super::tokens::RuleTokens;

// -- Rule lines -------------------------------------------------------------

/// Characters that make up operator tokens. A rule splits at the first run
/// of these, so the longest operator is always captured whole.
pub(crate) fn is_operator_char(c: char) -> bool {
    matches!(c, '=' | '!' | '<' | '>')
}

fn field<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_till(1.., is_operator_char)
        .map(str::trim)
        .verify(|f: &str| !f.is_empty())
        .parse_next(input)
}

fn operator<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_operator_char).parse_next(input)
}

/// Characters present in every operator token. A lone `!` is not an
/// operator, so it may appear inside a literal.
fn is_split_char(c: char) -> bool {
    matches!(c, '=' | '<' | '>')
}

// A second operator inside the literal would split the line into more than
// three parts.
fn literal<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    rest.map(str::trim)
        .verify(|l: &str| !l.is_empty() && !l.contains(is_split_char))
        .parse_next(input)
}

pub(crate) fn rule_line<'i>(input: &mut &'i str) -> ModalResult<RuleTokens<'i>> {
    let line = *input;
    let (field, operator, literal) = (field, operator, literal).parse_next(input)?;
    Ok(RuleTokens {
        line,
        field,
        operator,
        literal,
    })
}

// -- Numbers ----------------------------------------------------------------

/// A plain decimal number: optional sign, digits with an optional fraction,
/// optional exponent. Hex, `Infinity` and `NaN` are not numbers here.
pub(crate) fn decimal(input: &mut &str) -> ModalResult<f64> {
    (
        opt(one_of(['+', '-'])),
        alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void())),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .try_map(|s: &str| s.parse::<f64>())
        .verify(|n: &f64| n.is_finite())
        .parse_next(input)
}
