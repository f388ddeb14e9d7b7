use proptest::prelude::*;
use segrule::{coerce, compile, Clause, ErrorKind, FieldSchema, Operator, RuleError, Value};

proptest! {
    /// Compiling arbitrary text never panics; it either compiles or names a line.
    #[test]
    fn compile_never_panics(input in any::<String>()) {
        let schema = FieldSchema::catalog();
        if let Err(err) = compile(&input, &schema) {
            prop_assert!(input.contains(err.line()));
        }
    }

    /// A non-blank line without any operator character is always malformed.
    #[test]
    fn line_without_operator_is_malformed(line in "[a-z_0-9 .]{1,24}") {
        prop_assume!(!line.trim().is_empty());
        let err = compile(&line, &FieldSchema::catalog()).unwrap_err();
        prop_assert_eq!(err, RuleError::MalformedRule { line: line.trim().to_owned() });
    }

    /// A rule with nothing after the operator is always malformed.
    #[test]
    fn missing_value_is_malformed(
        op in prop::sample::select(&[">", "<", ">=", "<=", "=", "!="][..]),
        pad in "[ \t]{0,3}",
    ) {
        let line = format!("price {op}{pad}");
        let err = compile(&line, &FieldSchema::catalog()).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::MalformedRule);
    }

    /// `>=` and `<=` are never split into a one-character operator.
    #[test]
    fn two_char_operators_kept_whole(n in 0_u32..100_000, spaced in any::<bool>(), ge in any::<bool>()) {
        let (token, expected) = if ge { (">=", Operator::Gte) } else { ("<=", Operator::Lte) };
        let line = if spaced {
            format!("stock_quantity {token} {n}")
        } else {
            format!("stock_quantity{token}{n}")
        };
        let predicate = compile(&line, &FieldSchema::catalog()).unwrap();
        prop_assert_eq!(
            predicate.clause("stock_quantity"),
            Some(&Clause::Compare { op: expected, value: Value::Number(f64::from(n)) })
        );
    }

    /// Every finite number written in decimal coerces back to itself.
    #[test]
    fn finite_numbers_coerce_to_numbers(n in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        prop_assert_eq!(coerce(&n.to_string()), Value::Number(n));
    }

    /// Alphabetic words other than `true`/`false` stay strings, unchanged.
    #[test]
    fn words_stay_strings(word in "[A-Za-z_]{1,12}") {
        prop_assume!(word != "true" && word != "false");
        prop_assert_eq!(coerce(&word), Value::String(word.clone()));
    }
}
