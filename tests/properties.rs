//! Property-based tests for the scanner and the grammar recognizer.
//!
//! These tests use proptest to generate random inputs and check that
//! token positions always agree with the source text and that neither
//! stage panics on malformed programs.

use std::rc::Rc;

use decaf_frontend::{lexer::lexer::tokenize, parser::parser::parse};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Arbitrary text, newlines and multibyte characters included
fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..100).prop_map(|chars| chars.into_iter().collect())
}

/// Text biased towards the characters the scanner cares about
fn arb_decaf_soup() -> impl Strategy<Value = String> {
    "[a-z0-9_ \n\t/*\"<>=!&|+;{}()@#-]{0,80}"
}

/// Identifiers that can never collide with a reserved word
fn arb_ident() -> impl Strategy<Value = String> {
    "v_[a-z0-9_]{0,8}"
}

fn arb_binop() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("+"),
        Just("-"),
        Just("*"),
        Just("/"),
        Just("%"),
        Just("=="),
        Just("!="),
        Just("<"),
        Just(">"),
        Just("<="),
        Just(">="),
        Just("<<"),
        Just(">>"),
        Just("&&"),
        Just("||"),
    ]
}

fn arb_simple_expr() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1_000_000).prop_map(|n| n.to_string()),
        "[a-zA-Z0-9_ ]{0,12}".prop_map(|s| format!("\"{}\"", s)),
        Just("true".to_string()),
        Just("false".to_string()),
        Just("null".to_string()),
        arb_ident(),
    ]
}

/// Expressions built from prefix, binary, call, index and grouping forms
fn arb_expr() -> impl Strategy<Value = String> {
    arb_simple_expr().prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), arb_binop(), inner.clone())
                .prop_map(|(left, op, right)| format!("{} {} {}", left, op, right)),
            inner.clone().prop_map(|e| format!("!{}", e)),
            inner.clone().prop_map(|e| format!("-{}", e)),
            inner.clone().prop_map(|e| format!("({})", e)),
            (arb_ident(), inner.clone()).prop_map(|(name, e)| format!("{}[{}]", name, e)),
            (arb_ident(), prop::collection::vec(inner, 0..3))
                .prop_map(|(name, args)| format!("{}({})", name, args.join(", "))),
        ]
    })
}

fn line_and_column(source: &str, offset: usize) -> (u32, u32) {
    let prefix = &source[..offset];
    let line = prefix.matches('\n').count() as u32 + 1;
    let line_start = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = prefix[line_start..].chars().count() as u32 + 1;
    (line, column)
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every token's span slices out exactly its lexeme, in source order
    #[test]
    fn token_spans_match_source(input in prop_oneof![arb_text(), arb_decaf_soup()]) {
        let scan = tokenize(&input, None);
        let mut previous_end = 0;

        for token in &scan.tokens {
            let start = token.span.start.offset as usize;
            let end = token.span.end.offset as usize;

            prop_assert!(start >= previous_end, "overlapping token {}", token);
            prop_assert!(end > start, "empty token {}", token);
            prop_assert_eq!(&input[start..end], token.lexeme.as_str());
            previous_end = end;
        }
    }

    /// Reported line and column agree with a recount from the source
    #[test]
    fn positions_match_recount(input in prop_oneof![arb_text(), arb_decaf_soup()]) {
        let scan = tokenize(&input, None);

        for token in &scan.tokens {
            let expected = line_and_column(&input, token.span.start.offset as usize);
            prop_assert_eq!((token.line(), token.col_start()), expected, "token {}", token);
            prop_assert!(token.col_end() >= token.col_start());
        }

        for diagnostic in &scan.diagnostics {
            let position = diagnostic.get_position();
            let expected = line_and_column(&input, position.offset as usize);
            prop_assert_eq!((position.line, position.column), expected, "{}", diagnostic);
        }
    }

    /// Without comments, strings or operators every non-blank character lands in a token
    #[test]
    fn lexemes_cover_words(input in "[a-z0-9_ \n\t]{0,60}") {
        let scan = tokenize(&input, None);

        let rebuilt: String = scan.tokens.iter().map(|token| token.lexeme.as_str()).collect();
        let expected: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(rebuilt, expected);
    }

    /// The recognizer reports at most one error, inside the source, and never panics
    #[test]
    fn recognizer_no_panic(input in prop_oneof![arb_text(), arb_decaf_soup()]) {
        let scan = tokenize(&input, None);
        let (_, result) = parse(scan.tokens, Rc::new("<input>".to_string()));

        if let Err(error) = result {
            prop_assert!(error.get_position().offset as usize <= input.len());
        }
    }

    /// Well formed expressions are accepted in statement position
    #[test]
    fn valid_expression_statement(expr in arb_expr()) {
        let source = format!("void main() {{ v_target = {}; }}", expr);
        let scan = tokenize(&source, None);
        prop_assert!(!scan.has_errors(), "scan errors for {}", source);

        let (_, result) = parse(scan.tokens, Rc::new("<input>".to_string()));
        prop_assert!(result.is_ok(), "{:?} for {}", result.err(), source);
    }

    /// Declarations with any identifier and array suffixes are accepted
    #[test]
    fn valid_declarations(
        name in arb_ident(),
        ty in prop_oneof![Just("int"), Just("bool"), Just("string")],
        dims in prop::collection::vec(prop::option::of(0u32..100), 0..3),
    ) {
        let suffix: String = dims
            .iter()
            .map(|dim| dim.map(|n| format!("[{}]", n)).unwrap_or_else(|| "[]".to_string()))
            .collect();
        let source = format!("{}{} {};\nvoid f({}{} p) {{ {}{} l; }}", ty, suffix, name, ty, suffix, ty, suffix);

        let scan = tokenize(&source, None);
        let (_, result) = parse(scan.tokens, Rc::new("<input>".to_string()));
        prop_assert_eq!(result.ok(), Some(2), "{}", source);
    }
}
