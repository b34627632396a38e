//! Integration tests for the front end.
//!
//! These tests run whole Decaf programs through scanning and grammar
//! recognition, and check source loading and diagnostic rendering.

use std::{path::Path, rc::Rc};

use decaf_frontend::{
    errors::errors::ErrorImpl,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
    read_source, render_error,
};
use pretty_assertions::assert_eq;

const PROGRAM: &str = r#"// Sum the first ten integers and report parity.
int total;
string label;

int add(int x, int y) {
    return x + y;
}

void main() {
    int i;
    int[10] values;
    total = 0;
    /* fill, then sum */
    for (i = 0; i < 10; i = i + 1) {
        values[i] = i * 2;
        total = add(total, values[i]);
    }
    if (total % 2 == 0 && !false) {
        label = "even";
    } else {
        label = "odd";
    }
    while (i > 0) { i = i - 1; if (i == 5) break; }
    Print("total: ", total, label);
}
"#;

#[test]
fn test_program_scans_cleanly() {
    let scan = tokenize(PROGRAM, Some("sum.decaf".to_string()));
    assert!(!scan.has_errors(), "{:?}", scan.diagnostics);

    let first = &scan.tokens[0];
    assert_eq!(first.kind, TokenKind::Int);
    assert_eq!((first.line(), first.col_start(), first.col_end()), (2, 1, 3));

    let print = scan
        .tokens
        .iter()
        .find(|token| token.kind == TokenKind::Print)
        .unwrap();
    assert_eq!((print.line(), print.col_start()), (24, 5));
}

#[test]
fn test_program_is_recognized() {
    let scan = tokenize(PROGRAM, Some("sum.decaf".to_string()));
    let (_, result) = parse(scan.tokens, Rc::new("sum.decaf".to_string()));
    assert_eq!(result.unwrap(), 4);
}

#[test]
fn test_token_dump() {
    let scan = tokenize("int x = 42;\nPrint(\"hi\", true);", None);
    let dump: Vec<String> = scan.tokens.iter().map(|token| token.to_string()).collect();

    assert_eq!(
        dump,
        vec![
            "int\tline 1 cols 1-3 is T_Int",
            "x\tline 1 cols 5-5 is T_Identifier",
            "=\tline 1 cols 7-7 is '='",
            "42\tline 1 cols 9-10 is T_IntConstant (value= 42)",
            ";\tline 1 cols 11-11 is ';'",
            "Print\tline 2 cols 1-5 is T_Print",
            "(\tline 2 cols 6-6 is '('",
            "\"hi\"\tline 2 cols 7-10 is T_StringConstant (value= \"hi\")",
            ",\tline 2 cols 11-11 is ','",
            "true\tline 2 cols 13-16 is T_BoolConstant (value= true)",
            ")\tline 2 cols 17-17 is ')'",
            ";\tline 2 cols 18-18 is ';'",
        ]
    );
}

#[test]
fn test_lexical_and_syntax_errors_are_independent() {
    let source = "int x;\nvoid f() {\n  x = 1 $ 2;\n  x = ;\n}\n";
    let scan = tokenize(source, Some("bad.decaf".to_string()));

    assert_eq!(scan.diagnostics.len(), 1);
    assert_eq!(
        *scan.diagnostics[0].kind(),
        ErrorImpl::IllegalCharacter { character: '$' }
    );

    let (_, result) = parse(scan.tokens, Rc::new("bad.decaf".to_string()));
    let error = result.unwrap_err();
    assert_eq!(error.get_position().line, 3);
    assert_eq!(*error.kind(), ErrorImpl::UnexpectedToken { token: "2".to_string() });
}

#[test]
fn test_rendered_syntax_error() {
    let source = "int x;\nvoid f() {\n    x = ;\n}\n";
    let scan = tokenize(source, Some("bad.decaf".to_string()));
    let (_, result) = parse(scan.tokens, Rc::new("bad.decaf".to_string()));
    let error = result.unwrap_err();

    assert_eq!(
        render_error(&error, source),
        "Error: UnexpectedTokenDetailed (Unexpected token: `;`, expected an expression)\n-> bad.decaf\n  |\n3 | x = ;\n  | ----^\n"
    );
}

#[test]
fn test_rendered_unterminated_string() {
    let source = "string s;\ns = \"open\n";
    let scan = tokenize(source, Some("str.decaf".to_string()));

    assert_eq!(scan.diagnostics.len(), 1);
    let rendered = render_error(&scan.diagnostics[0], source);
    assert!(rendered.starts_with("Error: UnterminatedString"), "{}", rendered);
    assert!(rendered.contains("-> str.decaf\n"));
    assert!(rendered.ends_with("2 | s = \"open\n  | ----^\n"), "{}", rendered);
}

#[test]
fn test_read_missing_source() {
    let error = read_source(Path::new("definitely/not/here.decaf")).unwrap_err();
    assert!(
        error.to_string().starts_with("Error opening \"definitely/not/here.decaf\": "),
        "{}",
        error
    );
}

#[test]
fn test_read_existing_source() {
    let path = std::env::temp_dir().join("decaf_frontend_read_source.decaf");
    std::fs::write(&path, "int x;\n").unwrap();

    assert_eq!(read_source(&path).unwrap(), "int x;\n");
    std::fs::remove_file(&path).unwrap();
}
