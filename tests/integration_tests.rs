//! Integration tests for the public tokenization API.
//!
//! These tests drive the lexer, the strict tokenize driver, error rendering
//! and the REPL the way a downstream parser or the `monkey` binary would.

use std::io::Cursor;

use monkey::{
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    render_error,
    repl::repl::start,
};
use pretty_assertions::assert_eq;

const PROGRAM: &str = "let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
\treturn true;
} else {
\treturn false;
}

10 == 10;
10 != 9;
";

#[test]
fn test_tokenize_program() {
    use TokenKind::*;

    let expected = [
        (Let, "let"),
        (Identifier, "five"),
        (Assignment, "="),
        (Integer, "5"),
        (Semicolon, ";"),
        (Let, "let"),
        (Identifier, "ten"),
        (Assignment, "="),
        (Integer, "10"),
        (Semicolon, ";"),
        (Let, "let"),
        (Identifier, "add"),
        (Assignment, "="),
        (Fn, "fn"),
        (OpenParen, "("),
        (Identifier, "x"),
        (Comma, ","),
        (Identifier, "y"),
        (CloseParen, ")"),
        (OpenCurly, "{"),
        (Identifier, "x"),
        (Plus, "+"),
        (Identifier, "y"),
        (Semicolon, ";"),
        (CloseCurly, "}"),
        (Semicolon, ";"),
        (Let, "let"),
        (Identifier, "result"),
        (Assignment, "="),
        (Identifier, "add"),
        (OpenParen, "("),
        (Identifier, "five"),
        (Comma, ","),
        (Identifier, "ten"),
        (CloseParen, ")"),
        (Semicolon, ";"),
        (Not, "!"),
        (Dash, "-"),
        (Slash, "/"),
        (Star, "*"),
        (Integer, "5"),
        (Semicolon, ";"),
        (Integer, "5"),
        (Less, "<"),
        (Integer, "10"),
        (Greater, ">"),
        (Integer, "5"),
        (Semicolon, ";"),
        (If, "if"),
        (OpenParen, "("),
        (Integer, "5"),
        (Less, "<"),
        (Integer, "10"),
        (CloseParen, ")"),
        (OpenCurly, "{"),
        (Return, "return"),
        (True, "true"),
        (Semicolon, ";"),
        (CloseCurly, "}"),
        (Else, "else"),
        (OpenCurly, "{"),
        (Return, "return"),
        (False, "false"),
        (Semicolon, ";"),
        (CloseCurly, "}"),
        (Integer, "10"),
        (Equals, "=="),
        (Integer, "10"),
        (Semicolon, ";"),
        (Integer, "10"),
        (NotEquals, "!="),
        (Integer, "9"),
        (Semicolon, ";"),
        (EOF, ""),
    ];

    let mut lexer = Lexer::new(PROGRAM);
    for (index, (kind, literal)) in expected.iter().enumerate() {
        let token = lexer.next_token();
        assert_eq!(token.kind, *kind, "token {} kind", index);
        assert_eq!(token.literal, *literal, "token {} literal", index);
    }

    // Still EOF after the end
    assert!(lexer.next_token().is_eof());

    let strict = tokenize(PROGRAM.to_string(), Some("program.mk".to_string())).unwrap();
    assert_eq!(strict.len(), expected.len());
}

#[test]
fn test_independent_lexers_per_thread() {
    let handles: Vec<_> = (0..4)
        .map(|n| {
            std::thread::spawn(move || {
                let source = format!("let x = {};", n);
                Lexer::new(&source)
                    .into_tokens()
                    .map(|token| token.literal)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        let literals = handle.join().unwrap();
        assert_eq!(literals, vec!["let", "x", "=", n.to_string().as_str(), ";", ""]);
    }
}

#[test]
fn test_render_strict_error() {
    let source = "let ok = 1;\nlet bad = 2 # 3;\n";
    let error = tokenize(source.to_string(), Some("bad.mk".to_string())).unwrap_err();

    let expected = "Error: UnrecognisedToken (Unrecognised character `#`)\n\
                    -> bad.mk\n  |\n\
                    2 | let bad = 2 # 3;\n  | ------------^\n";
    assert_eq!(render_error(&error, source), expected);
}

#[test]
fn test_repl_session() {
    let mut output = Vec::new();
    start(Cursor::new("let add = fn(a, b) { a + b };\n"), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    let expected = ">> Let\nIdentifier (add)\nAssignment\nFn\nOpenParen\nIdentifier (a)\nComma\n\
                    Identifier (b)\nCloseParen\nOpenCurly\nIdentifier (a)\nPlus\nIdentifier (b)\n\
                    CloseCurly\nSemicolon\n>> ";
    assert_eq!(output, expected);
}
