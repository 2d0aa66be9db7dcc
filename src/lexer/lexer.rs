use std::rc::Rc;

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Pull-based scanner over a single source string.
///
/// `current` is `None` once the cursor has moved past the last character.
#[derive(Debug, Clone)]
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    read_position: usize,
    current: Option<char>,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let mut lexer = Lexer {
            input: source.chars().collect(),
            position: 0,
            read_position: 0,
            current: None,
        };

        lexer.read_char();
        lexer
    }

    /// Index of the character under the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.current else {
            return MK_TOKEN!(TokenKind::EOF, String::new());
        };

        let token = match ch {
            '=' if self.peek_char() == Some('=') => self.two_char_token(TokenKind::Equals),
            '!' if self.peek_char() == Some('=') => self.two_char_token(TokenKind::NotEquals),
            '=' => MK_TOKEN!(TokenKind::Assignment, ch.to_string()),
            '!' => MK_TOKEN!(TokenKind::Not, ch.to_string()),
            '+' => MK_TOKEN!(TokenKind::Plus, ch.to_string()),
            '-' => MK_TOKEN!(TokenKind::Dash, ch.to_string()),
            '*' => MK_TOKEN!(TokenKind::Star, ch.to_string()),
            '/' => MK_TOKEN!(TokenKind::Slash, ch.to_string()),
            '<' => MK_TOKEN!(TokenKind::Less, ch.to_string()),
            '>' => MK_TOKEN!(TokenKind::Greater, ch.to_string()),
            ',' => MK_TOKEN!(TokenKind::Comma, ch.to_string()),
            ';' => MK_TOKEN!(TokenKind::Semicolon, ch.to_string()),
            '(' => MK_TOKEN!(TokenKind::OpenParen, ch.to_string()),
            ')' => MK_TOKEN!(TokenKind::CloseParen, ch.to_string()),
            '{' => MK_TOKEN!(TokenKind::OpenCurly, ch.to_string()),
            '}' => MK_TOKEN!(TokenKind::CloseCurly, ch.to_string()),
            // Identifiers and integers leave the cursor on the first
            // character after the run, so they must not advance again.
            _ if is_letter(ch) => {
                let literal = self.read_identifier();
                return MK_TOKEN!(lookup_identifier(&literal), literal);
            }
            _ if is_digit(ch) => {
                let literal = self.read_number();
                return MK_TOKEN!(TokenKind::Integer, literal);
            }
            _ => MK_TOKEN!(TokenKind::Illegal, ch.to_string()),
        };

        self.read_char();
        token
    }

    /// Consumes the rest of the input lazily, ending with the first EOF token.
    pub fn into_tokens(self) -> Tokens {
        Tokens {
            lexer: self,
            finished: false,
        }
    }

    fn read_char(&mut self) {
        self.current = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> Option<char> {
        self.input.get(self.read_position).copied()
    }

    fn two_char_token(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        self.read_char();
        MK_TOKEN!(kind, self.slice(start, self.read_position))
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while self.current.is_some_and(is_letter) {
            self.read_char();
        }

        self.slice(start, self.position)
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while self.current.is_some_and(is_digit) {
            self.read_char();
        }

        self.slice(start, self.position)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.input[start..end].iter().collect()
    }
}

pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Iterator over a [`Lexer`]'s tokens. Yields exactly one EOF token.
#[derive(Debug, Clone)]
pub struct Tokens {
    lexer: Lexer,
    finished: bool,
}

impl Iterator for Tokens {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.lexer.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

/// Tokenizes `source` up to and including EOF, rejecting illegal characters.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let file_name = if let Some(file) = file {
        Rc::new(file)
    } else {
        Rc::new(String::from("shell"))
    };

    let mut lex = Lexer::new(&source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();

        match token.kind {
            TokenKind::Illegal => {
                // Illegal tokens are always one character and the cursor has
                // already stepped past it.
                let offset = lex.position() - 1;
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token: token.literal },
                    Position(offset as u32, Rc::clone(&file_name)),
                ));
            }
            TokenKind::EOF => {
                tokens.push(token);
                break;
            }
            _ => tokens.push(token),
        }
    }

    tracing::debug!(file = %file_name, count = tokens.len(), "tokenized");
    Ok(tokens)
}
