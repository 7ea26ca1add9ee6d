//! A small recursive-descent parser for textual type annotations.
//!
//! Grammar:
//!
//! ```text
//! expr  := name ('[' expr (',' expr)* ']')? | '...'
//! name  := ident ('.' ident)*
//! ```
//!
//! The parser is deliberately strict: anything outside the grammar is a
//! parse error, which the caller maps to the UNKNOWN sentinel.

/// A parsed annotation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExpr {
    /// A dotted name, one segment per element.
    Name(Vec<String>),
    /// `base[param, ...]`.
    Subscript(Box<TypeExpr>, Vec<TypeExpr>),
    /// The literal `...`.
    Ellipsis,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Ident(String),
    Dot,
    Open,
    Close,
    Comma,
    Ellipsis,
}

/// Parse error: the annotation does not fit the grammar. Carries no payload
/// because every failure collapses to UNKNOWN.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError;

pub fn parse(input: &str) -> Result<TypeExpr, ParseError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, at: 0 };
    let expr = parser.expr()?;
    if parser.at != parser.tokens.len() {
        return Err(ParseError);
    }
    Ok(expr)
}

fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b' ' | b'\t' => i += 1,
            b'.' => {
                if bytes[i..].starts_with(b"...") {
                    tokens.push(Token::Ellipsis);
                    i += 3;
                } else {
                    tokens.push(Token::Dot);
                    i += 1;
                }
            }
            b'[' => {
                tokens.push(Token::Open);
                i += 1;
            }
            b']' => {
                tokens.push(Token::Close);
                i += 1;
            }
            b',' => {
                tokens.push(Token::Comma);
                i += 1;
            }
            b'A'..=b'Z' | b'a'..=b'z' | b'_' => {
                let start = i;
                while i < bytes.len()
                    && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_')
                {
                    i += 1;
                }
                tokens.push(Token::Ident(input[start..i].to_string()));
            }
            _ => return Err(ParseError),
        }
    }
    if tokens.is_empty() {
        return Err(ParseError);
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    at: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.at)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.at).cloned();
        if token.is_some() {
            self.at += 1;
        }
        token
    }

    fn expr(&mut self) -> Result<TypeExpr, ParseError> {
        match self.bump() {
            Some(Token::Ellipsis) => Ok(TypeExpr::Ellipsis),
            Some(Token::Ident(first)) => {
                let mut segments = vec![first];
                while self.peek() == Some(&Token::Dot) {
                    self.bump();
                    match self.bump() {
                        Some(Token::Ident(next)) => segments.push(next),
                        _ => return Err(ParseError),
                    }
                }
                let name = TypeExpr::Name(segments);
                if self.peek() == Some(&Token::Open) {
                    self.bump();
                    let mut params = vec![self.expr()?];
                    while self.peek() == Some(&Token::Comma) {
                        self.bump();
                        params.push(self.expr()?);
                    }
                    if self.bump() != Some(Token::Close) {
                        return Err(ParseError);
                    }
                    Ok(TypeExpr::Subscript(Box::new(name), params))
                } else {
                    Ok(name)
                }
            }
            _ => Err(ParseError),
        }
    }
}
