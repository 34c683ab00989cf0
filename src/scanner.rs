use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::error::DiagnosticSink;
use crate::error::ScanError;
use crate::token::{Literal, Token, TokenType};

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenType> = {
        let mut keywords = HashMap::new();
        keywords.insert("and", TokenType::And);
        keywords.insert("class", TokenType::Class);
        keywords.insert("else", TokenType::Else);
        keywords.insert("false", TokenType::False);
        keywords.insert("for", TokenType::For);
        keywords.insert("fun", TokenType::Fun);
        keywords.insert("if", TokenType::If);
        keywords.insert("nil", TokenType::Nil);
        keywords.insert("or", TokenType::Or);
        keywords.insert("print", TokenType::Print);
        keywords.insert("return", TokenType::Return);
        keywords.insert("super", TokenType::Super);
        keywords.insert("this", TokenType::This);
        keywords.insert("true", TokenType::True);
        keywords.insert("var", TokenType::Var);
        keywords.insert("while", TokenType::While);
        keywords
    };
}

pub struct Scanner {
    source: String,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: u32,
}

impl Scanner {
    pub fn new(source: String) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the whole source. Never fails: malformed input goes to the
    /// sink and scanning resumes at the next character. The returned
    /// stream always ends with a single Eof token.
    pub fn scan_tokens(mut self, sink: &mut dyn DiagnosticSink) -> Vec<Token> {
        while !self.is_end() {
            self.start = self.current;
            self.scan_token(sink);
        }

        self.tokens
            .push(Token::new(TokenType::Eof, String::new(), None, self.line));
        self.tokens
    }

    fn scan_token(&mut self, sink: &mut dyn DiagnosticSink) {
        let c = self.next_char();
        match c {
            '(' => self.make_token(TokenType::LeftParen),
            ')' => self.make_token(TokenType::RightParen),
            '{' => self.make_token(TokenType::LeftBrace),
            '}' => self.make_token(TokenType::RightBrace),
            ',' => self.make_token(TokenType::Comma),
            '.' => self.make_token(TokenType::Dot),
            '-' => self.make_token(TokenType::Minus),
            '+' => self.make_token(TokenType::Plus),
            ';' => self.make_token(TokenType::Semicolon),
            '*' => self.make_token(TokenType::Star),
            '!' => {
                if self.match_next('=') {
                    self.make_token(TokenType::BangEqual)
                } else {
                    self.make_token(TokenType::Bang)
                }
            }
            '=' => {
                if self.match_next('=') {
                    self.make_token(TokenType::EqualEqual)
                } else {
                    self.make_token(TokenType::Equal)
                }
            }
            '<' => {
                if self.match_next('=') {
                    self.make_token(TokenType::LessEqual)
                } else {
                    self.make_token(TokenType::Less)
                }
            }
            '>' => {
                if self.match_next('=') {
                    self.make_token(TokenType::GreaterEqual)
                } else {
                    self.make_token(TokenType::Greater)
                }
            }
            '/' => {
                if self.match_next('/') {
                    // Line comment, discarded up to (not including) the newline.
                    while self.peek_char() != '\n' && !self.is_end() {
                        let _ = self.next_char();
                    }
                } else {
                    self.make_token(TokenType::Slash)
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string(sink),
            '0'..='9' => self.number(),
            'a'..='z' | 'A'..='Z' | '_' => self.identifier(),
            _ => sink.report(self.line, &ScanError::UnexpectedCharacter(c).to_string()),
        }
    }

    fn string(&mut self, sink: &mut dyn DiagnosticSink) {
        while self.peek_char() != '"' && !self.is_end() {
            if self.peek_char() == '\n' {
                self.line += 1;
            }
            let _ = self.next_char();
        }

        if self.is_end() {
            sink.report(self.line, &ScanError::UnterminatedString.to_string());
            return;
        }

        // Consume the closing quote.
        let _ = self.next_char();

        let value = self.source[self.start + 1..self.current - 1].to_string();
        self.make_literal_token(TokenType::String, Literal::Str(value));
    }

    fn number(&mut self) {
        while self.peek_char().is_ascii_digit() {
            let _ = self.next_char();
        }

        // A fractional part only counts with a digit on both sides of the dot.
        if self.peek_char() == '.' && self.peek_next_char().is_ascii_digit() {
            let _ = self.next_char();

            while self.peek_char().is_ascii_digit() {
                let _ = self.next_char();
            }
        }

        let value: f64 = self.source[self.start..self.current]
            .parse()
            .unwrap(); // digit runs always parse
        self.make_literal_token(TokenType::Number, Literal::Number(value));
    }

    fn identifier(&mut self) {
        while self.peek_char().is_ascii_alphanumeric() || self.peek_char() == '_' {
            let _ = self.next_char();
        }

        let text = &self.source[self.start..self.current];
        let kind = KEYWORDS
            .get(text)
            .copied()
            .unwrap_or(TokenType::Identifier);
        self.make_token(kind);
    }

    fn is_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn next_char(&mut self) -> char {
        match self.source[self.current..].chars().next() {
            Some(c) => {
                self.current += c.len_utf8();
                c
            }
            None => '\0',
        }
    }

    fn peek_char(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    fn peek_next_char(&self) -> char {
        let mut rest = self.source[self.current..].chars();
        rest.next();
        rest.next().unwrap_or('\0')
    }

    fn match_next(&mut self, expected: char) -> bool {
        if self.is_end() {
            return false;
        }
        if self.peek_char() != expected {
            return false;
        }
        self.current += expected.len_utf8();
        true
    }

    fn make_token(&mut self, kind: TokenType) {
        let lexeme = self.source[self.start..self.current].to_string();
        self.tokens.push(Token::new(kind, lexeme, None, self.line));
    }

    fn make_literal_token(&mut self, kind: TokenType, literal: Literal) {
        let lexeme = self.source[self.start..self.current].to_string();
        self.tokens
            .push(Token::new(kind, lexeme, Some(literal), self.line));
    }
}
