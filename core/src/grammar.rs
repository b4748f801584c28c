//! Tokenizer and parser for the surface syntax.
//!
//! ```text
//! integer : /-?[0-9]+/
//! float   : /-?[0-9]+/ '.' /[0-9]+/
//! symbol  : '+' | '-' | '*' | '/' | '%' | '^'
//!         | "max" | "min" | "list" | "head" | "tail" | "join" | "eval"
//! sexpr   : '(' <expr>* ')'
//! qexpr   : '{' <expr>* '}'
//! expr    : <float> | <integer> | <symbol> | <sexpr> | <qexpr>
//! program : /^/ <expr>* /$/
//! ```
//!
//! Alternatives are tried in order, so `-5` is an integer literal while a
//! `-` followed by whitespace is the subtraction symbol.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;
use crate::syntax::{SyntaxNode, SyntaxTree, Tag};

static INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+").expect("integer pattern is valid"));

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+").expect("digit pattern is valid"));

static SYMBOL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\+|-|\*|/|%|\^|max|min|list|head|tail|join|eval)")
        .expect("symbol pattern is valid")
});

/// Parse one line of input into a syntax tree.
pub fn parse(input: &str) -> Result<SyntaxTree, ParseError> {
    let root = Parser::new(input).parse_program().inspect_err(|e| {
        tracing::debug!(position = e.position, expected = %e.expected, "parse failed");
    })?;

    Ok(SyntaxTree {
        source: input.to_string(),
        root,
    })
}

// ============================================================================
// Parser
// ============================================================================

struct Parser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser { input, position: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.position = self.input.len() - trimmed.len();
    }

    fn error(&self, expected: &str) -> ParseError {
        ParseError::new(self.input, self.position, expected)
    }

    /// Consume a match of `pattern` at the current position, if any
    fn eat(&mut self, tag: Tag, pattern: &Regex) -> Option<SyntaxNode> {
        let m = pattern.find(self.rest())?;
        let start = self.position;
        self.position += m.end();
        Some(SyntaxNode::leaf(tag, m.as_str(), start..self.position))
    }

    fn eat_char(&mut self, expected: char) -> Option<SyntaxNode> {
        if self.current_char() != Some(expected) {
            return None;
        }
        let start = self.position;
        self.position += expected.len_utf8();
        Some(SyntaxNode::leaf(
            Tag::Punct,
            expected.to_string(),
            start..self.position,
        ))
    }

    fn parse_program(mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = vec![SyntaxNode::leaf(Tag::Meta, "", 0..0)];

        loop {
            self.skip_whitespace();
            if self.is_eof() {
                break;
            }
            children.push(self.parse_expr()?);
        }

        let end = self.input.len();
        children.push(SyntaxNode::leaf(Tag::Meta, "", end..end));
        Ok(SyntaxNode::group(Tag::Root, 0..end, children))
    }

    fn parse_expr(&mut self) -> Result<SyntaxNode, ParseError> {
        self.skip_whitespace();

        if let Some(float) = self.parse_float() {
            return Ok(float);
        }
        if let Some(integer) = self.eat(Tag::Integer, &INTEGER) {
            return Ok(integer);
        }
        if let Some(symbol) = self.eat(Tag::Symbol, &SYMBOL) {
            return Ok(symbol);
        }

        match self.current_char() {
            Some('(') => self.parse_group(Tag::SExpr, '(', ')'),
            Some('{') => self.parse_group(Tag::QExpr, '{', '}'),
            _ => Err(self.error("expression")),
        }
    }

    /// Backtracks to the start position when the input is not a float.
    fn parse_float(&mut self) -> Option<SyntaxNode> {
        let start = self.position;
        match self.float_parts() {
            Some(children) => Some(SyntaxNode::group(
                Tag::Float,
                start..self.position,
                children,
            )),
            None => {
                self.position = start;
                None
            }
        }
    }

    /// Float literals keep their three parts as children; the reader parses
    /// the node's whole span.
    fn float_parts(&mut self) -> Option<Vec<SyntaxNode>> {
        let whole = self.eat(Tag::Integer, &INTEGER)?;
        let dot = self.eat_char('.')?;
        let fraction = self.eat(Tag::Integer, &DIGITS)?;
        Some(vec![whole, dot, fraction])
    }

    fn parse_group(
        &mut self,
        tag: Tag,
        open: char,
        close: char,
    ) -> Result<SyntaxNode, ParseError> {
        let start = self.position;
        let mut children = Vec::new();
        children.extend(self.eat_char(open));

        loop {
            self.skip_whitespace();
            if let Some(closing) = self.eat_char(close) {
                children.push(closing);
                break;
            }
            if self.is_eof() {
                return Err(self.error(&format!("'{close}'")));
            }
            children.push(self.parse_expr()?);
        }

        Ok(SyntaxNode::group(tag, start..self.position, children))
    }
}
