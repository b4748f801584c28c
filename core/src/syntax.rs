//! Syntax tree produced by the grammar and consumed by the reader.

use std::fmt;
use std::ops::Range;

/// Grammatical category of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Root,
    Integer,
    Float,
    Symbol,
    SExpr,
    QExpr,
    /// `(`, `)`, `{`, `}` and the float literal's `.`
    Punct,
    /// Start/end-of-input anchors
    Meta,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Root => ">",
            Tag::Integer => "integer",
            Tag::Float => "float",
            Tag::Symbol => "symbol",
            Tag::SExpr => "sexpr",
            Tag::QExpr => "qexpr",
            Tag::Punct => "char",
            Tag::Meta => "regex",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxNode {
    pub tag: Tag,
    /// Matched text for leaves, empty for groups
    pub contents: String,
    /// Byte range of the whole match in the source
    pub span: Range<usize>,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn leaf(tag: Tag, contents: impl Into<String>, span: Range<usize>) -> Self {
        SyntaxNode {
            tag,
            contents: contents.into(),
            span,
            children: Vec::new(),
        }
    }

    pub fn group(tag: Tag, span: Range<usize>, children: Vec<SyntaxNode>) -> Self {
        SyntaxNode {
            tag,
            contents: String::new(),
            span,
            children,
        }
    }

    /// Nodes that never contribute a value
    pub fn is_trivia(&self) -> bool {
        matches!(self.tag, Tag::Punct | Tag::Meta)
    }

    fn write_indented(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        if self.children.is_empty() {
            writeln!(f, "{indent}{} '{}'", self.tag.as_str(), self.contents)?;
        } else {
            writeln!(f, "{indent}{} ", self.tag.as_str())?;
            for child in &self.children {
                child.write_indented(f, depth + 1)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// A parsed line together with the text it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    pub source: String,
    pub root: SyntaxNode,
}

impl SyntaxTree {
    /// Exact source text matched by `node`
    pub fn text_of(&self, node: &SyntaxNode) -> &str {
        &self.source[node.span.clone()]
    }
}
