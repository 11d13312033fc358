use std::iter::Peekable;
use std::vec;

use crate::ast::{Node, Prop, Value, VsmlDocument};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

/// Deepest block nesting accepted before parsing gives up.
pub const MAX_DEPTH: usize = 64;

/// Recursive-descent parser over a lexed token stream.
///
/// One token of lookahead is enough: inside a block an identifier is read
/// first, and the token after it decides between `key: value` and a child node.
pub struct Parser {
    tokens: Peekable<vec::IntoIter<TokenWithPos>>,
    /// Position of the last consumed token; anchors errors past the end of input.
    last: (usize, usize),
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens: tokens.into_iter().peekable(), last: (1, 1), depth: 0 }
    }

    pub fn parse_document(mut self) -> Result<VsmlDocument, ParseError> {
        let first = self.next();
        let root = match first.token {
            Token::Ident(kind) => self.parse_node(kind, first.line, first.col)?,
            other => return Err(unexpected(&other, "a root node", first.line, first.col)),
        };

        let trailing = self.next();
        match trailing.token {
            Token::Eof => Ok(VsmlDocument { root }),
            other => Err(unexpected(&other, "end of input after the root node", trailing.line, trailing.col)),
        }
    }

    fn next(&mut self) -> TokenWithPos {
        match self.tokens.next() {
            Some(tok) => {
                self.last = (tok.line, tok.col);
                tok
            }
            None => TokenWithPos { token: Token::Eof, line: self.last.0, col: self.last.1 },
        }
    }

    fn next_if(&mut self, expected: &Token) -> bool {
        self.tokens.next_if(|tok| &tok.token == expected).is_some()
    }

    /// Everything after the node's kind identifier: `STRING? block?`.
    fn parse_node(&mut self, kind: String, line: usize, col: usize) -> Result<Node, ParseError> {
        let label = match self.tokens.next_if(|tok| matches!(tok.token, Token::Str(_))) {
            Some(TokenWithPos { token: Token::Str(label), .. }) => Some(label),
            _ => None,
        };
        let mut node = Node { kind, label, props: Vec::new(), children: Vec::new(), line };

        if self.next_if(&Token::LBrace) {
            if self.depth == MAX_DEPTH {
                return Err(ParseError::new(format!("blocks nested deeper than {MAX_DEPTH} levels"), line, col));
            }
            self.depth += 1;
            self.parse_block(&mut node)?;
            self.depth -= 1;
        }
        Ok(node)
    }

    /// Block body up to and including the closing `}`. Properties and
    /// children may be interleaved; their relative order is kept per list.
    fn parse_block(&mut self, node: &mut Node) -> Result<(), ParseError> {
        loop {
            let tok = self.next();
            match tok.token {
                Token::RBrace => return Ok(()),
                Token::Ident(name) if self.next_if(&Token::Colon) => {
                    let value = self.parse_value()?;
                    node.props.push(Prop { key: name, value, line: tok.line });
                }
                Token::Ident(name) => node.children.push(self.parse_node(name, tok.line, tok.col)?),
                Token::Eof => {
                    return Err(ParseError::new(
                        format!("unclosed block of `{}` opened on line {}", node.kind, node.line),
                        tok.line,
                        tok.col,
                    ));
                }
                other => {
                    let inside = format!("a property or a node inside `{}`", node.kind);
                    return Err(unexpected(&other, &inside, tok.line, tok.col));
                }
            }
        }
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let tok = self.next();
        match tok.token {
            Token::Str(s) => Ok(Value::Str(s)),
            Token::Number(n) => Ok(Value::Number(n)),
            Token::Color(c) => Ok(Value::Color(c)),
            Token::Ident(s) => Ok(Value::Ident(s)),
            other => Err(unexpected(&other, "a value", tok.line, tok.col)),
        }
    }
}

fn unexpected(found: &Token, expected: &str, line: usize, col: usize) -> ParseError {
    ParseError::new(format!("expected {expected}, found {}", found.describe()), line, col)
}

/// Parse a `.vsml` source string into a [`VsmlDocument`].
pub fn parse_str(src: &str) -> Result<VsmlDocument, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_document()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_optional_and_only_taken_once() {
        let doc = parse_str(r#"Scene { Layer "a" { } Point }"#).unwrap();
        assert_eq!(doc.root.children[0].label.as_deref(), Some("a"));
        assert_eq!(doc.root.children[1].label, None);
        assert!(parse_str(r#"Scene "a" "b""#).is_err());
    }

    #[test]
    fn ident_values_are_not_children() {
        let doc = parse_str("Scene { shape: square  Point }").unwrap();
        assert_eq!(doc.root.props.len(), 1);
        assert_eq!(doc.root.children.len(), 1);
        assert_eq!(doc.root.children[0].kind, "Point");
    }

    #[test]
    fn messages_describe_the_offending_token() {
        let e = parse_str("Scene { 42 }").unwrap_err();
        assert_eq!(e.message, "expected a property or a node inside `Scene`, found number 42");
        assert_eq!((e.line, e.col), (1, 9));

        let e = parse_str("{ }").unwrap_err();
        assert_eq!(e.message, "expected a root node, found `{`");
    }

    #[test]
    fn unclosed_block_points_at_end_of_input() {
        let e = parse_str("Scene {\n  Camera {\n").unwrap_err();
        assert_eq!(e.message, "unclosed block of `Camera` opened on line 2");
        assert_eq!(e.line, 3);
    }

    #[test]
    fn nesting_is_bounded() {
        let ok = format!("{}{}", "L { ".repeat(MAX_DEPTH), "} ".repeat(MAX_DEPTH));
        assert!(parse_str(&ok).is_ok());

        let deep = format!("{}{}", "L { ".repeat(MAX_DEPTH + 1), "} ".repeat(MAX_DEPTH + 1));
        let e = parse_str(&deep).unwrap_err();
        assert!(e.message.contains("nested deeper"), "{e}");
    }
}
