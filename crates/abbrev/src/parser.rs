//! Recursive-descent parser for abbreviations.
//!
//! Precedence, tightest first: element or group, multiplier (`*n`),
//! child nesting (`>`), siblings (`+`).
//!
//! ```text
//! expression := term ('+' term)*
//! term       := primary ('*' count)? ('>' expression)?
//! primary    := '(' expression ')' | element
//! element    := name? ('#' name | '.' name | '[' attrs ']' | '{' text '}')*
//! ```

use abbrev_core::{AttrValue, Node, DEFAULT_TAG};

use crate::numbering::{clone_nodes, repeat_nodes};
use crate::service::{ExpandOptions, DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES, DEFAULT_MAX_REPEAT};
use crate::{ExpandError, Result};

/// Parser over a single abbreviation.
///
/// Positions reported in errors are character offsets.
pub struct Parser<'a> {
    input: Vec<char>,
    position: usize,
    default_tag: &'a str,
    max_repeat: usize,
    max_nodes: usize,
    max_depth: usize,
    nesting: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser with default options
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            default_tag: DEFAULT_TAG,
            max_repeat: DEFAULT_MAX_REPEAT,
            max_nodes: DEFAULT_MAX_NODES,
            max_depth: DEFAULT_MAX_DEPTH,
            nesting: 0,
        }
    }

    /// Create a parser using the given options
    pub fn with_options(input: &str, options: &'a ExpandOptions) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            default_tag: &options.default_tag,
            max_repeat: options.max_repeat,
            max_nodes: options.max_nodes,
            max_depth: options.max_depth,
            nesting: 0,
        }
    }

    /// Parse the whole abbreviation into a forest of root nodes
    pub fn parse(mut self) -> Result<Vec<Node>> {
        if self.input.iter().all(|c| c.is_whitespace()) {
            return Err(ExpandError::EmptyAbbreviation);
        }

        self.skip_whitespace();
        let nodes = self.parse_expression(0)?;
        self.skip_whitespace();

        match self.peek() {
            None => Ok(nodes),
            Some(c) => Err(self.unexpected(c)),
        }
    }

    /// Siblings joined by `+`. `depth` is the number of enclosing groups.
    fn parse_expression(&mut self, depth: usize) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();

        loop {
            nodes.extend(self.parse_term(depth)?);

            match self.peek() {
                Some('+') => self.position += 1,
                None => break,
                Some(')') if depth > 0 => break,
                Some(c) if c.is_whitespace() && depth == 0 => break,
                Some(c) => return Err(self.unexpected(c)),
            }
        }

        Ok(nodes)
    }

    fn parse_term(&mut self, depth: usize) -> Result<Vec<Node>> {
        let mut nodes = self.parse_primary(depth)?;

        if self.peek() == Some('*') {
            let start = self.position;
            let count = self.parse_multiplier()?;
            self.check_size(tree_size(&nodes).saturating_mul(count), start)?;
            nodes = repeat_nodes(&nodes, count);
        }

        if self.peek() == Some('>') {
            let start = self.position;
            self.enter(start)?;
            self.position += 1;
            let children = self.parse_expression(depth)?;
            self.nesting -= 1;
            let size = nodes.len().saturating_mul(tree_size(&children));
            self.check_size(tree_size(&nodes).saturating_add(size), start)?;

            // Each parent gets its own copy so later numbering stays local
            for node in &mut nodes {
                node.children.extend(clone_nodes(&children));
            }
        }

        Ok(nodes)
    }

    fn parse_primary(&mut self, depth: usize) -> Result<Vec<Node>> {
        if self.peek() == Some('(') {
            self.parse_group(depth)
        } else {
            Ok(vec![self.parse_element()?])
        }
    }

    fn parse_group(&mut self, depth: usize) -> Result<Vec<Node>> {
        let start = self.position;
        self.enter(start)?;
        self.position += 1;

        let nodes = self.parse_expression(depth + 1)?;
        self.nesting -= 1;

        match self.peek() {
            Some(')') => {
                self.position += 1;
                Ok(nodes)
            }
            None => Err(ExpandError::UnclosedGroup { position: start }),
            Some(c) => Err(self.unexpected(c)),
        }
    }

    fn parse_multiplier(&mut self) -> Result<usize> {
        self.position += 1;

        let start = self.position;
        let digits = self.read_while(|c| c.is_ascii_digit());
        let count: usize = digits
            .parse()
            .map_err(|_| ExpandError::InvalidMultiplier { position: start })?;

        if count == 0 {
            return Err(ExpandError::InvalidMultiplier { position: start });
        }

        if count > self.max_repeat {
            return Err(ExpandError::MultiplierTooLarge {
                count,
                limit: self.max_repeat,
                position: start,
            });
        }

        Ok(count)
    }

    fn parse_element(&mut self) -> Result<Node> {
        let start = self.position;
        let mut node = Node::element(self.default_tag);

        loop {
            match self.peek() {
                Some(c) if is_name_char(c) => node.tag = self.read_while(is_name_char),

                Some('#') => {
                    if node.id.is_some() {
                        return Err(ExpandError::DuplicateId {
                            position: self.position,
                        });
                    }
                    self.position += 1;
                    node.id = Some(self.expect_identifier("id")?);
                }

                Some('.') => {
                    self.position += 1;
                    let class = self.expect_identifier("class")?;
                    node.classes.push(class);
                }

                Some('[') => self.parse_attributes(&mut node)?,

                Some('{') => {
                    let text = self.parse_text()?;
                    node.push_text(&text);
                }

                None | Some('>' | '+' | '*' | ')') => break,
                Some(c) if c.is_whitespace() => break,
                Some(c) => return Err(self.unexpected(c)),
            }
        }

        if self.position == start {
            return Err(match self.peek() {
                Some(c) => self.unexpected(c),
                None => ExpandError::UnexpectedEnd {
                    position: self.position,
                },
            });
        }

        Ok(node)
    }

    fn parse_attributes(&mut self, node: &mut Node) -> Result<()> {
        let start = self.position;
        self.position += 1;

        loop {
            let _ = self.read_while(is_attribute_separator);

            match self.peek() {
                None => return Err(ExpandError::UnclosedAttributeSet { position: start }),
                Some(']') => {
                    self.position += 1;
                    return Ok(());
                }
                Some(_) => {}
            }

            let name_start = self.position;
            let name = self.read_while(is_attribute_name_char);
            if name.is_empty() {
                return Err(ExpandError::ExpectedIdentifier {
                    what: "attribute name",
                    position: name_start,
                });
            }

            if self.peek() == Some('=') {
                self.position += 1;
                let value = self.parse_attribute_value()?;
                node.set_attr(&name, AttrValue::Value(value));
            } else {
                node.set_attr(&name, AttrValue::Flag);
            }

            match self.peek() {
                None | Some(']') => {}
                Some(c) if is_attribute_separator(c) => {}
                Some(c) => return Err(self.unexpected(c)),
            }
        }
    }

    fn parse_attribute_value(&mut self) -> Result<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => self.parse_quoted(quote),
            _ => {
                let start = self.position;
                let value = self.read_while(|c| !is_attribute_separator(c) && c != ']');
                if value.is_empty() {
                    Err(ExpandError::ExpectedAttributeValue { position: start })
                } else {
                    Ok(value)
                }
            }
        }
    }

    fn parse_quoted(&mut self, quote: char) -> Result<String> {
        let start = self.position;
        self.position += 1;

        let mut value = String::new();
        while let Some(c) = self.peek() {
            self.position += 1;
            match c {
                '\\' => match self.peek() {
                    Some(next) if next == quote || next == '\\' => {
                        value.push(next);
                        self.position += 1;
                    }
                    _ => value.push('\\'),
                },
                c if c == quote => return Ok(value),
                c => value.push(c),
            }
        }

        Err(ExpandError::UnclosedQuote { position: start })
    }

    fn parse_text(&mut self) -> Result<String> {
        let start = self.position;
        self.position += 1;

        let mut text = String::new();
        while let Some(c) = self.peek() {
            self.position += 1;
            match c {
                '\\' => {
                    if let Some(next) = self.peek() {
                        text.push(next);
                        self.position += 1;
                    }
                }
                '}' => return Ok(text),
                c => text.push(c),
            }
        }

        Err(ExpandError::UnclosedText { position: start })
    }

    fn expect_identifier(&mut self, what: &'static str) -> Result<String> {
        let start = self.position;
        let name = self.read_while(is_name_char);
        if name.is_empty() {
            Err(ExpandError::ExpectedIdentifier {
                what,
                position: start,
            })
        } else {
            Ok(name)
        }
    }

    /// Both `(` and `>` open a nesting level
    fn enter(&mut self, position: usize) -> Result<()> {
        if self.nesting >= self.max_depth {
            return Err(ExpandError::TooDeep {
                limit: self.max_depth,
                position,
            });
        }
        self.nesting += 1;
        Ok(())
    }

    fn check_size(&self, size: usize, position: usize) -> Result<()> {
        if size > self.max_nodes {
            return Err(ExpandError::TooManyNodes {
                limit: self.max_nodes,
                position,
            });
        }
        Ok(())
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn read_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let start = self.position;
        while self.peek().is_some_and(&predicate) {
            self.position += 1;
        }
        self.input[start..self.position].iter().collect()
    }

    fn skip_whitespace(&mut self) {
        let _ = self.read_while(char::is_whitespace);
    }

    fn unexpected(&self, found: char) -> ExpandError {
        ExpandError::UnexpectedCharacter {
            found,
            position: self.position,
        }
    }
}

fn tree_size(nodes: &[Node]) -> usize {
    nodes.iter().map(Node::count).sum()
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '$')
}

fn is_attribute_name_char(c: char) -> bool {
    is_name_char(c) || matches!(c, ':' | '.')
}

fn is_attribute_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}
