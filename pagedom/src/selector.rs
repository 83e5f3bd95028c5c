//! CSS selector engine.
//!
//! Supports selector lists of compound selectors (type, `*`, `#id`,
//! `.class`, `[attr]`, `[attr=value]`) joined by descendant (whitespace) and
//! child (`>`) combinators. Tokenizing is done by `cssparser`.

use cssparser::{ParseError, Parser, ParserInput, Token};

use crate::document::{Document, NodeId};

/// Error returned for selectors the engine cannot parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid selector '{selector}': {reason}")]
pub struct SelectorError {
    pub selector: String,
    pub reason: String,
}

impl SelectorError {
    pub fn new(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeSelector {
    Exists(String),
    Equals(String, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
}

/// A compound selector: every simple selector must match the same element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    pub universal: bool,
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<AttributeSelector>,
}

impl Compound {
    fn is_empty(&self) -> bool {
        !self.universal
            && self.tag.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attributes.is_empty()
    }
}

/// A chain of compounds. `combinators[i]` joins `compounds[i]` and
/// `compounds[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complex {
    pub compounds: Vec<Compound>,
    pub combinators: Vec<Combinator>,
}

/// A parsed, comma-separated selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub alternatives: Vec<Complex>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let mut parser_input = ParserInput::new(input);
        let mut parser = Parser::new(&mut parser_input);
        let mut alternatives = Vec::new();
        let mut builder = ComplexBuilder::default();

        loop {
            let token = match parser.next_including_whitespace() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };

            match token {
                Token::WhiteSpace(_) => builder.whitespace(),
                Token::Delim('>') => builder.child(input)?,
                Token::Comma => {
                    alternatives.push(std::mem::take(&mut builder).finish(input)?);
                }
                Token::Ident(name) => {
                    let part = builder.simple();
                    if part.tag.is_some() || part.universal {
                        return Err(SelectorError::new(input, "type selector must come first"));
                    }
                    part.tag = Some(name.to_ascii_lowercase());
                }
                Token::Delim('*') => {
                    let part = builder.simple();
                    if part.tag.is_some() || part.universal {
                        return Err(SelectorError::new(input, "type selector must come first"));
                    }
                    part.universal = true;
                }
                Token::Delim('.') => {
                    let class = match parser.next_including_whitespace() {
                        Ok(Token::Ident(class)) => class.to_string(),
                        _ => return Err(SelectorError::new(input, "expected class name after '.'")),
                    };
                    builder.simple().classes.push(class);
                }
                Token::IDHash(id) => {
                    let part = builder.simple();
                    if part.id.is_some() {
                        return Err(SelectorError::new(input, "compound has two ids"));
                    }
                    part.id = Some(id.to_string());
                }
                Token::SquareBracketBlock => {
                    let attribute = parser
                        .parse_nested_block(|p| parse_attribute(p))
                        .map_err(|_: ParseError<'_, ()>| {
                            SelectorError::new(input, "malformed attribute selector")
                        })?;
                    builder.simple().attributes.push(attribute);
                }
                other => {
                    return Err(SelectorError::new(input, format!("unexpected token {other:?}")));
                }
            }
        }

        alternatives.push(builder.finish(input)?);
        Ok(Self { alternatives })
    }

    /// True if any alternative matches `node`.
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        self.alternatives
            .iter()
            .any(|complex| matches_from(doc, complex, complex.compounds.len() - 1, node))
    }
}

fn parse_attribute<'i>(
    parser: &mut Parser<'i, '_>,
) -> Result<AttributeSelector, ParseError<'i, ()>> {
    let name = parser.expect_ident()?.to_string();
    if parser.is_exhausted() {
        return Ok(AttributeSelector::Exists(name));
    }
    parser.expect_delim('=')?;
    let value = match parser.next()?.clone() {
        Token::Ident(value) | Token::QuotedString(value) => value.to_string(),
        _ => return Err(parser.new_custom_error(())),
    };
    parser.expect_exhausted()?;
    Ok(AttributeSelector::Equals(name, value))
}

#[derive(Debug, Default)]
struct ComplexBuilder {
    compounds: Vec<Compound>,
    combinators: Vec<Combinator>,
    current: Compound,
    pending: Option<Combinator>,
}

impl ComplexBuilder {
    fn whitespace(&mut self) {
        if !self.current.is_empty() {
            self.compounds.push(std::mem::take(&mut self.current));
            self.pending = Some(Combinator::Descendant);
        }
    }

    fn child(&mut self, input: &str) -> Result<(), SelectorError> {
        if !self.current.is_empty() {
            self.compounds.push(std::mem::take(&mut self.current));
        }
        if self.compounds.is_empty() || self.pending == Some(Combinator::Child) {
            return Err(SelectorError::new(input, "dangling '>' combinator"));
        }
        self.pending = Some(Combinator::Child);
        Ok(())
    }

    /// The compound the next simple selector belongs to.
    fn simple(&mut self) -> &mut Compound {
        if let Some(combinator) = self.pending.take() {
            self.combinators.push(combinator);
        }
        &mut self.current
    }

    fn finish(mut self, input: &str) -> Result<Complex, SelectorError> {
        if !self.current.is_empty() {
            self.compounds.push(self.current);
        } else if self.pending == Some(Combinator::Child) {
            return Err(SelectorError::new(input, "dangling '>' combinator"));
        }
        if self.compounds.is_empty() {
            return Err(SelectorError::new(input, "empty selector"));
        }
        Ok(Complex {
            compounds: self.compounds,
            combinators: self.combinators,
        })
    }
}

fn matches_compound(doc: &Document, compound: &Compound, node: NodeId) -> bool {
    if let Some(tag) = &compound.tag {
        if doc.tag(node) != tag {
            return false;
        }
    }
    if let Some(id) = &compound.id {
        if doc.get_attribute(node, "id").as_deref() != Some(id.as_str()) {
            return false;
        }
    }
    if !compound.classes.iter().all(|c| doc.has_class(node, c)) {
        return false;
    }
    compound.attributes.iter().all(|attribute| match attribute {
        AttributeSelector::Exists(name) => doc.has_attribute(node, name),
        AttributeSelector::Equals(name, value) => {
            doc.get_attribute(node, name).as_deref() == Some(value.as_str())
        }
    })
}

/// Match `complex.compounds[..=index]` with `compounds[index]` on `node`.
fn matches_from(doc: &Document, complex: &Complex, index: usize, node: NodeId) -> bool {
    if !matches_compound(doc, &complex.compounds[index], node) {
        return false;
    }
    if index == 0 {
        return true;
    }
    match complex.combinators[index - 1] {
        Combinator::Child => doc
            .parent(node)
            .is_some_and(|parent| matches_from(doc, complex, index - 1, parent)),
        Combinator::Descendant => doc
            .ancestors(node)
            .any(|ancestor| matches_from(doc, complex, index - 1, ancestor)),
    }
}

impl Document {
    /// Elements matching `selector` in document order. With a scope, only
    /// descendants of the scope are considered, but ancestors outside it
    /// still take part in matching.
    pub fn query_selector_all(
        &self,
        scope: Option<NodeId>,
        selector: &str,
    ) -> Result<Vec<NodeId>, SelectorError> {
        let selector = Selector::parse(selector)?;
        let candidates = match scope {
            Some(scope) => self.descendants(scope),
            None => {
                let root = self.root();
                std::iter::once(root).chain(self.descendants(root)).collect()
            }
        };
        Ok(candidates
            .into_iter()
            .filter(|&node| selector.matches(self, node))
            .collect())
    }

    pub fn query_selector(
        &self,
        scope: Option<NodeId>,
        selector: &str,
    ) -> Result<Option<NodeId>, SelectorError> {
        Ok(self.query_selector_all(scope, selector)?.into_iter().next())
    }

    pub fn matches(&self, node: NodeId, selector: &str) -> Result<bool, SelectorError> {
        Ok(Selector::parse(selector)?.matches(self, node))
    }
}
