//! Document parsing.
//!
//! The source is tokenized with `quick-xml`, but only `cond`, `else`, `def`
//! and `get` are interpreted. Every other element, text run, entity
//! reference, comment and CDATA section is copied into the tree as the exact
//! source bytes it came from, so formatting reaches the renderer untouched.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::condition::parse_condition;
use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::model::{BooleanExpr, Conditional, MarkupNode};

const COND: &str = "cond";
const ELSE: &str = "else";
const DEF: &str = "def";
const GET: &str = "get";

/// ## Summary
/// Parses a document into a markup tree.
///
/// The result is always a `Sequence` of the top-level nodes.
///
/// ## Errors
/// Returns a `ParseError` carrying the source position for malformed XML,
/// unbalanced or unterminated elements, misplaced `<else/>`, unknown flags,
/// malformed conditions and undefined or duplicate fragments.
#[tracing::instrument(skip(source), fields(source_len = source.len()))]
pub fn parse(source: &str) -> ParseResult<MarkupNode> {
    tracing::debug!("Parsing markup document");

    let nodes = DocumentParser::new(source)
        .run()
        .map_err(|err| err.locate(source))?;

    tracing::trace!(nodes = nodes.len(), "Parsed markup document");
    Ok(MarkupNode::Sequence(nodes))
}

/// An open element on the parse stack.
#[derive(Debug)]
struct Frame {
    name: String,
    offset: usize,
    kind: FrameKind,
}

#[derive(Debug)]
enum FrameKind {
    /// Pass-through element; its content belongs to the enclosing body.
    Element,
    Cond {
        expr: BooleanExpr,
        body: Vec<MarkupNode>,
        else_body: Option<Vec<MarkupNode>>,
    },
    Def {
        name: String,
        body: Vec<MarkupNode>,
    },
    /// `<else>` or `<get>` written with a separate closing tag; must stay empty.
    Empty,
}

struct DocumentParser<'a> {
    source: &'a str,
    reader: Reader<&'a [u8]>,
    stack: Vec<Frame>,
    root: Vec<MarkupNode>,
    fragments: HashMap<String, Vec<MarkupNode>>,
}

impl<'a> DocumentParser<'a> {
    fn new(source: &'a str) -> Self {
        let mut reader = Reader::from_str(source);
        let config = reader.config_mut();
        config.check_end_names = false;
        config.allow_unmatched_ends = true;

        Self {
            source,
            reader,
            stack: Vec::new(),
            root: Vec::new(),
            fragments: HashMap::new(),
        }
    }

    fn position(&self) -> usize {
        usize::try_from(self.reader.buffer_position()).unwrap_or(self.source.len())
    }

    fn run(mut self) -> ParseResult<Vec<MarkupNode>> {
        let source = self.source;
        loop {
            let start = self.position();
            let event = self.reader.read_event().map_err(|err| {
                let offset = usize::try_from(self.reader.error_position()).unwrap_or(start);
                ParseError::xml(offset, err.to_string())
            })?;
            let end = self.position();
            let raw = source
                .get(start..end)
                .ok_or_else(|| ParseError::xml(start, "event ends mid-character"))?;

            match event {
                Event::Start(ref e) => self.start(e, start, raw)?,
                Event::Empty(ref e) => self.empty(e, start, raw)?,
                Event::End(ref e) => {
                    let name = std::str::from_utf8(e.name().as_ref())
                        .map_err(|err| ParseError::xml(start, err.to_string()))?
                        .to_owned();
                    self.end(&name, start, raw)?;
                }
                Event::Eof => break,
                _ => self.push_raw(start, raw)?,
            }
        }

        self.finish()
    }

    fn start(&mut self, e: &BytesStart<'_>, offset: usize, raw: &str) -> ParseResult<()> {
        self.ensure_not_in_empty(offset)?;
        let name = element_name(e, offset)?;
        let kind = match name.as_str() {
            COND => FrameKind::Cond {
                expr: cond_expr(e, offset)?,
                body: Vec::new(),
                else_body: None,
            },
            DEF => FrameKind::Def {
                name: required_attribute(e, DEF, "name", offset)?,
                body: Vec::new(),
            },
            ELSE => {
                self.mark_else(offset)?;
                FrameKind::Empty
            }
            GET => {
                self.insert_fragment(e, offset)?;
                FrameKind::Empty
            }
            _ => {
                self.push_text(raw);
                FrameKind::Element
            }
        };
        self.stack.push(Frame { name, offset, kind });
        Ok(())
    }

    fn empty(&mut self, e: &BytesStart<'_>, offset: usize, raw: &str) -> ParseResult<()> {
        self.ensure_not_in_empty(offset)?;
        match element_name(e, offset)?.as_str() {
            COND => {
                let expr = cond_expr(e, offset)?;
                self.push_node(MarkupNode::Conditional(Conditional::new(
                    expr,
                    Vec::new(),
                    Vec::new(),
                )));
            }
            DEF => {
                let name = required_attribute(e, DEF, "name", offset)?;
                self.define(name, Vec::new(), offset)?;
            }
            ELSE => self.mark_else(offset)?,
            GET => self.insert_fragment(e, offset)?,
            _ => self.push_text(raw),
        }
        Ok(())
    }

    fn end(&mut self, name: &str, offset: usize, raw: &str) -> ParseResult<()> {
        let Some(frame) = self.stack.pop() else {
            return Err(ParseError::new(
                ParseErrorKind::MismatchedTag,
                offset,
                format!("closing tag </{name}> without an open element"),
            ));
        };
        if frame.name != name {
            return Err(ParseError::new(
                ParseErrorKind::MismatchedTag,
                offset,
                format!("expected </{}>, found </{name}>", frame.name),
            ));
        }

        match frame.kind {
            FrameKind::Element => self.push_text(raw),
            FrameKind::Cond {
                expr,
                body,
                else_body,
            } => {
                let node = Conditional::new(expr, body, else_body.unwrap_or_default());
                self.push_node(MarkupNode::Conditional(node));
            }
            FrameKind::Def { name, body } => self.define(name, body, frame.offset)?,
            FrameKind::Empty => {}
        }
        Ok(())
    }

    fn finish(self) -> ParseResult<Vec<MarkupNode>> {
        if let Some(frame) = self.stack.last() {
            let kind = if matches!(frame.kind, FrameKind::Cond { .. }) {
                ParseErrorKind::UnterminatedConditional
            } else {
                ParseErrorKind::UnterminatedElement
            };
            return Err(ParseError::new(
                kind,
                frame.offset,
                format!("<{}> is never closed", frame.name),
            ));
        }
        Ok(self.root)
    }

    /// Raw content: rejected inside an element that must stay empty.
    fn push_raw(&mut self, offset: usize, raw: &str) -> ParseResult<()> {
        if raw.trim().is_empty() && self.in_empty() {
            return Ok(());
        }
        self.ensure_not_in_empty(offset)?;
        self.push_text(raw);
        Ok(())
    }

    fn in_empty(&self) -> bool {
        self.stack
            .last()
            .is_some_and(|frame| matches!(frame.kind, FrameKind::Empty))
    }

    fn ensure_not_in_empty(&self, offset: usize) -> ParseResult<()> {
        match self.stack.last() {
            Some(frame) if matches!(frame.kind, FrameKind::Empty) => Err(ParseError::new(
                ParseErrorKind::UnexpectedElement,
                offset,
                format!("<{}> must be empty", frame.name),
            )),
            _ => Ok(()),
        }
    }

    /// The node list that content at the current position belongs to.
    fn body(&mut self) -> &mut Vec<MarkupNode> {
        for frame in self.stack.iter_mut().rev() {
            match &mut frame.kind {
                FrameKind::Cond {
                    body, else_body, ..
                } => return else_body.as_mut().unwrap_or(body),
                FrameKind::Def { body, .. } => return body,
                FrameKind::Element | FrameKind::Empty => {}
            }
        }
        &mut self.root
    }

    fn push_node(&mut self, node: MarkupNode) {
        self.body().push(node);
    }

    /// Appends text, merging with a preceding text node.
    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let body = self.body();
        if let Some(MarkupNode::Text(last)) = body.last_mut() {
            last.push_str(text);
        } else {
            body.push(MarkupNode::text(text));
        }
    }

    fn mark_else(&mut self, offset: usize) -> ParseResult<()> {
        match self.stack.last_mut().map(|frame| &mut frame.kind) {
            Some(FrameKind::Cond { else_body, .. }) => {
                if else_body.is_some() {
                    return Err(ParseError::new(
                        ParseErrorKind::DuplicateElse,
                        offset,
                        "a conditional has at most one <else/>",
                    ));
                }
                *else_body = Some(Vec::new());
                Ok(())
            }
            _ => Err(ParseError::new(
                ParseErrorKind::MisplacedElse,
                offset,
                "<else/> must appear directly inside <cond>",
            )),
        }
    }

    fn define(&mut self, name: String, body: Vec<MarkupNode>, offset: usize) -> ParseResult<()> {
        if self.fragments.contains_key(&name) {
            return Err(ParseError::new(
                ParseErrorKind::DuplicateFragment,
                offset,
                format!("fragment '{name}' is already defined"),
            ));
        }
        tracing::trace!(fragment = %name, "Defined fragment");
        self.fragments.insert(name, body);
        Ok(())
    }

    fn insert_fragment(&mut self, e: &BytesStart<'_>, offset: usize) -> ParseResult<()> {
        let name = required_attribute(e, GET, "name", offset)?;
        let nodes = self.fragments.get(&name).cloned().ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::UndefinedFragment,
                offset,
                format!("fragment '{name}' is not defined"),
            )
        })?;
        self.push_node(MarkupNode::Sequence(nodes));
        Ok(())
    }
}

fn element_name(e: &BytesStart<'_>, offset: usize) -> ParseResult<String> {
    std::str::from_utf8(e.name().as_ref())
        .map(str::to_owned)
        .map_err(|err| ParseError::xml(offset, err.to_string()))
}

/// Attributes of an element, XML-unescaped.
fn attributes(e: &BytesStart<'_>, offset: usize) -> ParseResult<Vec<(String, String)>> {
    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| ParseError::xml(offset, err.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| ParseError::xml(offset, err.to_string()))?;
        let value = std::str::from_utf8(&attr.value)
            .map_err(|err| ParseError::xml(offset, err.to_string()))?;
        let value = quick_xml::escape::unescape(value)
            .map_err(|err| ParseError::invalid_attribute(offset, err.to_string()))?;
        attrs.push((key.to_owned(), value.into_owned()));
    }
    Ok(attrs)
}

fn required_attribute(
    e: &BytesStart<'_>,
    element: &str,
    name: &str,
    offset: usize,
) -> ParseResult<String> {
    attributes(e, offset)?
        .into_iter()
        .find_map(|(key, value)| (key == name).then_some(value))
        .ok_or_else(|| ParseError::missing_attribute(offset, element, name))
}

/// Reads `flag` (or its alias `flags`) and the optional `else="true"`.
fn cond_expr(e: &BytesStart<'_>, offset: usize) -> ParseResult<BooleanExpr> {
    let mut condition: Option<String> = None;
    let mut negate = false;

    for (key, value) in attributes(e, offset)? {
        match key.as_str() {
            "flag" | "flags" => {
                if condition.is_some() {
                    return Err(ParseError::invalid_attribute(
                        offset,
                        "<cond> takes a single flag or flags attribute",
                    ));
                }
                condition = Some(value);
            }
            "else" => {
                negate = match value.trim() {
                    "true" => true,
                    "false" => false,
                    other => {
                        return Err(ParseError::invalid_attribute(
                            offset,
                            format!("else must be \"true\" or \"false\", found \"{other}\""),
                        ));
                    }
                };
            }
            other => {
                return Err(ParseError::invalid_attribute(
                    offset,
                    format!("unknown <cond> attribute: {other}"),
                ));
            }
        }
    }

    let condition = condition.ok_or_else(|| ParseError::missing_attribute(offset, COND, "flag"))?;
    let expr = parse_condition(&condition).map_err(|err| err.at(offset))?;
    Ok(if negate { expr.negate() } else { expr })
}
