//! Parsed template documents.
//!
//! The document is read once with `quick-xml` into a small tree of
//! [`Node`]s. Text and CDATA sections both become literal blocks;
//! whitespace-only text between elements is dropped, CDATA never is.

use std::path::Path;
use std::str::FromStr;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{GenerateError, Result};

/// One node of a template document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text copied to output after slug expansion.
    Literal(String),
    /// Children repeated once per included entity.
    Entity(Vec<Node>),
    /// A fragment repeated once per included attribute of the current entity.
    AttributeList { fragment: Option<String> },
    /// A nested `<template>` element; its children are processed in place.
    Container(Vec<Node>),
    /// An element the generator does not know, skipped with its children.
    Ignored(String),
}

impl Node {
    /// Returns the element name of this node, as shown in logs.
    pub fn name(&self) -> &str {
        match self {
            Node::Literal(_) => "#cdata-section",
            Node::Entity(_) => "entity",
            Node::AttributeList { .. } => "attribute_list",
            Node::Container(_) => "template",
            Node::Ignored(name) => name,
        }
    }
}

/// A template, ready to drive generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateDocument {
    nodes: Vec<Node>,
}

impl TemplateDocument {
    /// Reads and parses a template file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source =
            std::fs::read_to_string(path).map_err(|source| GenerateError::TemplateNotFound {
                path: path.to_path_buf(),
                source,
            })?;
        parse(&source, &path.display().to_string())
    }

    /// Parses a template held in memory.
    pub fn parse(source: &str) -> Result<Self> {
        parse(source, "<inline>")
    }

    /// Returns the top-level nodes, in document order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

impl FromStr for TemplateDocument {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self> {
        TemplateDocument::parse(s)
    }
}

/// Element tree as read from the XML stream, before interpretation.
enum RawNode {
    Element { name: String, children: Vec<RawNode> },
    Text(String),
}

fn parse(source: &str, origin: &str) -> Result<TemplateDocument> {
    let mut reader = Reader::from_str(source);
    // Bottom entry collects top-level nodes.
    let mut stack: Vec<(String, Vec<RawNode>)> = vec![(String::new(), Vec::new())];

    loop {
        let event = reader.read_event().map_err(|e| {
            GenerateError::invalid_template(
                origin,
                format!("{} at byte {}", e, reader.error_position()),
            )
        })?;

        let node = match event {
            Event::Start(start) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                stack.push((name, Vec::new()));
                continue;
            }
            Event::End(end) => {
                if stack.len() < 2 {
                    return Err(GenerateError::invalid_template(
                        origin,
                        format!(
                            "unexpected closing tag </{}>",
                            String::from_utf8_lossy(end.name().as_ref())
                        ),
                    ));
                }
                let Some((name, children)) = stack.pop() else {
                    continue;
                };
                RawNode::Element { name, children }
            }
            Event::Empty(empty) => RawNode::Element {
                name: String::from_utf8_lossy(empty.name().as_ref()).into_owned(),
                children: Vec::new(),
            },
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| GenerateError::invalid_template(origin, e))?;
                if text.trim().is_empty() {
                    continue;
                }
                RawNode::Text(text.into_owned())
            }
            Event::CData(cdata) => {
                let bytes = cdata.into_inner().into_owned();
                let text = String::from_utf8(bytes)
                    .map_err(|e| GenerateError::invalid_template(origin, e))?;
                RawNode::Text(text)
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctypes.
            _ => continue,
        };

        if let Some((_, siblings)) = stack.last_mut() {
            siblings.push(node);
        }
    }

    if stack.len() > 1 {
        let unclosed = stack.last().map(|(name, _)| name.as_str()).unwrap_or_default();
        return Err(GenerateError::invalid_template(
            origin,
            format!("unclosed element <{}>", unclosed),
        ));
    }

    let top = stack.pop().map(|(_, nodes)| nodes).unwrap_or_default();
    Ok(TemplateDocument {
        nodes: unwrap_root(top).into_iter().map(convert).collect(),
    })
}

/// A single wrapping element is the document root; its children are the
/// top-level nodes. Anything else is already the root's child list.
fn unwrap_root(mut top: Vec<RawNode>) -> Vec<RawNode> {
    let is_root = matches!(
        top.as_slice(),
        [RawNode::Element { name, .. }] if name != "entity" && name != "attribute_list"
    );
    if is_root {
        if let Some(RawNode::Element { children, .. }) = top.pop() {
            return children;
        }
    }
    top
}

fn convert(raw: RawNode) -> Node {
    match raw {
        RawNode::Text(text) => Node::Literal(text),
        RawNode::Element { name, children } => match name.as_str() {
            "entity" => Node::Entity(children.into_iter().map(convert).collect()),
            "attribute_list" => Node::AttributeList {
                fragment: children.into_iter().find_map(|child| match child {
                    RawNode::Text(text) => Some(text),
                    RawNode::Element { .. } => None,
                }),
            },
            "template" => Node::Container(children.into_iter().map(convert).collect()),
            _ => Node::Ignored(name),
        },
    }
}
