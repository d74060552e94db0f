//! HTML parsing (HTML → Document import)
//!
//! Pipeline: HTML string → RcDom → top-level formatting elements → paragraphs
//!
//! Clipboard markup is rarely tidy, so paragraphs are found heuristically:
//!
//! 1. Line breaks in the source are removed before parsing.
//! 2. Only the outermost formatting elements are considered. Anything nested
//!    inside a selected element is decoded as part of it, never on its own.
//! 3. Block elements (`p`, `h1`..`h6`) each become one paragraph.
//! 4. Consecutive inline elements (`span`, `b`, `strong`, `i`, `em`, `s`,
//!    `del`) under one parent, with the loose text between them, are grouped
//!    into one paragraph. A `br` ends the group; a `br` with nothing pending
//!    produces an empty paragraph.
//! 5. A document with no formatting elements at all becomes one paragraph
//!    holding the body text.
//!
//! Every walk over the DOM keeps its own stack, so nesting depth is bounded by
//! memory rather than by the call stack.

use super::style::element_style;
use crate::error::FormatError;
use crate::model::{Document, HeadingLevel, Paragraph, Segment, TextStyle};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};
use std::collections::HashSet;
use std::rc::Rc;

/// How the decoder treats an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Block(Option<HeadingLevel>),
    LineBreak,
    Inline,
    /// Elements whose content is never document text.
    Ignored,
    Other,
}

fn classify(tag: &str) -> TagKind {
    match tag {
        "p" => TagKind::Block(None),
        "br" => TagKind::LineBreak,
        "span" | "b" | "strong" | "i" | "em" | "s" | "del" => TagKind::Inline,
        "script" | "style" | "template" | "noscript" | "head" | "title" => TagKind::Ignored,
        other => match HeadingLevel::from_tag(other) {
            Some(level) => TagKind::Block(Some(level)),
            None => TagKind::Other,
        },
    }
}

fn is_selected(kind: TagKind) -> bool {
    matches!(
        kind,
        TagKind::Block(_) | TagKind::LineBreak | TagKind::Inline
    )
}

/// Parse an HTML document or fragment into a fresh document.
pub fn parse_from_html(source: &str) -> Result<Document, FormatError> {
    let normalized = source.replace(['\r', '\n'], "");
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(normalized);

    let body = find_element(&dom.document, "body").unwrap_or_else(|| dom.document.clone());

    let mut collector = Collector::new(&body);
    collector.collect(&body);

    let paragraphs = if collector.selected == 0 {
        vec![decode_paragraph(&[body], None, TextStyle::PLAIN)]
    } else {
        collector.paragraphs
    };

    tracing::debug!(
        bytes = source.len(),
        selected = collector.selected,
        paragraphs = paragraphs.len(),
        "parsed html"
    );
    Ok(Document::new(paragraphs))
}

/// Nodes with a formatting element below them, reached through
/// non-formatting elements only.
fn containers_of_selected(root: &Handle) -> HashSet<*const Node> {
    let mut containers = HashSet::new();
    let mut pending = vec![(root.clone(), false)];

    while let Some((node, expanded)) = pending.pop() {
        if !expanded {
            pending.push((node.clone(), true));
            pending.extend(node.children.borrow().iter().map(|child| (child.clone(), false)));
            continue;
        }
        // Children were finished before their parent comes back up.
        let holds = node.children.borrow().iter().any(|child| match &child.data {
            NodeData::Element { name, .. } => {
                let kind = classify(&name.local);
                is_selected(kind)
                    || (kind == TagKind::Other && containers.contains(&Rc::as_ptr(child)))
            }
            _ => false,
        });
        if holds {
            containers.insert(Rc::as_ptr(&node));
        }
    }
    containers
}

/// One container element being walked: its children, the position reached
/// and the run of inline content not yet emitted.
struct Frame {
    children: Vec<Handle>,
    next: usize,
    run: Vec<Handle>,
    inherited: TextStyle,
}

impl Frame {
    fn new(node: &Handle, inherited: TextStyle) -> Self {
        Frame {
            children: node.children.borrow().clone(),
            next: 0,
            run: Vec::new(),
            inherited,
        }
    }
}

struct Collector {
    paragraphs: Vec<Paragraph>,
    /// Number of top-level formatting elements seen.
    selected: usize,
    containers: HashSet<*const Node>,
}

impl Collector {
    fn new(root: &Handle) -> Self {
        Collector {
            paragraphs: Vec::new(),
            selected: 0,
            containers: containers_of_selected(root),
        }
    }

    /// Walk the children of `root`, descending into every element that is not
    /// itself selected but holds a selected element.
    fn collect(&mut self, root: &Handle) {
        let mut frames = vec![Frame::new(root, TextStyle::PLAIN)];

        while let Some(frame) = frames.last_mut() {
            let Some(child) = frame.children.get(frame.next).cloned() else {
                if let Some(mut finished) = frames.pop() {
                    self.flush_run(&mut finished.run, finished.inherited);
                }
                continue;
            };
            frame.next += 1;
            let inherited = frame.inherited;

            match &child.data {
                NodeData::Element { name, .. } => match classify(&name.local) {
                    TagKind::Block(level) => {
                        self.flush_run(&mut frame.run, inherited);
                        self.selected += 1;
                        let paragraph =
                            decode_paragraph(std::slice::from_ref(&child), level, inherited);
                        self.paragraphs.push(paragraph);
                    }
                    TagKind::LineBreak => {
                        self.selected += 1;
                        if !self.flush_run(&mut frame.run, inherited) {
                            self.paragraphs.push(Paragraph::new(vec![Segment::empty()]));
                        }
                    }
                    TagKind::Inline => {
                        self.selected += 1;
                        frame.run.push(child.clone());
                    }
                    TagKind::Ignored => {
                        tracing::trace!(tag = &*name.local, "skipped non-content element");
                    }
                    TagKind::Other => {
                        if self.containers.contains(&Rc::as_ptr(&child)) {
                            self.flush_run(&mut frame.run, inherited);
                            let style = element_style(
                                &name.local,
                                style_attr(&child).as_deref(),
                                inherited,
                            );
                            frames.push(Frame::new(&child, style));
                        } else {
                            frame.run.push(child.clone());
                        }
                    }
                },
                NodeData::Text { .. } => frame.run.push(child.clone()),
                _ => {}
            }
        }
    }

    /// Emit the pending run as one paragraph. Returns false when the run held
    /// nothing worth a paragraph (nothing is emitted then).
    fn flush_run(&mut self, run: &mut Vec<Handle>, inherited: TextStyle) -> bool {
        let nodes = std::mem::take(run);
        if !nodes.iter().any(has_content) {
            return false;
        }
        self.paragraphs
            .push(decode_paragraph(&nodes, None, inherited));
        true
    }
}

/// Inline elements always count; anything else needs visible text.
fn has_content(node: &Handle) -> bool {
    let mut pending = vec![node.clone()];
    while let Some(node) = pending.pop() {
        match &node.data {
            NodeData::Text { contents } => {
                if !contents.borrow().trim().is_empty() {
                    return true;
                }
            }
            NodeData::Element { name, .. } => match classify(&name.local) {
                TagKind::Inline => return true,
                TagKind::Ignored => {}
                _ => pending.extend(node.children.borrow().iter().cloned()),
            },
            _ => {}
        }
    }
    false
}

/// Decode a block element, or a group of sibling nodes, into one paragraph.
fn decode_paragraph(
    nodes: &[Handle],
    heading: Option<HeadingLevel>,
    inherited: TextStyle,
) -> Paragraph {
    let mut segments = Vec::new();
    let mut pending: Vec<(Handle, TextStyle)> = nodes
        .iter()
        .rev()
        .map(|node| (node.clone(), inherited))
        .collect();

    while let Some((node, inherited)) = pending.pop() {
        match &node.data {
            NodeData::Text { contents } => {
                let text = contents.borrow();
                if !text.is_empty() {
                    segments.push(Segment::new(text.to_string(), inherited));
                }
            }
            NodeData::Element { name, .. } => {
                let tag: &str = &name.local;
                match classify(tag) {
                    TagKind::Ignored => {}
                    TagKind::LineBreak => segments.push(Segment::plain("\n")),
                    _ => {
                        let children = node.children.borrow();
                        if children.is_empty() {
                            segments.push(Segment::empty());
                            continue;
                        }
                        let style = element_style(tag, style_attr(&node).as_deref(), inherited);
                        pending.extend(children.iter().rev().map(|child| (child.clone(), style)));
                    }
                }
            }
            _ => {}
        }
    }

    if segments.is_empty() {
        segments.push(Segment::empty());
    }
    Paragraph { heading, segments }
}

fn style_attr(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == "style")
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

fn find_element(root: &Handle, tag: &str) -> Option<Handle> {
    let mut pending = vec![root.clone()];
    while let Some(node) = pending.pop() {
        if let NodeData::Element { name, .. } = &node.data {
            if &*name.local == tag {
                return Some(node.clone());
            }
        }
        pending.extend(node.children.borrow().iter().rev().cloned());
    }
    None
}
