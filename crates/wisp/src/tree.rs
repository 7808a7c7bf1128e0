// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The render tree: declarative output produced by a component's render call.
//!
//! A [`Tree`] is plain data. The [`Runtime`](crate::runtime::Runtime) commits
//! one per mounted instance and replaces it wholesale on re-render, so
//! anything holding a reference to the old tree can never observe a
//! half-updated render.

use std::fmt::{self, Display, Write};

use crate::runtime::EventId;
use crate::value::IntoText;

/// A single node in the render tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    Element(Element),
    Text(String),
    Button(Button),
}

/// A container node with a tag, an optional class, and children.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub tag: &'static str,
    pub class: Option<&'static str>,
    pub children: Vec<Node>,
}

/// A clickable node. The [`EventId`] routes clicks back to the event the
/// owning component bound during render.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Button {
    pub caption: String,
    pub on_click: EventId,
}

/// An ordered fragment of root nodes.
///
/// Components are free to render more than one root, the same way a view
/// fragment can hold sibling elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    roots: Vec<Node>,
}

/// Create an [`Element`] with the given tag and no children.
pub const fn el(tag: &'static str) -> Element {
    Element {
        tag,
        class: None,
        children: Vec::new(),
    }
}

/// Create a text [`Node`].
pub fn text(value: impl IntoText) -> Node {
    Node::Text(value.into_text())
}

impl Element {
    pub const fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn text(mut self, value: impl IntoText) -> Self {
        self.children.push(text(value));
        self
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<Button> for Node {
    fn from(button: Button) -> Self {
        Node::Button(button)
    }
}

impl Tree {
    pub const fn new() -> Self {
        Tree { roots: Vec::new() }
    }

    pub fn root(mut self, node: impl Into<Node>) -> Self {
        self.roots.push(node.into());
        self
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// All text content in the tree, in document order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        collect_texts(&self.roots, &mut out);
        out
    }

    /// All buttons in the tree, in document order.
    pub fn buttons(&self) -> Vec<&Button> {
        let mut out = Vec::new();
        collect_buttons(&self.roots, &mut out);
        out
    }

    /// Check whether any text node in the tree matches `needle` exactly.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| *t == needle)
    }
}

fn collect_texts<'a>(nodes: &'a [Node], out: &mut Vec<&'a str>) {
    for node in nodes {
        match node {
            Node::Element(el) => collect_texts(&el.children, out),
            Node::Text(text) => out.push(text),
            Node::Button(_) => {}
        }
    }
}

fn collect_buttons<'a>(nodes: &'a [Node], out: &mut Vec<&'a Button>) {
    for node in nodes {
        match node {
            Node::Element(el) => collect_buttons(&el.children, out),
            Node::Text(_) => {}
            Node::Button(button) => out.push(button),
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => {
                f.write_char('<')?;
                f.write_str(el.tag)?;
                if let Some(class) = el.class {
                    write!(f, " class=\"{class}\"")?;
                }
                f.write_char('>')?;
                for child in &el.children {
                    child.fmt(f)?;
                }
                write!(f, "</{}>", el.tag)
            }
            Node::Text(text) => f.write_str(text),
            Node::Button(button) => write!(f, "<button>{}</button>", button.caption),
        }
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for root in &self.roots {
            root.fmt(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let tree = Tree::new()
            .root(el("div").class("mybtn").text("Mycom"))
            .root(text(42_u32));

        assert_eq!(tree.to_string(), "<div class=\"mybtn\">Mycom</div>42");
    }

    #[test]
    fn queries() {
        let tree = Tree::new().root(
            el("div")
                .text("outer")
                .child(el("p").text("inner"))
                .child(Button {
                    caption: "go".into(),
                    on_click: EventId::next(),
                }),
        );

        assert_eq!(tree.texts(), ["outer", "inner"]);
        assert_eq!(tree.buttons().len(), 1);
        assert!(tree.contains_text("inner"));
        assert!(!tree.contains_text("inn"));
    }
}
