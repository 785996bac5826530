// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

//! An arena DOM filled in by html5ever while parsing.
//!
//! Nodes refer to each other by [`PaDomHandle`] (an index into the arena),
//! and all nodes are owned by the [`PaDom`]. Nodes the parser creates but
//! never attaches, or detaches later, stay in the arena; they are simply
//! unreachable from the document.

use html5ever::{LocalName, Namespace, QualName};

use super::panode_container::PaNodeContainer;

pub(crate) const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

pub(crate) fn paqual_name(local_name: &str) -> QualName {
    QualName::new(
        None,
        Namespace::from(HTML_NAMESPACE),
        LocalName::from(local_name),
    )
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct PaDomHandle(pub(crate) usize);

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PaNodeText {
    pub(crate) content: String,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum PaDomNode {
    Document(PaNodeContainer),
    Container(PaNodeContainer),
    Text(PaNodeText),
    /// Comments and processing instructions. They never reach the output.
    Ignored,
}

#[derive(Clone, Debug)]
pub(crate) struct PaDom {
    nodes: Vec<PaDomNode>,
    parents: Vec<Option<PaDomHandle>>,
    document_handle: PaDomHandle,
    // Answer for elem_name on nodes that have no name.
    anonymous: QualName,
}

impl PaDom {
    pub(crate) fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            parents: Vec::new(),
            document_handle: PaDomHandle(0),
            anonymous: paqual_name(""),
        };
        dom.document_handle =
            dom.add_node(PaDomNode::Document(PaNodeContainer::new(
                paqual_name(""),
            )));
        dom
    }

    pub(crate) fn document_handle(&self) -> &PaDomHandle {
        &self.document_handle
    }

    pub(crate) fn add_node(&mut self, node: PaDomNode) -> PaDomHandle {
        self.nodes.push(node);
        self.parents.push(None);
        PaDomHandle(self.nodes.len() - 1)
    }

    pub(crate) fn create_element(&mut self, name: QualName) -> PaDomHandle {
        self.add_node(PaDomNode::Container(PaNodeContainer::new(name)))
    }

    pub(crate) fn get_node(&self, handle: &PaDomHandle) -> &PaDomNode {
        &self.nodes[handle.0]
    }

    pub(crate) fn get_mut_node(&mut self, handle: &PaDomHandle) -> &mut PaDomNode {
        &mut self.nodes[handle.0]
    }

    pub(crate) fn name(&self, handle: &PaDomHandle) -> &QualName {
        match self.get_node(handle) {
            PaDomNode::Document(c) | PaDomNode::Container(c) => &c.name,
            PaDomNode::Text(_) | PaDomNode::Ignored => &self.anonymous,
        }
    }

    pub(crate) fn parent(&self, handle: &PaDomHandle) -> Option<&PaDomHandle> {
        self.parents[handle.0].as_ref()
    }

    pub(crate) fn children(&self, handle: &PaDomHandle) -> &[PaDomHandle] {
        match self.get_node(handle) {
            PaDomNode::Document(c) | PaDomNode::Container(c) => &c.children,
            PaDomNode::Text(_) | PaDomNode::Ignored => &[],
        }
    }

    fn children_mut(
        &mut self,
        handle: &PaDomHandle,
    ) -> Option<&mut Vec<PaDomHandle>> {
        match self.get_mut_node(handle) {
            PaDomNode::Document(c) | PaDomNode::Container(c) => {
                Some(&mut c.children)
            }
            PaDomNode::Text(_) | PaDomNode::Ignored => None,
        }
    }

    /// Remove `handle` from its parent's children, if it has a parent.
    pub(crate) fn detach(&mut self, handle: &PaDomHandle) {
        if let Some(parent) = self.parents[handle.0].take() {
            if let Some(children) = self.children_mut(&parent) {
                children.retain(|c| c != handle);
            }
        }
    }

    pub(crate) fn append_child(
        &mut self,
        parent: &PaDomHandle,
        child: PaDomHandle,
    ) {
        self.detach(&child);
        if let Some(children) = self.children_mut(parent) {
            children.push(child.clone());
            self.parents[child.0] = Some(parent.clone());
        }
    }

    /// Append text to `parent`, merging it into a trailing text node.
    pub(crate) fn append_text(&mut self, parent: &PaDomHandle, text: &str) {
        if let PaDomNode::Text(existing) = self.get_mut_node(parent) {
            existing.content.push_str(text);
            return;
        }
        if let Some(last) = self.children(parent).last().cloned() {
            if let PaDomNode::Text(existing) = self.get_mut_node(&last) {
                existing.content.push_str(text);
                return;
            }
        }
        let node = self.new_text(text);
        self.append_child(parent, node);
    }

    /// Insert `node` immediately before `sibling`.
    pub(crate) fn insert_before(
        &mut self,
        sibling: &PaDomHandle,
        node: PaDomHandle,
    ) {
        let Some(parent) = self.parent(sibling).cloned() else {
            return;
        };
        self.detach(&node);
        if let Some(children) = self.children_mut(&parent) {
            let index = children
                .iter()
                .position(|c| c == sibling)
                .unwrap_or(children.len());
            children.insert(index, node.clone());
            self.parents[node.0] = Some(parent);
        }
    }

    /// Insert text before `sibling`, merging it into a preceding text node.
    pub(crate) fn insert_text_before(
        &mut self,
        sibling: &PaDomHandle,
        text: &str,
    ) {
        let Some(parent) = self.parent(sibling).cloned() else {
            return;
        };
        let siblings = self.children(&parent);
        let previous = siblings
            .iter()
            .position(|c| c == sibling)
            .and_then(|i| i.checked_sub(1))
            .map(|i| siblings[i].clone());
        if let Some(previous) = previous {
            if let PaDomNode::Text(existing) = self.get_mut_node(&previous) {
                existing.content.push_str(text);
                return;
            }
        }
        let node = self.new_text(text);
        self.insert_before(sibling, node);
    }

    /// Move every child of `node` to the end of `new_parent`.
    pub(crate) fn reparent_children(
        &mut self,
        node: &PaDomHandle,
        new_parent: &PaDomHandle,
    ) {
        let moved = match self.children_mut(node) {
            Some(children) => std::mem::take(children),
            None => return,
        };
        for child in moved {
            self.parents[child.0] = None;
            self.append_child(new_parent, child);
        }
    }

    fn new_text(&mut self, text: &str) -> PaDomHandle {
        self.add_node(PaDomNode::Text(PaNodeText {
            content: text.to_owned(),
        }))
    }
}
