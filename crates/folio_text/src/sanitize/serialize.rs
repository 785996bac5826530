// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

//! Writing a [`PaDom`] back out through the allow-list.

use tracing::debug;

use super::padom::{PaDom, PaDomHandle, PaDomNode};
use super::ALLOWED_ELEMENTS;
use crate::render::escape;

/// Elements whose content is not prose and goes away with them.
const DROPPED_WITH_CONTENT: [&str; 13] = [
    "iframe", "math", "noembed", "noframes", "noscript", "object", "script",
    "select", "style", "svg", "template", "textarea", "title",
];

enum Step<'a> {
    Enter(&'a PaDomHandle),
    Close(&'a str),
}

impl PaDom {
    /// Serialize the document, keeping allowed elements without any
    /// attributes and unwrapping every other element.
    pub(crate) fn to_sanitized_html(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![Step::Enter(self.document_handle())];

        while let Some(step) = stack.pop() {
            let handle = match step {
                Step::Close(tag) => {
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                    continue;
                }
                Step::Enter(handle) => handle,
            };

            match self.get_node(handle) {
                PaDomNode::Text(text) => out.push_str(&escape(&text.content)),
                PaDomNode::Ignored => {}
                PaDomNode::Document(_) => self.push_children(handle, &mut stack),
                PaDomNode::Container(element) => {
                    let tag = element.local_name();
                    if !element.is_html()
                        || DROPPED_WITH_CONTENT.iter().any(|d| *d == tag)
                    {
                        debug!(element = tag, "dropping element and its content");
                    } else if tag == "br" {
                        out.push_str("<br>");
                    } else if let Some(allowed) = ALLOWED_ELEMENTS
                        .iter()
                        .copied()
                        .find(|allowed| *allowed == tag)
                    {
                        out.push('<');
                        out.push_str(allowed);
                        out.push('>');
                        stack.push(Step::Close(allowed));
                        self.push_children(handle, &mut stack);
                    } else {
                        if tag != "html" {
                            debug!(element = tag, "unwrapping element");
                        }
                        self.push_children(handle, &mut stack);
                    }
                }
            }
        }
        out
    }

    fn push_children<'a>(
        &'a self,
        handle: &PaDomHandle,
        stack: &mut Vec<Step<'a>>,
    ) {
        stack.extend(self.children(handle).iter().rev().map(Step::Enter));
    }
}
