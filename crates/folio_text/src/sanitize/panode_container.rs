// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

use html5ever::QualName;

use super::padom::{PaDomHandle, HTML_NAMESPACE};

/// An element (or the document) in a [`PaDom`](super::padom::PaDom).
///
/// Attributes are never recorded: nothing in the sanitized output may
/// carry one.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PaNodeContainer {
    pub(crate) name: QualName,
    pub(crate) children: Vec<PaDomHandle>,
}

impl PaNodeContainer {
    pub(crate) fn new(name: QualName) -> Self {
        Self {
            name,
            children: Vec::new(),
        }
    }

    pub(crate) fn local_name(&self) -> &str {
        &self.name.local
    }

    pub(crate) fn is_html(&self) -> bool {
        &*self.name.ns == HTML_NAMESPACE
    }
}

#[test]
fn test_svg_elements_are_not_html() {
    let svg = PaNodeContainer::new(QualName::new(
        None,
        "http://www.w3.org/2000/svg".into(),
        "svg".into(),
    ));
    assert!(!svg.is_html());
    assert_eq!(svg.local_name(), "svg");

    let em = PaNodeContainer::new(super::padom::paqual_name("em"));
    assert!(em.is_html());
}
