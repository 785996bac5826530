// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

//! Allow-list sanitizing without an HTML parser.
//!
//! Used when the crate is built without the `sys` feature. Exact
//! attribute-free tags from the allow-list pass through, well-formed
//! entities pass through, and every other `& < > " '` is escaped. Tags
//! are not rebalanced, but nothing outside the allow-list can survive.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::render::escape;

static ALLOWED_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^</?(?:strong|em|u|br|ul|ol|li)>").unwrap()
});

static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^&(?:[a-zA-Z][a-zA-Z0-9]*|#[0-9]+|#[xX][0-9a-fA-F]+);")
        .unwrap()
});

#[cfg_attr(feature = "sys", allow(dead_code))]
pub(super) fn sanitize(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(special) = rest.find(['<', '>', '&', '"', '\'']) {
        out.push_str(&rest[..special]);
        rest = &rest[special..];

        let kept = match rest.as_bytes()[0] {
            b'<' => ALLOWED_TAG.find(rest),
            b'&' => ENTITY.find(rest),
            _ => None,
        };
        match kept {
            Some(m) => {
                out.push_str(m.as_str());
                rest = &rest[m.end()..];
            }
            None => {
                out.push_str(&escape(&rest[..1]));
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
