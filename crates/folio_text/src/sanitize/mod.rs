// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

//! The final allow-list gate for rendered markup.
//!
//! Only `strong`, `em`, `u`, `br`, `ul`, `ol` and `li` survive, and never
//! with attributes. Text is escaped with the same function the renderer
//! uses, so text that was escaped once comes out unchanged.

mod fallback;
#[cfg(feature = "sys")]
mod padom;
#[cfg(feature = "sys")]
mod padom_creator;
#[cfg(feature = "sys")]
mod panode_container;
#[cfg(feature = "sys")]
mod serialize;
#[cfg(feature = "sys")]
mod sys;

#[cfg_attr(not(feature = "sys"), allow(dead_code))]
pub(crate) const ALLOWED_ELEMENTS: [&str; 7] =
    ["strong", "em", "u", "br", "ul", "ol", "li"];

/// Markup that had to be repaired while sanitizing.
///
/// The sanitized output is still safe to display and is carried along.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("markup contained {} parse error(s): {}", parse_errors.len(), parse_errors.join("; "))]
pub struct SanitizeError {
    pub parse_errors: Vec<String>,
    pub sanitized: String,
}

/// Strip every element and attribute outside the allow-list.
///
/// Never fails; malformed markup is repaired or escaped.
pub fn sanitize(html: &str) -> String {
    cfg_if::cfg_if! {
        if #[cfg(feature = "sys")] {
            sys::sanitize(html)
        } else {
            fallback::sanitize(html)
        }
    }
}

/// Like [`sanitize`], but report markup that did not parse cleanly.
pub fn sanitize_strict(html: &str) -> Result<String, SanitizeError> {
    cfg_if::cfg_if! {
        if #[cfg(feature = "sys")] {
            sys::sanitize_strict(html)
        } else {
            Ok(fallback::sanitize(html))
        }
    }
}

#[cfg(all(test, feature = "sys"))]
mod test {
    use super::*;

    #[test]
    fn clean_markup_passes_strict_sanitizing() {
        assert_eq!(
            sanitize_strict("a<br><ul><li>b</li></ul>"),
            Ok(String::from("a<br><ul><li>b</li></ul>"))
        );
    }

    #[test]
    fn repaired_markup_is_reported_with_its_output() {
        let err = sanitize_strict("<strong><em>x</strong></em>").unwrap_err();
        assert!(!err.parse_errors.is_empty());
        assert_eq!(err.sanitized, "<strong><em>x</em></strong>");
        assert_eq!(err.sanitized, sanitize("<strong><em>x</strong></em>"));
    }
}
