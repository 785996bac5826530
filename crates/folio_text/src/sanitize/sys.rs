// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

use tracing::debug;

use super::padom_creator::PaDomCreator;
use super::SanitizeError;

/// Parse with html5ever and serialize through the allow-list. Parse errors
/// are returned alongside the sanitized output.
pub(super) fn sanitize_with_errors(html: &str) -> (String, Vec<String>) {
    match PaDomCreator::parse(html) {
        Ok(dom) => (dom.to_sanitized_html(), Vec::new()),
        Err(err) => {
            debug!(
                errors = err.parse_errors.len(),
                "markup needed repair while sanitizing"
            );
            (err.dom.to_sanitized_html(), err.parse_errors)
        }
    }
}

pub(super) fn sanitize(html: &str) -> String {
    sanitize_with_errors(html).0
}

pub(super) fn sanitize_strict(html: &str) -> Result<String, SanitizeError> {
    let (sanitized, parse_errors) = sanitize_with_errors(html);
    if parse_errors.is_empty() {
        Ok(sanitized)
    } else {
        Err(SanitizeError {
            parse_errors,
            sanitized,
        })
    }
}
