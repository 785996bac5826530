// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

//! Bullet and numbered list prefixes.

use crate::grammar::{classify_line, FormattingOperation};

use super::{splice, ToggleBehavior, ToggleResult, Toggler};

/// Byte range of the line containing byte offset `at`, without its `\n`.
pub(super) fn line_bounds(text: &str, at: usize) -> (usize, usize) {
    let start = text[..at].rfind('\n').map_or(0, |i| i + 1);
    let end = text[at..].find('\n').map_or(text.len(), |i| at + i);
    (start, end)
}

impl Toggler {
    /// Insert `prefix` before the first non-whitespace character of the
    /// caret's line. Only the start of the selection is looked at.
    pub(super) fn toggle_list(
        &self,
        text: &str,
        caret: usize,
        op: FormattingOperation,
        prefix: &str,
    ) -> ToggleResult {
        let (line_start, line_end) = line_bounds(text, caret);
        let line = &text[line_start..line_end];
        let line = line.strip_suffix('\r').unwrap_or(line);
        let classified = classify_line(line);

        if self.options.behavior == ToggleBehavior::Toggle
            && Some(classified.kind) == op.line_kind()
        {
            let prefix_start = line_start + classified.indent;
            let prefix_end = prefix_start + classified.prefix_len;
            let mut new_text = String::with_capacity(text.len());
            new_text.push_str(&text[..prefix_start]);
            new_text.push_str(&text[prefix_end..]);
            let new_caret = if caret >= prefix_end {
                caret - classified.prefix_len
            } else {
                caret.min(prefix_start)
            };
            return ToggleResult::from_byte_range(
                new_text,
                new_caret..new_caret,
            );
        }

        let indent = line.len() - line.trim_start().len();
        let at = line_start + indent;
        let new_text = splice(text, at, &[prefix]);
        let new_caret = at + prefix.len();
        ToggleResult::from_byte_range(new_text, new_caret..new_caret)
    }
}

#[cfg(test)]
mod test {
    use crate::tests::testutils_toggle::{tg, tg_with};
    use crate::FormattingOperation::*;
    use crate::{ToggleBehavior, ToggleOptions, Toggler};

    fn toggling() -> Toggler {
        Toggler::new(ToggleOptions {
            behavior: ToggleBehavior::Toggle,
            ..Default::default()
        })
    }

    #[test]
    fn bullet_at_start_of_empty_buffer() {
        assert_eq!(tg("|", Bullet), "• |");
        assert_eq!(tg("|", Number), "1. |");
    }

    #[test]
    fn prefix_goes_to_the_start_of_the_caret_line() {
        assert_eq!(tg("one\ntw|o\nthree", Bullet), "one\n• |two\nthree");
        assert_eq!(tg("one\ntwo|", Number), "one\n1. |two");
    }

    #[test]
    fn prefix_goes_after_indentation() {
        assert_eq!(tg("  ind|ented", Bullet), "  • |indented");
        assert_eq!(tg("\t|x", Number), "\t1. |x");
    }

    #[test]
    fn caret_on_an_empty_line_gets_the_prefix() {
        assert_eq!(tg("a\n|\nb", Bullet), "a\n• |\nb");
    }

    #[test]
    fn only_the_selection_start_is_used() {
        assert_eq!(tg("a{b\nc}|d", Bullet), "• |ab\ncd");
    }

    #[test]
    fn existing_prefix_gets_another_by_default() {
        assert_eq!(tg("• item|", Bullet), "• |• item");
    }

    #[test]
    fn crlf_lines_are_prefixed_before_the_text() {
        assert_eq!(tg("a\r\nb|\r\n", Bullet), "a\r\n• |b\r\n");
        assert_eq!(tg("a\r\n|  \r\nb", Bullet), "a\r\n  • |\r\nb");
    }

    #[test]
    fn toggle_removes_an_existing_bullet() {
        let t = toggling();
        assert_eq!(tg_with(&t, "a\n• it|em", Bullet), "a\nit|em");
        assert_eq!(tg_with(&t, "  • |item", Bullet), "  |item");
    }

    #[test]
    fn toggle_ignores_a_crlf_line_end_after_a_bare_number() {
        assert_eq!(
            tg_with(&toggling(), "1.|\r\nb", Number),
            "1. |1.\r\nb"
        );
    }

    #[test]
    fn toggle_removes_any_number() {
        assert_eq!(tg_with(&toggling(), "12. st|ep", Number), "st|ep");
    }

    #[test]
    fn toggle_moves_a_caret_inside_the_prefix_to_its_start() {
        assert_eq!(tg_with(&toggling(), "12|. step", Number), "|step");
        assert_eq!(tg_with(&toggling(), "  •| x", Bullet), "  |x");
    }

    #[test]
    fn toggle_adds_the_other_kind_of_prefix() {
        assert_eq!(tg_with(&toggling(), "• it|em", Number), "1. |• item");
    }
}
