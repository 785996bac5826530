// Copyright 2026 Folio Developers
//
// SPDX-License-Identifier: Apache-2.0
// Please see LICENSE in the repository root for full details.

//! Line classification and list runs.

use crate::grammar::{classify_line, LineKind};

/// Where the line walk currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RunState {
    Normal,
    InBulletRun,
    InNumberRun,
}

impl RunState {
    fn for_line(kind: LineKind) -> Self {
        match kind {
            LineKind::Normal => Self::Normal,
            LineKind::Bullet => Self::InBulletRun,
            LineKind::Number => Self::InNumberRun,
        }
    }

    fn container(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::InBulletRun => Some("ul"),
            Self::InNumberRun => Some("ol"),
        }
    }
}

/// Turn list lines into `<li>` items grouped in `<ul>`/`<ol>` runs, and
/// join everything else with `<br>`.
///
/// A container is opened on the transition into a run and closed on the
/// transition out of it. Two adjacent lines are separated by `<br>` unless
/// both are list items.
pub(super) fn join_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut state = RunState::Normal;

    for (index, line) in text.split('\n').enumerate() {
        let classified = classify_line(line);
        let next = RunState::for_line(classified.kind);

        if next != state {
            if let Some(tag) = state.container() {
                push_tag(&mut out, "/", tag);
            }
        }
        if index > 0
            && (state == RunState::Normal || next == RunState::Normal)
        {
            out.push_str("<br>");
        }
        if next != state {
            if let Some(tag) = next.container() {
                push_tag(&mut out, "", tag);
            }
        }

        if next == RunState::Normal {
            out.push_str(line);
        } else {
            out.push_str("<li>");
            out.push_str(classified.body);
            out.push_str("</li>");
        }
        state = next;
    }

    if let Some(tag) = state.container() {
        push_tag(&mut out, "/", tag);
    }
    out
}

fn push_tag(out: &mut String, slash: &str, tag: &str) {
    out.push('<');
    out.push_str(slash);
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod test {
    use super::join_lines;

    #[test]
    fn normal_lines_are_joined_with_br() {
        assert_eq!(join_lines("a\nb"), "a<br>b");
        assert_eq!(join_lines(""), "");
    }

    #[test]
    fn consecutive_bullets_share_one_list() {
        assert_eq!(
            join_lines("• a\n• b\n• c"),
            "<ul><li>a</li><li>b</li><li>c</li></ul>"
        );
    }

    #[test]
    fn list_after_text_is_separated_by_br() {
        assert_eq!(join_lines("x\n1. a"), "x<br><ol><li>a</li></ol>");
        assert_eq!(join_lines("• a\nx"), "<ul><li>a</li></ul><br>x");
    }

    #[test]
    fn switching_list_kind_starts_a_new_list() {
        assert_eq!(
            join_lines("• a\n1. b\n2. c\n• d"),
            "<ul><li>a</li></ul><ol><li>b</li><li>c</li></ol>\
             <ul><li>d</li></ul>"
        );
    }

    #[test]
    fn blank_line_ends_a_run() {
        assert_eq!(
            join_lines("• a\n\n• b"),
            "<ul><li>a</li></ul><br><br><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn indented_items_are_still_items() {
        assert_eq!(
            join_lines("  • a\n\t3. b"),
            "<ul><li>a</li></ul><ol><li>b</li></ol>"
        );
    }

    #[test]
    fn items_keep_inline_markup() {
        assert_eq!(
            join_lines("• <strong>a</strong>"),
            "<ul><li><strong>a</strong></li></ul>"
        );
    }
}
