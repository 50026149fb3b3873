//! Line splitting shared by the output parsers and source heuristics.
//!
//! Unlike [`str::lines`], a lone `\r`, vertical tab, form feed, the
//! file/group/record separators, NEL and the Unicode line and paragraph
//! separators all end a line. `\r\n` counts as one break.

const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits `text` into lines without their terminators. A trailing break
/// does not produce an empty final line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while let Some(idx) = rest.find(&LINE_BREAKS[..]) {
        lines.push(&rest[..idx]);
        let tail = &rest[idx..];
        let skip = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[skip..];
    }

    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}
