//! Small text helpers shared by the line transforms.
//!
//! "Whitespace" follows the ECMAScript `WhiteSpace` and `LineTerminator` sets, the class editor
//! hosts use for trimming: it includes the BOM (U+FEFF) and excludes NEL (U+0085).

use crate::line_ending::LineEnding;

pub(crate) fn split_block(text: &str, ending: LineEnding) -> Vec<&str> {
    // `str::split` keeps trailing empty segments (N terminators => N+1 lines), so rejoining with
    // the same terminator reproduces the block byte for byte.
    text.split(ending.as_str()).collect()
}

pub(crate) fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

pub(crate) fn trim_start(line: &str) -> &str {
    line.trim_start_matches(is_js_whitespace)
}

pub(crate) fn trim_end(line: &str) -> &str {
    line.trim_end_matches(is_js_whitespace)
}

pub(crate) fn trim(line: &str) -> &str {
    line.trim_matches(is_js_whitespace)
}

pub(crate) fn is_blank(line: &str) -> bool {
    trim(line).is_empty()
}
