//! Display-width measurement for terminal text.
//!
//! Widths are in terminal cells. ANSI escape sequences are zero-width, East
//! Asian wide characters and emoji sequences take two cells, combining marks
//! take none.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

// =============================================================================
// ANSI stripping
// =============================================================================

/// Strip ANSI escape sequences from a string.
///
/// Returns `Cow::Borrowed` when no escape sequences are present.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&0x1B) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    while i < len {
        if bytes[i] == 0x1B {
            i = skip_escape_sequence(bytes, i);
        } else {
            // ESC is single-byte ASCII, so slicing at ESC never splits UTF-8
            let start = i;
            while i < len && bytes[i] != 0x1B {
                i += 1;
            }
            result.push_str(&s[start..i]);
        }
    }

    Cow::Owned(result)
}

/// Skip an escape sequence starting at `pos` (which points to ESC byte).
/// Returns the byte index after the complete sequence.
fn skip_escape_sequence(bytes: &[u8], pos: usize) -> usize {
    let next = pos + 1;
    if next >= bytes.len() {
        return bytes.len();
    }

    match bytes[next] {
        b'[' => skip_csi(bytes, next + 1),
        b']' | b'P' | b'^' | b'_' => skip_string_terminated(bytes, next + 1),
        // Two-byte escape; a lone ESC before non-ASCII text drops only the ESC
        b if b.is_ascii() => next + 1,
        _ => next,
    }
}

/// Skip a CSI sequence. `pos` is the byte after `[`.
fn skip_csi(bytes: &[u8], pos: usize) -> usize {
    let len = bytes.len();
    let mut i = pos;

    while i < len {
        let b = bytes[i];
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&b) {
            return i;
        }
        i += 1;
    }

    len
}

/// Skip OSC/DCS/PM/APC. Terminates with BEL or ST (ESC \).
fn skip_string_terminated(bytes: &[u8], pos: usize) -> usize {
    let len = bytes.len();
    let mut i = pos;

    while i < len {
        match bytes[i] {
            0x07 => return i + 1,
            0x1B if i + 1 < len && bytes[i + 1] == b'\\' => return i + 2,
            _ => i += 1,
        }
    }

    len
}

// =============================================================================
// Control characters
// =============================================================================

/// Cells a tab expands to.
pub const TAB_WIDTH: usize = 4;

#[inline]
fn is_control(b: u8) -> bool {
    (b < 0x20 && b != 0x1B) || b == 0x7F
}

/// Expand tabs to [`TAB_WIDTH`] spaces and drop other control characters.
///
/// Escape sequences pass through untouched. Returns `Cow::Borrowed` when
/// there is nothing to replace.
pub fn expand_controls(s: &str) -> Cow<'_, str> {
    if !s.bytes().any(is_control) {
        return Cow::Borrowed(s);
    }

    let bytes = s.as_bytes();
    let mut result = String::with_capacity(s.len() + TAB_WIDTH);
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            0x1B => {
                let end = skip_escape_sequence(bytes, i);
                result.push_str(&s[i..end]);
                i = end;
            }
            b'\t' => {
                result.extend(std::iter::repeat_n(' ', TAB_WIDTH));
                i += 1;
            }
            b if is_control(b) => i += 1,
            _ => {
                // Controls and ESC are ASCII, so these cuts stay on char boundaries
                let start = i;
                while i < bytes.len() && bytes[i] != 0x1B && !is_control(bytes[i]) {
                    i += 1;
                }
                result.push_str(&s[start..i]);
            }
        }
    }

    Cow::Owned(result)
}

// =============================================================================
// Width
// =============================================================================

/// Display width of a single codepoint.
#[inline]
pub fn char_width(c: char) -> usize {
    match c as u32 {
        // Misc symbols / dingbats
        0x2600..=0x27BF => 2,
        // Pictographs, emoticons, transport
        0x1F300..=0x1F64F | 0x1F680..=0x1F6FF => 2,
        // Supplemental pictographs
        0x1F900..=0x1F9FF | 0x1FA70..=0x1FAFF => 2,
        _ => c.width().unwrap_or(0),
    }
}

/// Display width of a grapheme cluster.
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return 0,
    };

    if grapheme.len() == first.len_utf8() {
        return char_width(first);
    }

    // Regional indicator pair (flag)
    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }

    for c in chars {
        match c as u32 {
            0x200D | 0xFE0F | 0x1F3FB..=0x1F3FF | 0x20E3 => return 2,
            _ => {}
        }
    }

    first.width().unwrap_or(0)
}

/// Display width of a string, ignoring ANSI escape sequences.
pub fn string_width(s: &str) -> usize {
    if s.is_empty() {
        return 0;
    }

    // Fast path: printable ASCII bytes
    if s.is_ascii() && !s.as_bytes().contains(&0x1B) {
        return s.bytes().filter(|&b| b >= 0x20 && b != 0x7F).count();
    }

    strip_ansi(s).graphemes(true).map(grapheme_width).sum()
}

// =============================================================================
// Clipping
// =============================================================================

/// Clip `s` to at most `max_width` cells.
///
/// Escape sequences are copied through untouched so styling opened before
/// the cut is still closed by whatever follows. Never splits a grapheme.
pub fn clip_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if string_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    let bytes = s.as_bytes();
    let mut result = String::with_capacity(s.len());
    let mut width = 0;
    let mut full = false;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == 0x1B {
            let end = skip_escape_sequence(bytes, i);
            result.push_str(&s[i..end]);
            i = end;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i] != 0x1B {
            i += 1;
        }

        if full {
            continue;
        }

        for grapheme in s[start..i].graphemes(true) {
            let gw = grapheme_width(grapheme);
            if width + gw > max_width {
                full = true;
                break;
            }
            result.push_str(grapheme);
            width += gw;
        }
    }

    Cow::Owned(result)
}
