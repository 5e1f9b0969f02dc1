//! ANSI SGR sequences for colors and text attributes.
//!
//! Writers are generic over [`std::fmt::Write`] so painted blocks can be
//! built directly into a `String`.

use std::fmt::{self, Write};

use crate::types::{Attr, Color};

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Full SGR reset.
pub const RESET: &str = "\x1b[0m";

/// Set foreground color.
#[inline]
pub fn fg<W: Write>(w: &mut W, color: Color) -> fmt::Result {
    if color.is_terminal_default() {
        write!(w, "\x1b[39m")
    } else if color.is_ansi() {
        let index = color.ansi_index();
        if index < 8 {
            // Standard colors: 30-37
            write!(w, "\x1b[{}m", 30 + index)
        } else if index < 16 {
            // Bright colors: 90-97
            write!(w, "\x1b[{}m", 90 + index - 8)
        } else {
            write!(w, "\x1b[38;5;{}m", index)
        }
    } else {
        write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Set background color.
#[inline]
pub fn bg<W: Write>(w: &mut W, color: Color) -> fmt::Result {
    if color.is_terminal_default() {
        write!(w, "\x1b[49m")
    } else if color.is_ansi() {
        let index = color.ansi_index();
        if index < 8 {
            // Standard colors: 40-47
            write!(w, "\x1b[{}m", 40 + index)
        } else if index < 16 {
            // Bright colors: 100-107
            write!(w, "\x1b[{}m", 100 + index - 8)
        } else {
            write!(w, "\x1b[48;5;{}m", index)
        }
    } else {
        write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Set text attributes from bitflags.
#[allow(unused_assignments)]
pub fn attrs<W: Write>(w: &mut W, attr: Attr) -> fmt::Result {
    if attr.is_empty() {
        return Ok(());
    }

    let mut first = true;
    w.write_str(CSI)?;

    macro_rules! emit {
        ($flag:expr, $code:expr) => {
            if attr.contains($flag) {
                if !first {
                    w.write_char(';')?;
                }
                write!(w, "{}", $code)?;
                first = false;
            }
        };
    }

    emit!(Attr::BOLD, 1);
    emit!(Attr::DIM, 2);

    w.write_char('m')
}

/// Opening sequence for text in the given colors and attributes.
///
/// Terminal-default colors emit nothing, so an unstyled block opens with
/// an empty string.
pub fn open(foreground: Color, background: Color, attr: Attr) -> String {
    let mut out = String::new();
    attrs(&mut out, attr).ok();
    if !foreground.is_terminal_default() {
        fg(&mut out, foreground).ok();
    }
    if !background.is_terminal_default() {
        bg(&mut out, background).ok();
    }
    out
}
