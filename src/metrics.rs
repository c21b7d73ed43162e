//! Width measurement for the built-in Helvetica body font.
//!
//! printpdf does not expose metrics for the standard PDF fonts, so the advance widths of the
//! printable ASCII range are taken from the Adobe Helvetica AFM file (units of 1/1000 em).

/// Millimetres per typographic point.
pub const MM_PER_PT: f64 = 25.4 / 72.0;

/// Advance width used for characters outside the printable ASCII range.
const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // ' ' .. '/'
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // '0' .. '?'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    // '@' .. 'O'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    // 'P' .. '_'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    // '`' .. 'o'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    // 'p' .. '~'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

fn char_width(c: char) -> u16 {
    match c {
        ' '..='~' => HELVETICA_WIDTHS[c as usize - ' ' as usize],
        _ => FALLBACK_WIDTH,
    }
}

/// Converts a point size into millimetres.
pub fn pt_to_mm(points: f64) -> f64 {
    points * MM_PER_PT
}

/// Returns the width of `text` in millimetres when set in Helvetica at `font_size` points.
pub fn text_width_mm(text: &str, font_size: u8) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    f64::from(units) / 1000.0 * pt_to_mm(f64::from(font_size))
}

/// Characters WinAnsiEncoding places in the 0x80..=0x9F byte range.
const WIN_ANSI_EXTRAS: &[char] = &[
    '€', '‚', 'ƒ', '„', '…', '†', '‡', 'ˆ', '‰', 'Š', '‹', 'Œ', 'Ž', '‘', '’', '“', '”', '•', '–',
    '—', '˜', '™', 'š', '›', 'œ', 'ž', 'Ÿ',
];

/// Returns whether `c` has a code in WinAnsiEncoding, the encoding of the built-in font.
pub fn is_win_ansi_char(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{A0}'..='\u{FF}') || WIN_ANSI_EXTRAS.contains(&c)
}

/// Returns the first character of `text` the built-in font cannot encode, if any.
pub fn first_non_win_ansi_char(text: &str) -> Option<char> {
    text.chars().find(|&c| !is_win_ansi_char(c))
}
