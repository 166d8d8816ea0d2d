//! Text previews of tactile patterns for terminals and logs

use crate::spatial::matrix::TactileMatrix;
use std::fmt;
use std::str::FromStr;

/// Glyph set used to draw raised and lowered balls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PreviewStyle {
    /// Filled and hollow circles
    #[default]
    Unicode,
    /// `#` and `.`
    Ascii,
    /// Blue and white circle emoji
    Emoji,
    /// Raw `1` and `0`
    Digits,
}

impl PreviewStyle {
    /// Glyphs for (raised, lowered)
    pub const fn glyphs(self) -> (&'static str, &'static str) {
        match self {
            Self::Unicode => ("●", "○"),
            Self::Ascii => ("#", "."),
            Self::Emoji => ("🔵", "⚪"),
            Self::Digits => ("1", "0"),
        }
    }
}

impl fmt::Display for PreviewStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unicode => "unicode",
            Self::Ascii => "ascii",
            Self::Emoji => "emoji",
            Self::Digits => "digits",
        };
        f.write_str(name)
    }
}

impl FromStr for PreviewStyle {
    type Err = std::convert::Infallible;

    /// Unknown names draw with digits
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "unicode" => Self::Unicode,
            "ascii" => Self::Ascii,
            "emoji" => Self::Emoji,
            _ => Self::Digits,
        })
    }
}

/// Render one labelled line per row, e.g. `Row  1: ● ○ ○ ●`
pub fn render_preview(matrix: &TactileMatrix, style: PreviewStyle) -> String {
    let (on, off) = style.glyphs();
    matrix
        .iter_rows()
        .enumerate()
        .map(|(index, row)| {
            let cells: Vec<&str> = row
                .iter()
                .map(|&value| if value == TactileMatrix::RAISED { on } else { off })
                .collect();
            format!("Row {:2}: {}", index + 1, cells.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
