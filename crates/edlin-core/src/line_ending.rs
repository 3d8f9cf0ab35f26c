//! Line ending helpers.
//!
//! Every command works on the raw text of one selection and never normalizes it. The newline
//! sequence is detected per block so that files mixing conventions are edited safely: whatever
//! style a block uses, the lines produced from it use the same one.

/// The newline sequence used by a block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineEnding {
    /// Windows-style CRLF (`"\r\n"`).
    #[default]
    Crlf,
    /// Classic Mac-style CR (`'\r'`).
    Cr,
    /// Unix-style LF (`'\n'`).
    Lf,
}

impl LineEnding {
    /// Candidates in detection priority order. `"\r\n"` comes first so it is never mistaken for
    /// its `'\r'` prefix.
    pub const PRIORITY: [LineEnding; 3] = [Self::Crlf, Self::Cr, Self::Lf];

    /// The literal character sequence of this line ending.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Crlf => "\r\n",
            Self::Cr => "\r",
            Self::Lf => "\n",
        }
    }

    /// Detect the line ending of a block of text.
    ///
    /// Policy: the first candidate of [`LineEnding::PRIORITY`] that occurs anywhere in `text`
    /// wins. A block without any terminator yields [`LineEnding::Crlf`].
    pub fn detect_in_text(text: &str) -> Self {
        Self::detect_in_text_or(text, Self::default())
    }

    /// Same as [`LineEnding::detect_in_text`], but returns `fallback` when `text` has no
    /// terminator at all.
    pub fn detect_in_text_or(text: &str, fallback: Self) -> Self {
        Self::PRIORITY
            .into_iter()
            .find(|ending| text.contains(ending.as_str()))
            .unwrap_or(fallback)
    }
}

impl std::fmt::Display for LineEnding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Crlf => "CRLF",
            Self::Cr => "CR",
            Self::Lf => "LF",
        };
        f.write_str(name)
    }
}
