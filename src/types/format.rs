/// Whitespace layout of emitted stylesheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// No optional whitespace. Suitable for production.
    #[default]
    Minified,
    /// Two-space indentation and one declaration per line.
    Pretty,
}

impl Format {
    pub(crate) fn space(self) -> &'static str {
        match self {
            Format::Minified => "",
            Format::Pretty => " ",
        }
    }

    pub(crate) fn newline(self) -> &'static str {
        match self {
            Format::Minified => "",
            Format::Pretty => "\n",
        }
    }

    pub(crate) fn indent(self) -> &'static str {
        match self {
            Format::Minified => "",
            Format::Pretty => "  ",
        }
    }
}
