//! Border glyph sets.

/// Glyphs used to draw one border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Column separator
    pub vertical: &'static str,
    /// Divider rule
    pub horizontal: &'static str,
    /// Divider rule crossing a column separator
    pub cross: &'static str,
    /// Divider rule meeting the left border
    pub left_tee: &'static str,
    /// Divider rule meeting the right border
    pub right_tee: &'static str,
}

const ASCII: Glyphs = Glyphs {
    vertical: "|",
    horizontal: "-",
    cross: "+",
    left_tee: "|",
    right_tee: "|",
};

const UNICODE: Glyphs = Glyphs {
    vertical: "│",
    horizontal: "─",
    cross: "┼",
    left_tee: "├",
    right_tee: "┤",
};

/// Border style of a rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// `-`, `|` and `+`
    #[default]
    Ascii,
    /// Box-drawing characters
    Unicode,
}

impl BorderStyle {
    /// Pick the style from the `use_unicode_borders` setting
    pub fn from_unicode(unicode: bool) -> Self {
        if unicode {
            BorderStyle::Unicode
        } else {
            BorderStyle::Ascii
        }
    }

    pub fn glyphs(self) -> &'static Glyphs {
        match self {
            BorderStyle::Ascii => &ASCII,
            BorderStyle::Unicode => &UNICODE,
        }
    }
}

/// Border strings for one render, derived once from a style and the
/// outside-borders setting.
///
/// Data rows are `leader + cell + divider + cell + ... + trailer`; the divider
/// rule uses the `rule_*` strings, which have the same widths so columns line up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub leader: String,
    pub divider: String,
    pub trailer: String,
    pub rule_leader: String,
    pub rule_divider: String,
    pub rule_trailer: String,
    pub horizontal: &'static str,
}

impl Frame {
    pub fn new(style: BorderStyle, outside_borders: bool) -> Self {
        let g = style.glyphs();
        let outside = |s: String| if outside_borders { s } else { String::new() };

        Frame {
            leader: outside(format!("{} ", g.vertical)),
            divider: format!(" {} ", g.vertical),
            trailer: outside(format!(" {}", g.vertical)),
            rule_leader: outside(format!("{}{}", g.left_tee, g.horizontal)),
            rule_divider: format!("{}{}{}", g.horizontal, g.cross, g.horizontal),
            rule_trailer: outside(format!("{}{}", g.horizontal, g.right_tee)),
            horizontal: g.horizontal,
        }
    }
}
