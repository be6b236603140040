//! Badge visual styles.

/// Named visual variant of the badge image set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeStyle {
    Flat,
    Classic,
}

impl BadgeStyle {
    /// Style served when the request names no style, or an unknown one.
    pub const DEFAULT: BadgeStyle = BadgeStyle::Flat;

    /// Every style, in declaration order.
    pub const ALL: [BadgeStyle; 2] = [BadgeStyle::Flat, BadgeStyle::Classic];

    /// Resolve an optional `style` query token.
    ///
    /// An absent or unrecognized token selects the default style; a style
    /// token is never a request error.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("flat") => BadgeStyle::Flat,
            Some("classic") => BadgeStyle::Classic,
            _ => BadgeStyle::DEFAULT,
        }
    }

    /// Directory name holding this style's assets.
    pub fn dir_name(&self) -> &'static str {
        match self {
            BadgeStyle::Flat => "flat",
            BadgeStyle::Classic => "classic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_resolve() {
        assert_eq!(BadgeStyle::from_token(Some("flat")), BadgeStyle::Flat);
        assert_eq!(BadgeStyle::from_token(Some("classic")), BadgeStyle::Classic);
    }

    #[test]
    fn absent_or_unknown_tokens_fall_back_to_default() {
        assert_eq!(BadgeStyle::from_token(None), BadgeStyle::DEFAULT);
        assert_eq!(BadgeStyle::from_token(Some("plastic")), BadgeStyle::DEFAULT);
        assert_eq!(BadgeStyle::from_token(Some("")), BadgeStyle::DEFAULT);
    }
}
