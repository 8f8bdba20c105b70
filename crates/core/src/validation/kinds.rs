//! Recognized contact form field kinds.

use std::fmt;

/// A form field the validator knows how to check.
///
/// Field names arriving from the browser are matched exactly (case-sensitive)
/// against [`FieldKind::as_str`]. Anything else is an unknown field and is
/// never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Comment,
}

impl FieldKind {
    /// Every recognized kind, in the order the form renders them.
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Name,
        FieldKind::Phone,
        FieldKind::Email,
        FieldKind::Comment,
    ];

    /// Resolve a submitted field name to its kind.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "phone" => Some(Self::Phone),
            "email" => Some(Self::Email),
            "comment" => Some(Self::Comment),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Comment => "comment",
        }
    }

    /// Required fields run their full rule chain even when empty.
    ///
    /// Optional fields with an empty value are skipped entirely.
    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Phone)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
