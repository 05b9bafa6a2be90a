//! Member identifiers (`T:Namespace.Type`, `P:Namespace.Type.Property`).

use std::fmt;
use std::str::FromStr;

use crate::error::MembersError;

/// Kind of documented member, encoded as the id prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// `N:`
    Namespace,
    /// `T:`
    Type,
    /// `F:`
    Field,
    /// `P:`
    Property,
    /// `M:`
    Method,
    /// `E:`
    Event,
}

impl MemberKind {
    /// Id prefix character.
    #[must_use]
    pub fn prefix(self) -> char {
        match self {
            Self::Namespace => 'N',
            Self::Type => 'T',
            Self::Field => 'F',
            Self::Property => 'P',
            Self::Method => 'M',
            Self::Event => 'E',
        }
    }

    /// Kind for an id prefix character.
    #[must_use]
    pub fn from_prefix(prefix: char) -> Option<Self> {
        Some(match prefix {
            'N' => Self::Namespace,
            'T' => Self::Type,
            'F' => Self::Field,
            'P' => Self::Property,
            'M' => Self::Method,
            'E' => Self::Event,
            _ => return None,
        })
    }
}

/// Qualified member id as used in `<member name="...">`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemberId {
    kind: MemberKind,
    name: String,
}

impl MemberId {
    /// Create an id from a kind and a qualified name.
    pub fn new(kind: MemberKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// Id of a type. Nested type separators (`+`) are written as `.`.
    #[must_use]
    pub fn of_type(full_name: &str) -> Self {
        Self::new(MemberKind::Type, full_name.replace('+', "."))
    }

    /// Id of a property declared on a type.
    #[must_use]
    pub fn of_property(type_full_name: &str, property: &str) -> Self {
        Self::new(
            MemberKind::Property,
            format!("{}.{property}", type_full_name.replace('+', ".")),
        )
    }

    /// Member kind.
    #[must_use]
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Qualified name without the prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.prefix(), self.name)
    }
}

impl FromStr for MemberId {
    type Err = MembersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MembersError::InvalidMemberId(s.to_owned());
        let (prefix, name) = s.split_once(':').ok_or_else(invalid)?;
        let mut chars = prefix.chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(c), None) => MemberKind::from_prefix(c).ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };
        if name.is_empty() {
            return Err(invalid());
        }
        Ok(Self::new(kind, name))
    }
}
