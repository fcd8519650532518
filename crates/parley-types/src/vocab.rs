use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

/// A category value whose allowed set is only known at run time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A closed, finite, non-empty set of category members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    name: String,
    members: BTreeSet<String>,
}

impl Vocabulary {
    /// Members are taken as given; blank ones are rejected and repeats collapse.
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let mut set = BTreeSet::new();
        for member in members {
            let member = member.into();
            if member.trim().is_empty() {
                return Err(ShapeError::BlankMember(name));
            }
            set.insert(member);
        }

        if set.is_empty() {
            return Err(ShapeError::EmptyVocabulary(name));
        }

        Ok(Self { name, members: set })
    }

    /// Comma-separated form, e.g. `"text, image"`.
    pub fn parse(name: impl Into<String>, list: &str) -> Result<Self, ShapeError> {
        let name = name.into();
        if list.trim().is_empty() {
            return Err(ShapeError::EmptyVocabulary(name));
        }
        Self::new(name, list.split(',').map(str::trim))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, member: &str) -> bool {
        self.members.contains(member)
    }

    pub fn admit(&self, tag: &Tag) -> Result<(), ShapeError> {
        if self.contains(tag.as_str()) {
            Ok(())
        } else {
            Err(ShapeError::UnknownMember {
                vocabulary: self.name.clone(),
                member: tag.to_string(),
            })
        }
    }

    /// Members in sorted order.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false: construction rejects an empty set.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_dedups() {
        let v = Vocabulary::parse("UserRole", " member , admin,member").unwrap();
        assert_eq!(v.name(), "UserRole");
        assert_eq!(v.len(), 2);
        assert_eq!(v.members().collect::<Vec<_>>(), vec!["admin", "member"]);
        assert!(v.contains("admin"));
        assert!(!v.contains(" admin"));
        assert!(!v.is_empty());
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(
            Vocabulary::parse("MessageType", "  "),
            Err(ShapeError::EmptyVocabulary(_))
        ));
        assert!(matches!(
            Vocabulary::new("MessageType", Vec::<String>::new()),
            Err(ShapeError::EmptyVocabulary(_))
        ));
    }

    #[test]
    fn blank_member_is_rejected() {
        assert!(matches!(
            Vocabulary::parse("MessageType", "text,,image"),
            Err(ShapeError::BlankMember(_))
        ));
        assert!(matches!(
            Vocabulary::parse("MessageType", "text,"),
            Err(ShapeError::BlankMember(_))
        ));
    }

    #[test]
    fn admit_is_case_sensitive() {
        let v = Vocabulary::new("MessageType", ["text"]).unwrap();
        assert!(v.admit(&Tag::from("text")).is_ok());

        let err = v.admit(&Tag::from("Text")).unwrap_err();
        assert_eq!(err.to_string(), "`Text` is not a member of MessageType");
    }
}
