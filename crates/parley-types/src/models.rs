use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ShapeError;
use crate::vocab::{Tag, Vocabulary};

// -- Identifiers --

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Fresh UUID v4 text, for producers that do not bring their own ids.
            pub fn random() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

opaque_id!(
    /// Opaque message identifier. Uniqueness is up to whoever issues it.
    MessageId
);

opaque_id!(
    /// Opaque user identifier. Messages hold one of these instead of a `User`.
    UserId
);

// -- Categories --

/// Message category when the member list comes from configuration.
pub type MessageType = Tag;

/// User role when the member list comes from configuration.
pub type UserRole = Tag;

// -- Records --

/// A sent message. Every field is required and the record never changes
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Message<T> {
    id: MessageId,
    #[serde(rename = "type")]
    kind: T,
    content: String,
    sender_id: UserId,
    created_at: DateTime<Utc>,
}

impl<T> Message<T> {
    pub fn new(
        id: MessageId,
        kind: T,
        content: impl Into<String>,
        sender_id: UserId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            kind,
            content: content.into(),
            sender_id,
            created_at,
        }
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// The category, sent on the wire as `type`.
    pub fn kind(&self) -> &T {
        &self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sender_id(&self) -> &UserId {
        &self.sender_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// True when `user` is the one `sender_id` points at.
    pub fn is_from<R>(&self, user: &User<R>) -> bool {
        self.sender_id == user.id
    }
}

impl Message<MessageType> {
    pub fn check(&self, types: &Vocabulary) -> Result<(), ShapeError> {
        types.admit(&self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct User<R> {
    id: UserId,
    name: String,
    role: R,
    created_at: DateTime<Utc>,
}

impl<R> User<R> {
    pub fn new(id: UserId, name: impl Into<String>, role: R, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &R {
        &self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl User<UserRole> {
    pub fn check(&self, roles: &Vocabulary) -> Result<(), ShapeError> {
        roles.admit(&self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Role {
        Member,
    }

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn construct_user_and_message() {
        let user = User::new(UserId::from("u1"), "Ada", Role::Member, t(0));
        let message = Message::new(
            MessageId::from("m1"),
            Tag::from("text"),
            "hello",
            UserId::from("u1"),
            t(1),
        );

        assert_eq!(user.id().as_str(), "u1");
        assert_eq!(user.name(), "Ada");
        assert_eq!(*user.role(), Role::Member);
        assert_eq!(user.created_at(), t(0));

        assert_eq!(message.id().as_str(), "m1");
        assert_eq!(message.kind().as_str(), "text");
        assert_eq!(message.content(), "hello");
        assert_eq!(message.sender_id(), user.id());
        assert_eq!(message.created_at(), t(1));
        assert!(message.is_from(&user));
    }

    #[test]
    fn empty_content_is_accepted() {
        let message = Message::new(MessageId::random(), Role::Member, "", UserId::from("u1"), t(0));
        assert_eq!(message.content(), "");
    }

    #[test]
    fn is_from_compares_ids_only() {
        let ada = User::new(UserId::from("u1"), "Ada", Role::Member, t(0));
        let other_ada = User::new(UserId::from("u2"), "Ada", Role::Member, t(0));
        let message = Message::new(MessageId::from("m1"), Role::Member, "hi", UserId::from("u1"), t(1));

        assert!(message.is_from(&ada));
        assert!(!message.is_from(&other_ada));
    }

    #[test]
    fn random_ids_are_uuids_and_distinct() {
        let a = MessageId::random();
        let b = MessageId::random();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
        assert!(Uuid::parse_str(UserId::random().as_ref()).is_ok());
    }

    #[test]
    fn id_display_is_raw_text() {
        assert_eq!(UserId::new(String::from("u-42")).to_string(), "u-42");
    }

    #[test]
    fn tagged_records_checked_against_vocabulary() {
        let types = Vocabulary::parse("MessageType", "text,image").unwrap();
        let roles = Vocabulary::parse("UserRole", "admin,member").unwrap();

        let ok = Message::new(MessageId::from("m1"), Tag::from("image"), "", UserId::from("u1"), t(0));
        let bad = Message::new(MessageId::from("m2"), Tag::from("video"), "", UserId::from("u1"), t(0));
        assert!(ok.check(&types).is_ok());
        assert!(matches!(
            bad.check(&types),
            Err(ShapeError::UnknownMember { ref member, .. }) if member == "video"
        ));

        let admin = User::new(UserId::from("u1"), "Ada", Tag::from("admin"), t(0));
        let guest = User::new(UserId::from("u2"), "Bob", Tag::from("guest"), t(0));
        assert!(admin.check(&roles).is_ok());
        assert!(guest.check(&roles).is_err());
    }
}
