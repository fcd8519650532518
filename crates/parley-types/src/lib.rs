//! Parley record shapes.
//!
//! `Message` and `User` are plain immutable records. A message points at its
//! sender by `UserId` only; looking the sender up is left to a directory.
//! The category fields (`type`, `role`) are closed sets defined outside this
//! crate: plug in a serde enum, or use `Tag` checked against a `Vocabulary`.

pub mod codec;
pub mod error;
pub mod models;
pub mod vocab;

pub use error::ShapeError;
pub use models::{Message, MessageId, MessageType, User, UserId, UserRole};
pub use vocab::{Tag, Vocabulary};
