//! In-memory user directory.
//!
//! Messages only carry a `UserId` for their sender; this index is where that
//! id gets turned back into a `User`.

use std::collections::HashMap;

use parley_types::{Message, User, UserId};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("user {0} is already registered")]
    DuplicateUser(UserId),

    #[error("message {message} names unknown sender {sender}")]
    UnknownSender { message: String, sender: UserId },
}

#[derive(Debug)]
pub struct Directory<R> {
    users: HashMap<UserId, User<R>>,
}

impl<R> Default for Directory<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Directory<R> {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// Builds a directory, stopping at the first repeated id.
    pub fn from_users<I>(users: I) -> Result<Self, DirectoryError>
    where
        I: IntoIterator<Item = User<R>>,
    {
        let mut directory = Self::new();
        for user in users {
            directory.insert(user)?;
        }
        Ok(directory)
    }

    /// The first user registered under an id wins.
    pub fn insert(&mut self, user: User<R>) -> Result<(), DirectoryError> {
        if self.users.contains_key(user.id()) {
            return Err(DirectoryError::DuplicateUser(user.id().clone()));
        }
        debug!(user_id = %user.id(), "user registered");
        self.users.insert(user.id().clone(), user);
        Ok(())
    }

    pub fn get(&self, id: &UserId) -> Option<&User<R>> {
        self.users.get(id)
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.users.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn users(&self) -> impl Iterator<Item = &User<R>> {
        self.users.values()
    }

    pub fn resolve_sender<T>(&self, message: &Message<T>) -> Result<&User<R>, DirectoryError> {
        self.get(message.sender_id())
            .ok_or_else(|| DirectoryError::UnknownSender {
                message: message.id().to_string(),
                sender: message.sender_id().clone(),
            })
    }

    /// Messages whose sender is not in the directory, in input order.
    pub fn dangling<'a, T, I>(&self, messages: I) -> Vec<&'a Message<T>>
    where
        T: 'a,
        I: IntoIterator<Item = &'a Message<T>>,
    {
        messages
            .into_iter()
            .filter(|message| !self.contains(message.sender_id()))
            .collect()
    }
}
