use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use parley_directory::Directory;
use parley_types::codec;
use parley_types::{Message, MessageType, ShapeError, User, UserRole, Vocabulary};

/// Input file: raw user and message records, checked one at a time.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bundle {
    #[serde(default)]
    pub users: Vec<Value>,
    #[serde(default)]
    pub messages: Vec<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    User,
    Message,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub entity: Entity,
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub reason: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub users_checked: usize,
    pub messages_checked: usize,
    pub problems: Vec<Problem>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

struct Problems(Vec<Problem>);

impl Problems {
    fn push(&mut self, entity: Entity, index: usize, id: Option<String>, reason: impl ToString) {
        let reason = reason.to_string();
        warn!(?entity, index, id = id.as_deref().unwrap_or("-"), "{}", reason);
        self.0.push(Problem {
            entity,
            index,
            id,
            reason,
        });
    }
}

fn raw_id(raw: &Value) -> Option<String> {
    raw.get("id").and_then(Value::as_str).map(str::to_owned)
}

fn decode<T: DeserializeOwned>(raw: Value) -> Result<T, ShapeError> {
    match raw {
        Value::Object(record) => codec::from_record(record),
        _ => Err(ShapeError::NotARecord),
    }
}

/// Users with an unknown role still go into the directory so their messages
/// are not reported a second time.
pub fn inspect(bundle: Bundle, types: &Vocabulary, roles: &Vocabulary) -> Report {
    let users_checked = bundle.users.len();
    let messages_checked = bundle.messages.len();
    let mut problems = Problems(Vec::new());
    let mut directory = Directory::new();

    for (index, raw) in bundle.users.into_iter().enumerate() {
        let id = raw_id(&raw);
        let user: User<UserRole> = match decode(raw) {
            Ok(user) => user,
            Err(e) => {
                problems.push(Entity::User, index, id, e);
                continue;
            }
        };

        if let Err(e) = user.check(roles) {
            problems.push(Entity::User, index, id.clone(), e);
        }
        if let Err(e) = directory.insert(user) {
            problems.push(Entity::User, index, id, e);
        }
    }

    for (index, raw) in bundle.messages.into_iter().enumerate() {
        let id = raw_id(&raw);
        let message: Message<MessageType> = match decode(raw) {
            Ok(message) => message,
            Err(e) => {
                problems.push(Entity::Message, index, id, e);
                continue;
            }
        };

        if let Err(e) = message.check(types) {
            problems.push(Entity::Message, index, id.clone(), e);
        }
        match directory.resolve_sender(&message) {
            Ok(sender) => debug!(message_id = %message.id(), sender = sender.name(), "sender resolved"),
            Err(e) => problems.push(Entity::Message, index, id, e),
        }
    }

    Report {
        users_checked,
        messages_checked,
        problems: problems.0,
    }
}
