use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShapeError {
    /// Missing or unknown field, wrong type, bad timestamp or unknown enum variant.
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("value did not serialize to a record")]
    NotARecord,

    #[error("`{member}` is not a member of {vocabulary}")]
    UnknownMember { vocabulary: String, member: String },

    #[error("{0} has no members")]
    EmptyVocabulary(String),

    #[error("{0} contains a blank member")]
    BlankMember(String),
}
