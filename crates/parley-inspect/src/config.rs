use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use parley_types::Vocabulary;

pub struct Config {
    pub input: PathBuf,
    pub message_types: Vocabulary,
    pub user_roles: Vocabulary,
    pub pretty: bool,
}

impl Config {
    pub fn from_env(arg: Option<String>) -> Result<Self> {
        Self::from_lookup(arg, |key| std::env::var(key).ok())
    }

    /// `arg` (the first command-line argument) overrides `PARLEY_INPUT`.
    pub fn from_lookup<F>(arg: Option<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = arg
            .or_else(|| lookup("PARLEY_INPUT"))
            .unwrap_or_else(|| "bundle.json".into());

        // Member lists come from whoever defines the categories; there is no default set.
        let types = lookup("PARLEY_MESSAGE_TYPES")
            .ok_or_else(|| anyhow!("PARLEY_MESSAGE_TYPES is not set"))?;
        let roles = lookup("PARLEY_USER_ROLES")
            .ok_or_else(|| anyhow!("PARLEY_USER_ROLES is not set"))?;

        let message_types = Vocabulary::parse("MessageType", &types)
            .context("invalid PARLEY_MESSAGE_TYPES")?;
        let user_roles =
            Vocabulary::parse("UserRole", &roles).context("invalid PARLEY_USER_ROLES")?;

        let pretty = match lookup("PARLEY_PRETTY") {
            Some(value) => value
                .parse()
                .with_context(|| format!("invalid PARLEY_PRETTY: {value:?}"))?,
            None => true,
        };

        Ok(Self {
            input: PathBuf::from(input),
            message_types,
            user_roles,
            pretty,
        })
    }
}
