mod config;
mod inspect;

use anyhow::Context;
use tracing::info;

use crate::config::Config;
use crate::inspect::{Bundle, inspect};

fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout is the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parley_inspect=info,parley_directory=info".into()),
        )
        .init();

    let config = Config::from_env(std::env::args().nth(1))?;

    let text = std::fs::read_to_string(&config.input)
        .with_context(|| format!("failed to read {}", config.input.display()))?;
    let bundle: Bundle = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a bundle", config.input.display()))?;

    info!(
        "Inspecting {} ({} users, {} messages)",
        config.input.display(),
        bundle.users.len(),
        bundle.messages.len()
    );

    let report = inspect(bundle, &config.message_types, &config.user_roles);

    let out = if config.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{out}");

    info!("{} problem(s) found", report.problems.len());
    if !report.is_clean() {
        std::process::exit(1);
    }

    Ok(())
}
