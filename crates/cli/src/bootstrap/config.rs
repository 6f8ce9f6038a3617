use phone_blocklist_domain::{CliOverrides, Config};

/// Loads a `.env` file for local development. Skipped when `ENV=production`.
/// Returns whether a file was found.
pub fn load_env() -> bool {
    if std::env::var("ENV").is_ok_and(|env| env == "production") {
        return false;
    }
    dotenvy::dotenv().is_ok()
}

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    Ok(Config::load(path, overrides)?)
}
