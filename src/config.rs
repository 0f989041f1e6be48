use anyhow::{bail, Result};

/// Environment variable holding the Twitch application client id. Required.
pub const CLIENT_ID_VAR: &str = "TWITCH_CLIENTID";
/// Environment variable selecting the watched channel. Optional.
pub const CHANNEL_VAR: &str = "TWITCH_CHANNEL";
/// Channel used when `TWITCH_CHANNEL` is unset or blank.
pub const DEFAULT_CHANNEL: &str = "museun";

/// Startup configuration, read once from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `Client-ID` header value for Helix requests.
    pub client_id: String,
    /// Login name of the channel whose viewer count is shown.
    pub channel: String,
}

impl Config {
    /// Read configuration from the environment. A missing or blank client id
    /// is fatal; the channel falls back to [`DEFAULT_CHANNEL`].
    pub fn from_env() -> Result<Self> {
        let client_id = match std::env::var(CLIENT_ID_VAR) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => bail!("{CLIENT_ID_VAR} must be set to a Twitch client id"),
        };

        let channel = std::env::var(CHANNEL_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CHANNEL.to_string());

        Ok(Self { client_id, channel })
    }
}
