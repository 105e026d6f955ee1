// Process configuration read from the environment.
//
// Notes
// - A `.env` file is loaded by the binary before this runs.
// - Unset variables fall back to defaults; malformed ones are a startup error.

use anyhow::Context;
use chrono::FixedOffset;
use std::net::SocketAddr;

pub const BIND_ADDR_VAR: &str = "SHIFT_TRACKER_BIND_ADDR";
pub const UTC_OFFSET_VAR: &str = "SHIFT_TRACKER_UTC_OFFSET";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UTC_OFFSET: &str = "-03:00";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub utc_offset: FixedOffset,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let utc_offset = lookup(UTC_OFFSET_VAR).unwrap_or_else(|| DEFAULT_UTC_OFFSET.to_string());

        Ok(Self {
            bind_addr: bind_addr
                .trim()
                .parse()
                .with_context(|| format!("{BIND_ADDR_VAR}={bind_addr:?} is not a socket address"))?,
            utc_offset: parse_utc_offset(&utc_offset)
                .with_context(|| format!("{UTC_OFFSET_VAR}={utc_offset:?} is not a ±HH:MM offset"))?,
        })
    }
}

fn parse_utc_offset(value: &str) -> anyhow::Result<FixedOffset> {
    let value = value.trim();
    let (sign, rest) = match value.split_at_checked(1) {
        Some(("+", rest)) => (1, rest),
        Some(("-", rest)) => (-1, rest),
        _ => anyhow::bail!("missing sign"),
    };
    let (hours, minutes) = rest.split_once(':').context("missing ':' separator")?;
    if hours.len() != 2 || minutes.len() != 2 {
        anyhow::bail!("expected two digit hours and minutes");
    }
    let hours: i32 = hours.parse()?;
    let minutes: i32 = minutes.parse()?;
    if hours > 23 || minutes > 59 {
        anyhow::bail!("offset out of range");
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).context("offset out of range")
}
