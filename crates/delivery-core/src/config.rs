use anyhow::Context;
use std::env;
use std::time::Duration;

pub const DEFAULT_STATUS_STEP_MS: u64 = 5_000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Delay between two status advances of a tracked order.
    pub status_step: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            status_step: Duration::from_millis(DEFAULT_STATUS_STEP_MS),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_step_var(env::var("ORDER_STATUS_STEP_MS").ok().as_deref())
    }

    fn from_step_var(raw: Option<&str>) -> anyhow::Result<Self> {
        let step_ms = match raw {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .with_context(|| format!("invalid ORDER_STATUS_STEP_MS: {v:?}"))?,
            None => DEFAULT_STATUS_STEP_MS,
        };
        Ok(Self {
            status_step: Duration::from_millis(step_ms),
        })
    }
}
