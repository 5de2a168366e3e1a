use {
    crate::domain::error::ConsoleError,
    std::{env, time::Duration},
};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub page_size: u32,
    pub timeout: Duration,
}

impl Config {
    /// Reads `TPS_URL` (required), `TPS_PAGE_SIZE` and `TPS_TIMEOUT_SECS`
    /// (optional).
    pub fn from_env() -> Result<Self, ConsoleError> {
        Self::from_vars(
            env::var("TPS_URL").ok(),
            env::var("TPS_PAGE_SIZE").ok(),
            env::var("TPS_TIMEOUT_SECS").ok(),
        )
    }

    pub fn from_vars(
        base_url: Option<String>,
        page_size: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<Self, ConsoleError> {
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConsoleError::Config("TPS_URL must be set".into()))?;

        let page_size = positive("TPS_PAGE_SIZE", page_size, DEFAULT_PAGE_SIZE)?;
        let timeout_secs = positive("TPS_TIMEOUT_SECS", timeout_secs, DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            base_url,
            page_size,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn positive<T>(name: &str, raw: Option<String>, default: T) -> Result<T, ConsoleError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<T>() {
        Ok(n) if n > T::default() => Ok(n),
        _ => Err(ConsoleError::Config(format!(
            "{name} must be a positive integer, got: {raw}"
        ))),
    }
}
