use anyhow::{anyhow, Context, Result};
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api/dashboard";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

fn default_chart_render_delay() -> Duration {
    Duration::from_millis(100)
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub bind_addr: SocketAddr,
    /// `None` keeps requests open until the transport gives up.
    pub request_timeout: Option<Duration>,
    pub chart_render_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            request_timeout: None,
            chart_render_delay: default_chart_render_delay(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file first
        dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("ANALYSIS_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let bind_addr = lookup("DASHBOARD_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("Failed to parse DASHBOARD_BIND_ADDR")?;

        let request_timeout = match lookup("ANALYSIS_REQUEST_TIMEOUT_SECS") {
            None => None,
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid ANALYSIS_REQUEST_TIMEOUT_SECS: {}", raw))?;
                if secs == 0 {
                    return Err(anyhow!("ANALYSIS_REQUEST_TIMEOUT_SECS must be positive"));
                }
                Some(Duration::from_secs(secs))
            }
        };

        let chart_render_delay = match lookup("CHART_RENDER_DELAY_MS") {
            None => default_chart_render_delay(),
            Some(raw) => Duration::from_millis(
                raw.trim()
                    .parse()
                    .with_context(|| format!("Invalid CHART_RENDER_DELAY_MS: {}", raw))?,
            ),
        };

        Ok(Config {
            api_base_url,
            bind_addr,
            request_timeout,
            chart_render_delay,
        })
    }
}
