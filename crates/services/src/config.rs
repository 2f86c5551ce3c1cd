use std::env;
use std::time::Duration;

const DEFAULT_MOCK_LATENCY_MS: u64 = 400;

/// Environment-driven settings shared by the mocked collaborators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServicesConfig {
    /// Simulated round-trip delay of the mocked backend.
    pub mock_latency: Duration,
    /// Code execution endpoint; `None` disables the code runner.
    pub code_exec_url: Option<String>,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            mock_latency: Duration::from_millis(DEFAULT_MOCK_LATENCY_MS),
            code_exec_url: None,
        }
    }
}

impl ServicesConfig {
    /// Read `MOCKVIEW_MOCK_LATENCY_MS` and `MOCKVIEW_CODE_EXEC_URL`.
    #[must_use]
    pub fn from_env() -> Self {
        let mock_latency = env::var("MOCKVIEW_MOCK_LATENCY_MS")
            .ok()
            .and_then(|raw| parse_latency(&raw))
            .unwrap_or(Duration::from_millis(DEFAULT_MOCK_LATENCY_MS));
        let code_exec_url = env::var("MOCKVIEW_CODE_EXEC_URL")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        Self {
            mock_latency,
            code_exec_url,
        }
    }

    /// No simulated delay and no code runner, for tests.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            mock_latency: Duration::ZERO,
            code_exec_url: None,
        }
    }
}

fn parse_latency(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(err) => {
            tracing::warn!(value = raw, error = %err, "ignoring invalid MOCKVIEW_MOCK_LATENCY_MS");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latency_parses_milliseconds() {
        assert_eq!(parse_latency(" 250 "), Some(Duration::from_millis(250)));
        assert_eq!(parse_latency("fast"), None);
    }

    #[test]
    fn default_latency_is_400ms() {
        assert_eq!(
            ServicesConfig::default().mock_latency,
            Duration::from_millis(400)
        );
    }
}
