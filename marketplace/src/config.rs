use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Which analytics sink receives page events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsMode {
    /// Drop every event
    Noop,
    /// Write events to the tracing log
    Log,
    /// POST events to `analytics_url`
    Http,
}

impl std::str::FromStr for AnalyticsMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "noop" | "none" | "" => Ok(AnalyticsMode::Noop),
            "log" => Ok(AnalyticsMode::Log),
            "http" => Ok(AnalyticsMode::Http),
            _ => Err(format!("Unknown analytics mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL the config documents are fetched from
    pub config_base_url: String,
    /// Tenant segment of the config path (`/configs/{tenant}/marketplace/...`)
    pub tenant: String,
    /// Directory served under `/configs`
    pub config_dir: PathBuf,
    pub fetch_timeout: Duration,
    /// Simulated journey load delay
    pub journey_delay: Duration,
    pub analytics_mode: AnalyticsMode,
    pub analytics_url: Option<String>,
    /// Google tag measurement id injected into the page shell
    pub ga_measurement_id: Option<String>,
    /// Show a banner when config loading fails instead of an empty page
    pub surface_load_errors: bool,
    /// Rate limit the interaction endpoints per peer IP
    pub rate_limit: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let analytics_mode = env::var("MARKETPLACE_ANALYTICS")
            .ok()
            .and_then(|m| match m.parse() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    tracing::warn!("{}, falling back to noop", e);
                    None
                }
            })
            .unwrap_or(AnalyticsMode::Noop);

        Self {
            port,
            config_base_url: env::var("MARKETPLACE_CONFIG_BASE_URL")
                .unwrap_or_else(|_| format!("http://127.0.0.1:{}", port)),
            tenant: env::var("MARKETPLACE_TENANT").unwrap_or_else(|_| "hivefy".to_string()),
            config_dir: env::var("MARKETPLACE_CONFIG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("configs")),
            fetch_timeout: Duration::from_secs(
                env::var("MARKETPLACE_FETCH_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
            journey_delay: Duration::from_millis(
                env::var("MARKETPLACE_JOURNEY_DELAY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1000),
            ),
            analytics_mode,
            analytics_url: env::var("MARKETPLACE_ANALYTICS_URL").ok(),
            ga_measurement_id: env::var("MARKETPLACE_GA_MEASUREMENT_ID")
                .ok()
                .filter(|id| !id.is_empty())
                .and_then(|id| {
                    if is_measurement_id(&id) {
                        Some(id)
                    } else {
                        tracing::warn!("ignoring malformed MARKETPLACE_GA_MEASUREMENT_ID {:?}", id);
                        None
                    }
                }),
            surface_load_errors: env_flag("MARKETPLACE_SURFACE_LOAD_ERRORS", false),
            rate_limit: env_flag("MARKETPLACE_RATE_LIMIT", true),
        }
    }
}

/// Google tag ids (`G-XXXX`, `UA-1234-1`) are emitted unescaped into the
/// page script, so only this alphabet is accepted
pub fn is_measurement_id(id: &str) -> bool {
    regex::Regex::new(r"^[A-Z0-9-]+$")
        .map(|re| re.is_match(id))
        .unwrap_or(false)
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytics_mode_from_str() {
        assert_eq!("noop".parse::<AnalyticsMode>().unwrap(), AnalyticsMode::Noop);
        assert_eq!("LOG".parse::<AnalyticsMode>().unwrap(), AnalyticsMode::Log);
        assert_eq!("http".parse::<AnalyticsMode>().unwrap(), AnalyticsMode::Http);
        assert!("kafka".parse::<AnalyticsMode>().is_err());
    }

    #[test]
    fn measurement_id_alphabet() {
        assert!(is_measurement_id("G-TEST123"));
        assert!(is_measurement_id("UA-12345-1"));
        assert!(!is_measurement_id(""));
        assert!(!is_measurement_id("G-x"));
        assert!(!is_measurement_id("G-1');alert(1);//"));
        assert!(!is_measurement_id("G-1</script>"));
    }
}
