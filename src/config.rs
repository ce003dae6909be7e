//! Runtime configuration, built from command-line flags and environment

use clap::Args;

use crate::state::DEFAULT_CITY;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Everything the weather client needs to talk to OpenWeather
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherConfig {
    /// Passed through as `appid`; an empty key is sent as-is
    pub api_key: String,
    /// Scheme and host, without a trailing slash
    pub base_url: String,
    /// City fetched once on startup
    pub default_city: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_city: DEFAULT_CITY.to_string(),
        }
    }
}

/// Flags flattened into the binary's argument parser
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// City to show on startup
    #[arg(long, short, default_value = DEFAULT_CITY)]
    pub city: String,

    /// OpenWeather API key
    #[arg(long, env = "OPENWEATHER_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// OpenWeather base URL
    #[arg(long, env = "OPENWEATHER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

impl ConfigArgs {
    pub fn into_config(self) -> WeatherConfig {
        let city = self.city.trim();
        WeatherConfig {
            api_key: self.api_key,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            default_city: if city.is_empty() {
                DEFAULT_CITY.to_string()
            } else {
                city.to_string()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    fn parse(args: &[&str]) -> WeatherConfig {
        let mut argv = vec!["atmosphere"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv)
            .expect("valid arguments")
            .config
            .into_config()
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = parse(&[
            "--city",
            "Tokyo",
            "--api-key",
            "secret",
            "--base-url",
            "http://localhost:9000/",
        ]);

        assert_eq!(config.default_city, "Tokyo");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_short_city_flag() {
        let config = parse(&["-c", "Oslo"]);
        assert_eq!(config.default_city, "Oslo");
    }

    #[test]
    fn test_blank_city_falls_back_to_default() {
        let config = parse(&["--city", "   "]);
        assert_eq!(config.default_city, DEFAULT_CITY);
    }

    #[test]
    fn test_default_config() {
        let config = WeatherConfig::default();
        assert_eq!(config.default_city, "Paris");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_empty());
    }
}
