use std::fmt;
use std::str::FromStr;

/// Output style of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact single-line output.
    #[default]
    Plain,
    /// Multi-line, colourised output with source locations.
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "text" | "" => Ok(LogFormat::Plain),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogFormat::Plain => "plain",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        })
    }
}

/// Server configuration loaded from environment variables.
///
/// The format catalog, display offset and cache lifetime are compiled in
/// and are not part of this struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server host (default: 127.0.0.1)
    pub server_host: String,

    /// Server port (default: 3000)
    pub server_port: u16,

    /// Environment: development, production, test
    pub environment: String,

    /// Log output style (default: plain)
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            environment: "development".to_string(),
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (with .env support).
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        // A missing .env file is fine.
        let _ = dotenvy::dotenv();

        let defaults = Config::default();
        Config {
            server_host: std::env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(defaults.server_port),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            log_format: std::env::var("LOG_FORMAT")
                .ok()
                .and_then(|format| format.parse().ok())
                .unwrap_or(defaults.log_format),
        }
    }

    /// Check if running in development mode.
    pub fn is_dev(&self) -> bool {
        self.environment == "development"
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
