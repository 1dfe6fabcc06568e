use clap::Parser;
use timepage::{App, Config, LogFormat, TimepageError, logging};

/// Tells you the time, in the format you asked for last.
#[derive(Debug, Parser)]
#[command(name = "timepage", version, about)]
struct Cli {
    /// Address to bind (overrides SERVER_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides SERVER_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log output style (overrides LOG_FORMAT)
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

impl Cli {
    fn apply(self, mut config: Config) -> Config {
        if let Some(host) = self.host {
            config.server_host = host;
        }
        if let Some(port) = self.port {
            config.server_port = port;
        }
        if let Some(log_format) = self.log_format {
            config.log_format = log_format;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), TimepageError> {
    let config = Cli::parse().apply(Config::from_env());
    logging::init(config.log_format);

    App::new(config).run().await
}
