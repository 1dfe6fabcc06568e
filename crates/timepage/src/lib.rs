//! timepage: tells you the time in the format you picked, and remembers
//! the pick in a cookie.
//!
//! ```rust,no_run
//! use timepage::{App, Config, logging};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), timepage::TimepageError> {
//!     let config = Config::from_env();
//!     logging::init(config.log_format);
//!     App::new(config).run().await
//! }
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod routing;
pub mod testing;

pub use app::App;
pub use config::{Config, LogFormat};
pub use error::TimepageError;
pub use handlers::{AppState, HtmlPage};
pub use testing::{TestApp, TestClient, TestResponse};
