pub mod catalog;
pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod harness;
pub mod inventory;
pub mod matrix;
pub mod schema;
pub mod variants;

pub use error::{DriverError, DriverResult};

/// Install the stderr log subscriber shared by both binaries.
///
/// Stdout carries the experiment transcript, so logs never go there.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "synduce_bench=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
