//! Embedmark CLI support: console prompting and tracing setup.

pub mod prompt;
pub mod request;

pub use prompt::{PromptError, Prompter};
pub use request::{collect_request, EmbedRequest};

/// Initialize tracing for the CLI binary.
///
/// Logs go to stderr and default to `warn` so they stay out of the prompts;
/// set `RUST_LOG` for more.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
