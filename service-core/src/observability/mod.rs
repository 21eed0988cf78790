pub mod logging;
pub mod metrics;

pub use logging::{init_cli_tracing, init_tracing};
pub use metrics::{init_metrics, render_metrics};
