pub mod server;
pub mod tracing;

pub use server::{TestServer, fixture_path};
pub use tracing::{CapturedEvent, captured_events, init_test_tracing};
