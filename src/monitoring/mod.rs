/*!
 * Monitoring
 * Structured tracing setup for binaries and benches embedding guards
 */

mod tracer;

pub use tracer::{init_tracing, json_output_requested};
