/*!
 * Monitoring Module
 * Tracing setup for the driver binary
 */

mod tracer;

pub use tracer::init_tracing;
