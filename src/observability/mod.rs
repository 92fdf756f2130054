/*!
 * Observability Module
 * Structured logging setup for hosts and tests
 */

mod tracer;

pub use tracer::init_tracing;
