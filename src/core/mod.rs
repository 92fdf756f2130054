/*!
 * Core Module
 * Shared constants and error handling
 */

pub mod errors;
pub mod limits;

// Re-export for convenience
pub use errors::*;
