//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `field_resolution`: Database URL, secret, rating, and target resolution
//! - `validation`: Conflicting action detection

mod helpers;
mod precedence;
