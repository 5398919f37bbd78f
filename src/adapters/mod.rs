//! Infrastructure adapters. Implement outbound ports.
//!
//! Terminal UI, speech commands, host capabilities. Map errors to DomainError.

pub mod speech;
pub mod system;
pub mod ui;
