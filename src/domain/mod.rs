//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod catalog;
pub mod entities;
pub mod errors;

pub use catalog::{CannedResponse, Category, ResponseCatalog, TIME_PLACEHOLDER};
pub use entities::{ChatMessage, ListenState, Speaker, Utterance};
pub use errors::DomainError;
