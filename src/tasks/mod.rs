//! Background Tasks Module
//!
//! Contains background tasks that run periodically while the cache is in use.
//!
//! # Tasks
//! - Cache Validation: evicts expired or unreadable cached feeds at configured
//!   intervals

mod validation;

pub use validation::spawn_validation_task;
