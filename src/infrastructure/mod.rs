//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root wiring the pool, stores and services
//! - [`config`] - Configuration loading and validation
pub mod bootstrap;
pub mod config;
