//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without
//! containing business logic: configuration loading and component wiring.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading and validation
//! - [`factory`] - Component factory functions
//! - [`operator`] - Operator port implementations used by the CLI

pub mod config;
pub mod factory;
pub mod operator;
