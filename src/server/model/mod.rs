//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Request DTOs are normalized into parameter
//! types here, entity models are converted into domain models at the repository boundary,
//! and domain models are transformed to DTOs at the controller boundary.

pub mod lesson;
