//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Expanding recurrence rules into concrete lesson dates
//! - **Orchestration**: Coordinating the generator with the repositories
//! - **Domain Models**: Turning entity models into domain models for the controllers
//! - **Error Classification**: Wrapping store failures as read or write errors

pub mod lesson;
