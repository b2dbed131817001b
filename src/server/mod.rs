//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the lesson scheduler,
//! including API endpoints, business logic and data access. The backend uses Axum as the
//! web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Recurrence generation and orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and query composition
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Request checks applied before the handlers
//! - **Utilities** (`util/`) - Decoding of compact request encodings
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Tracing, database connection and shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** rejects bodies that are not declared as JSON
//! 3. **Controller** decodes the body and normalizes the DTO into params
//! 4. **Service** generates dates or composes the query, calls the data layer
//! 5. **Data** runs the transaction, returns entity models grouped per lesson
//! 6. **Service** converts them to domain models
//! 7. **Controller** converts domain models to DTOs, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
