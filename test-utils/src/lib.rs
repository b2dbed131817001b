//! Lesson Scheduler Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the lesson
//! scheduler. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for the pre-existing data lessons depend on.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories for teachers, students, lessons and attendance
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_lesson_listing() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_lesson_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let teacher = factory::create_teacher(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
