//! Wire-level data transfer objects shared by the HTTP layer.

pub mod api;
pub mod lesson;
