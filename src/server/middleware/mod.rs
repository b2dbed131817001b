//! Request processing applied ahead of the lesson handlers.

pub mod content_type;
