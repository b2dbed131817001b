//! HTTP request handlers for the lesson API.
//!
//! Controllers decode request bodies into DTOs, normalize them into parameter types,
//! call the service layer and convert the resulting domain models back into DTOs.

pub mod lesson;

#[cfg(test)]
mod test;
