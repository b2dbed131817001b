//! Database repository layer for lesson scheduling.
//!
//! Repositories use SeaORM entity models internally and return them grouped into
//! parameter models, keeping the data layer separate from business logic. All inserts
//! and reads are performed through these repositories, each composed operation inside
//! its own transaction.

pub mod lesson;

#[cfg(test)]
mod test;
