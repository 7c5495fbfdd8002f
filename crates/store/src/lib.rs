//! Movie storage for the cinelist service.
//!
//! The catalog lives entirely in memory: [`catalog::MovieCatalog`] guards a
//! plain `Vec` behind an async `RwLock`, and [`seed`] fills it from a JSON
//! file at startup. Nothing is written back to disk.

pub mod catalog;
pub mod seed;
