//! Domain model and pure logic for the cinelist catalog service.
//!
//! Everything in this crate is synchronous and side-effect-free: the movie
//! record types, the genre enumeration, the request validators, and the
//! shared error type. I/O lives in `cinelist-store` (seeding, the in-memory
//! catalog) and `cinelist-api` (HTTP).

pub mod error;
pub mod genre;
pub mod movie;
pub mod types;
pub mod validate;
