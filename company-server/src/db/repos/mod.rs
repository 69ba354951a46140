//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows one pooled connection per operation
//! - Lets the database assign keys (`RETURNING`)
//! - Lists in primary-key order

pub mod companies;

pub use companies::CompanyRepo;
