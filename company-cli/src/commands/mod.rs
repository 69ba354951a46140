//! Command implementations for companyctl

pub mod companies;
pub mod serve;

pub use companies::run_companies;
pub use serve::run_serve;
