//! Port traits (interfaces for adapters).
//!
//! The service layer depends on these traits, not on reqwest or sqlx.

mod exchange;
mod repository;

pub use exchange::ExchangeRateProvider;
pub use repository::ExchangeRepository;
