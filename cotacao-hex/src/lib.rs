//! # Cotacao Hex
//!
//! Application service layer and HTTP adapter for the rate relay.
//!
//! ## Architecture
//!
//! - `service/` - Fetch → map → persist chain under two independent deadlines
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `P: ExchangeRateProvider` and
//! `R: ExchangeRepository`, so tests inject in-memory ports.

pub mod inbound;
pub mod service;


pub use service::QuoteService;
