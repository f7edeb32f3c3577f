//! # `socketio_harness`
//!
//! An interactive smoke-test client for a Socket.IO endpoint, built on the
//! `rust_socketio` asynchronous client.
//!
//! One connection is opened at startup and lives until the operator quits.
//! Two server channels are logged as they arrive; two prompt commands emit
//! a raw string and a fixed-shape record. Nothing is retried and nothing is
//! acknowledged; the transport keeps whatever guarantees it has.

pub mod bridge;
pub mod config;
pub mod error;
pub mod message;
pub mod prompt;

pub use bridge::Bridge;
pub use config::HarnessConfig;
pub use error::HarnessError;
