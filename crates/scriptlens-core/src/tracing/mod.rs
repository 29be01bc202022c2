//! Observability for scriptlens.
//! `tracing` crate with `EnvFilter`, JSON lines on stderr.

pub mod setup;

pub use setup::init_tracing;
