//! scriptlens-cli: argument handling and output for the `scriptlens` binaries.

pub mod args;
pub mod emit;
pub mod run;

pub use args::{parse_flag_args, Invocation};
pub use emit::Emitter;
pub use run::{analyze_invocation, derive_origin};
