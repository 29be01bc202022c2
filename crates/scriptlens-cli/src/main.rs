//! `scriptlens --code-file <path> [--page <url>] [--origin <url>] [--timeout <secs>]
//! [--trace-file <path>] [--<key> <value>]...`
//!
//! Prints one JSON feature record on stdout.

use std::process::ExitCode;

use scriptlens_cli::{analyze_invocation, Emitter, Invocation};
use scriptlens_core::PipelineError;

fn main() -> ExitCode {
    scriptlens_core::tracing::init_tracing();
    let mut emitter = Emitter::stdio();
    let invocation = Invocation::from_args(std::env::args().skip(1));

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => return ExitCode::from(emitter.emit_failure(&PipelineError::Io(e))),
    };

    let code = match runtime.block_on(analyze_invocation(invocation)) {
        Ok(record) => emitter.emit_record(&record),
        Err(e) => emitter.emit_failure(&e),
    };
    ExitCode::from(code)
}
