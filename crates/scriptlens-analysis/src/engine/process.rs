//! Engine backed by an external sandbox process.
//!
//! Protocol: the script text is written to the child's stdin, the browser
//! environment is passed through `SCRIPTLENS_*` environment variables, and the
//! child writes events to stdout, one event object or event array per line.

use std::process::Stdio;

use scriptlens_core::errors::EngineError;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::Command;

use super::{BrowserEnvironment, SandboxEngine, TraceSink};
use crate::trace::SourceScript;

pub const ENV_ORIGIN: &str = "SCRIPTLENS_ORIGIN";
pub const ENV_USER_AGENT: &str = "SCRIPTLENS_USER_AGENT";
pub const ENV_COOKIE: &str = "SCRIPTLENS_COOKIE";

/// Launches the configured sandbox command once per run.
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    program: String,
    args: Vec<String>,
}

impl ProcessEngine {
    /// Build from `[program, args...]`.
    pub fn new(command: &[String]) -> Result<Self, EngineError> {
        let (program, args) = command.split_first().ok_or(EngineError::NotConfigured)?;
        if program.trim().is_empty() {
            return Err(EngineError::NotConfigured);
        }
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl SandboxEngine for ProcessEngine {
    async fn run(
        &self,
        script: &SourceScript,
        env: &BrowserEnvironment,
        sink: TraceSink,
    ) -> Result<(), EngineError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env(ENV_ORIGIN, &env.origin)
            .env(ENV_USER_AGENT, &env.user_agent)
            .env(ENV_COOKIE, &env.cookie)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| EngineError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        tracing::debug!(program = %self.program, pid = ?child.id(), "sandbox engine started");

        let stdin = child.stdin.take();
        let stdout = child.stdout.take().ok_or_else(|| {
            EngineError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "engine stdout unavailable",
            ))
        })?;

        let text = script.text();
        let feed = async move {
            let Some(mut stdin) = stdin else {
                return Ok(());
            };
            match stdin.write_all(text.as_bytes()).await {
                // The engine may legitimately stop reading early.
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
                other => other,
            }
        };
        let read = async {
            let mut segments = BufReader::new(stdout).split(b'\n');
            while let Some(segment) = segments.next_segment().await? {
                sink.push_line(&String::from_utf8_lossy(&segment));
            }
            Ok::<(), std::io::Error>(())
        };

        let (fed, read) = tokio::join!(feed, read);
        fed?;
        read?;

        let status = child.wait().await?;
        if !status.success() {
            return Err(EngineError::Exited {
                status: status.to_string(),
            });
        }
        Ok(())
    }
}
