// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The external renderer collaborator.
//!
//! The renderer is an external program: given the test string as its last
//! argument, it prints a textual module grid on stdout and exits zero. The
//! [`Renderer`] trait is the seam that lets tests and alternate backends
//! stand in for the subprocess.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use wait_timeout::ChildExt;

use crate::config::DEFAULT_TIMEOUT;
use crate::error::HarnessError;

/// Capability interface for the external QR renderer.
pub trait Renderer {
    /// Render `input` and return the textual module grid.
    fn render(&self, input: &str) -> Result<String, HarnessError>;
}

/// Runs the renderer as a subprocess, one invocation per trial.
///
/// The invocation is bounded by a timeout: an unbounded external call would
/// be the harness's only unguarded blocking point, and a hang is classified
/// as an invocation failure, not a renderer correctness issue.
#[derive(Debug, Clone)]
pub struct CommandRenderer {
    program: PathBuf,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandRenderer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        CommandRenderer {
            program: program.into(),
            args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Fixed arguments placed before the test string.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    fn invocation_error(&self, source: std::io::Error) -> HarnessError {
        HarnessError::RenderInvocation {
            program: self.program_name(),
            source,
        }
    }
}

impl Renderer for CommandRenderer {
    fn render(&self, input: &str) -> Result<String, HarnessError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(input)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| self.invocation_error(source))?;

        // Drain stdout on its own thread, started before the bounded wait.
        // A grid larger than the OS pipe buffer would otherwise block the
        // renderer mid-write while we block in wait_timeout, and a
        // successful render would surface as a timeout.
        let stdout_pipe = child.stdout.take();
        let stdout_reader = thread::spawn(move || -> io::Result<String> {
            let mut buf = String::new();
            if let Some(mut pipe) = stdout_pipe {
                pipe.read_to_string(&mut buf)?;
            }
            Ok(buf)
        });

        let status = match child
            .wait_timeout(self.timeout)
            .map_err(|source| self.invocation_error(source))?
        {
            Some(status) => status,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                // The pipe is closed now, so the reader finishes promptly.
                let _ = stdout_reader.join();
                return Err(HarnessError::RenderTimeout {
                    program: self.program_name(),
                    timeout: self.timeout,
                });
            }
        };

        let stdout = stdout_reader
            .join()
            .map_err(|_| {
                self.invocation_error(io::Error::new(
                    io::ErrorKind::Other,
                    "stdout reader thread panicked",
                ))
            })?
            .map_err(|source| self.invocation_error(source))?;

        if !status.success() {
            let mut stderr = String::new();
            if let Some(mut pipe) = child.stderr.take() {
                let _ = pipe.read_to_string(&mut stderr);
            }
            return Err(HarnessError::RenderExit {
                program: self.program_name(),
                code: status.code(),
                stderr,
            });
        }

        Ok(stdout)
    }
}

/// Run the one-time renderer build command (e.g. `gcc qrender.c -o qrender`).
///
/// Failure here is fatal to the whole campaign: no trial can proceed without
/// a renderer binary.
pub fn build_renderer(command: &[String]) -> Result<(), HarnessError> {
    let (program, args) = command.split_first().ok_or_else(|| HarnessError::Build {
        command: String::new(),
        detail: "empty build command".to_string(),
    })?;

    let joined = command.join(" ");
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| HarnessError::Build {
            command: joined.clone(),
            detail: e.to_string(),
        })?;

    if !status.success() {
        return Err(HarnessError::Build {
            command: joined,
            detail: format!("exited with {}", status),
        });
    }
    Ok(())
}
