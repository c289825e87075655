// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the harness.
//!
//! Only infrastructure failures are raised as errors: they indicate a broken
//! environment, not a renderer bug, and must stay distinguishable from the
//! statistical signal the campaign exists to collect. A decoder that returns
//! no payload, or a payload that differs from the input, is recorded in the
//! trial outcome and never surfaces here.

use std::fmt;
use std::io;
use std::time::Duration;

/// Infrastructure failures raised by the harness.
#[derive(Debug)]
pub enum HarnessError {
    /// The one-time renderer build command failed. Fatal to the campaign.
    Build { command: String, detail: String },
    /// The renderer process could not be spawned or its output could not be
    /// collected. Fatal: no trial can be judged without a render.
    RenderInvocation { program: String, source: io::Error },
    /// The renderer exited with a non-zero status.
    RenderExit {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
    /// The renderer did not finish within the configured bound.
    RenderTimeout { program: String, timeout: Duration },
    /// Renderer output could not be parsed into a non-empty module grid.
    MalformedGrid { detail: String },
    /// The configured code-point ranges yielded no usable characters.
    EmptyPool,
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::Build { command, detail } => {
                write!(f, "build command `{}` failed: {}", command, detail)
            }
            HarnessError::RenderInvocation { program, source } => {
                write!(f, "failed to invoke renderer `{}`: {}", program, source)
            }
            HarnessError::RenderExit {
                program,
                code,
                stderr,
            } => {
                match code {
                    Some(code) => write!(f, "renderer `{}` exited with status {}", program, code)?,
                    None => write!(f, "renderer `{}` was terminated by a signal", program)?,
                }
                if !stderr.trim().is_empty() {
                    write!(f, ": {}", stderr.trim())?;
                }
                Ok(())
            }
            HarnessError::RenderTimeout { program, timeout } => {
                write!(
                    f,
                    "renderer `{}` did not finish within {:?}",
                    program, timeout
                )
            }
            HarnessError::MalformedGrid { detail } => {
                write!(f, "malformed module grid: {}", detail)
            }
            HarnessError::EmptyPool => {
                write!(f, "character pool ranges contain no valid code points")
            }
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::RenderInvocation { source, .. } => Some(source),
            _ => None,
        }
    }
}
