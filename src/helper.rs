//! The external `ext_list` helper.
//!
//! The helper lives outside this crate and its behaviour is not ours to
//! define. It is reached through [`ListHelper`], whose contract is:
//!
//! * input: a list of integers and two integer parameters ([`HelperCall`]);
//! * output: an opaque JSON value, or a [`HelperError`].
//!
//! [`CommandHelper`] fulfils the contract with a child process that reads the
//! call as JSON on stdin and answers with JSON on stdout.

use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Debug, thiserror::Error)]
pub enum HelperError {
    /// No helper implementation has been configured.
    #[error("ext_list is not defined: no helper command is configured")]
    Unbound,

    #[error("Failed to start helper `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Helper I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Helper `{program}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Helper output is not valid JSON: {0}")]
    InvalidOutput(#[from] serde_json::Error),
}

/// Arguments of one `ext_list(list, a, b)` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperCall {
    pub list: Vec<i64>,
    pub a: i64,
    pub b: i64,
}

impl Default for HelperCall {
    fn default() -> Self {
        Self {
            list: vec![1, 2, 3],
            a: 10,
            b: 20,
        }
    }
}

pub trait ListHelper {
    /// Short name for logs and the UI.
    fn name(&self) -> String;

    fn call(&self, call: &HelperCall) -> Result<JsonValue, HelperError>;
}

// ---------------------------------------------------------------------------
// UnboundHelper
// ---------------------------------------------------------------------------

/// Stands in when nothing is configured; every call fails with
/// [`HelperError::Unbound`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnboundHelper;

impl ListHelper for UnboundHelper {
    fn name(&self) -> String {
        "unbound".to_string()
    }

    fn call(&self, _call: &HelperCall) -> Result<JsonValue, HelperError> {
        Err(HelperError::Unbound)
    }
}

// ---------------------------------------------------------------------------
// CommandHelper
// ---------------------------------------------------------------------------

/// Runs an external program once per call.
#[derive(Debug, Clone)]
pub struct CommandHelper {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandHelper {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }
}

impl ListHelper for CommandHelper {
    fn name(&self) -> String {
        self.program.display().to_string()
    }

    fn call(&self, call: &HelperCall) -> Result<JsonValue, HelperError> {
        let program = self.name();
        log::debug!("Calling {program} with {call:?}");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| HelperError::Spawn {
                program: program.clone(),
                source,
            })?;

        // Dropping stdin closes the pipe so the child sees EOF.
        if let Some(mut stdin) = child.stdin.take() {
            let mut request = serde_json::to_vec(call).map_err(std::io::Error::from)?;
            request.push(b'\n');
            match stdin.write_all(&request) {
                Ok(()) => {}
                // The helper may exit or close stdin without reading the
                // request; its status and stdout still decide the outcome.
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    log::debug!("{program} closed stdin before reading the request");
                }
                Err(e) => {
                    // Close stdin and reap the child before reporting.
                    drop(stdin);
                    let _ = child.wait();
                    return Err(e.into());
                }
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(HelperError::Failed {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_call_matches_script_literals() {
        let call = HelperCall::default();
        assert_eq!(call.list, vec![1, 2, 3]);
        assert_eq!((call.a, call.b), (10, 20));
    }

    #[test]
    fn unbound_helper_always_fails() {
        let err = UnboundHelper.call(&HelperCall::default()).unwrap_err();
        assert!(matches!(err, HelperError::Unbound));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let helper = CommandHelper::new("/nonexistent/quadview-helper");
        let err = helper.call(&HelperCall::default()).unwrap_err();
        assert!(matches!(err, HelperError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn command_helper_round_trips_through_stdio() {
        // `cat` echoes the request, so the reply is the call itself.
        let reply = CommandHelper::new("cat")
            .call(&HelperCall::default())
            .unwrap();
        assert_eq!(reply, serde_json::json!({ "list": [1, 2, 3], "a": 10, "b": 20 }));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported() {
        let err = CommandHelper::new("sh")
            .with_args(["-c", "cat >/dev/null; echo boom >&2; exit 3"])
            .call(&HelperCall::default())
            .unwrap_err();
        match err {
            HelperError::Failed { stderr, status, .. } => {
                assert_eq!(stderr, "boom");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn reply_survives_helper_ignoring_stdin() {
        // Repeated so the child regularly exits before the request is written.
        let helper = CommandHelper::new("sh").with_args(["-c", "echo 42"]);
        for _ in 0..200 {
            let reply = helper.call(&HelperCall::default()).unwrap();
            assert_eq!(reply, serde_json::json!(42));
        }
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_survives_helper_ignoring_stdin() {
        let helper = CommandHelper::new("sh").with_args(["-c", "echo bad >&2; exit 3"]);
        for _ in 0..200 {
            match helper.call(&HelperCall::default()).unwrap_err() {
                HelperError::Failed { stderr, status, .. } => {
                    assert_eq!(stderr, "bad");
                    assert_eq!(status.code(), Some(3));
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_json_output_is_rejected() {
        let err = CommandHelper::new("sh")
            .with_args(["-c", "cat >/dev/null; echo not-json"])
            .call(&HelperCall::default())
            .unwrap_err();
        assert!(matches!(err, HelperError::InvalidOutput(_)));
    }
}
