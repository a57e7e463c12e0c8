//! Local inference subprocess client
//!
//! Second tier of the mood-resolution chain: runs a configured command with
//! the check-in text as its final argument and parses stdout as the same
//! JSON shape the remote service returns.

use super::InferencePayload;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

const SUBPROCESS_TIMEOUT: Duration = Duration::from_secs(30);

/// Local inference client errors
#[derive(Debug, Error)]
pub enum LocalMlError {
    /// Failed to spawn or wait on the subprocess
    #[error("Failed to execute inference command: {0}")]
    Execution(String),

    /// Subprocess exited non-zero
    #[error("Inference command failed: {0}")]
    Failed(String),

    /// Subprocess stdout was not valid JSON
    #[error("Invalid JSON from inference command: {0}")]
    Parse(String),

    /// Subprocess exceeded the timeout
    #[error("Inference command timed out after {0:?}")]
    Timeout(Duration),
}

/// Client for a local inference script (e.g. `python ml_logic.py`)
pub struct LocalMlClient {
    program: String,
    args: Vec<String>,
}

impl LocalMlClient {
    /// Build from a whitespace-separated command line; the check-in text is
    /// appended as one extra argument at invocation time.
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Run the inference command on the given text
    pub async fn analyze(&self, text: &str) -> Result<InferencePayload, LocalMlError> {
        tracing::debug!(program = %self.program, "Running local inference command");

        let output = tokio::time::timeout(
            SUBPROCESS_TIMEOUT,
            Command::new(&self.program)
                .args(&self.args)
                .arg(text)
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| LocalMlError::Timeout(SUBPROCESS_TIMEOUT))?
        .map_err(|e| LocalMlError::Execution(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LocalMlError::Failed(format!(
                "exit code {:?}: {}",
                output.status.code(),
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let payload: InferencePayload = serde_json::from_str(stdout.trim())
            .map_err(|e| LocalMlError::Parse(format!("{}: {}", e, stdout.trim())))?;

        tracing::debug!(mood_bucket = ?payload.mood_bucket, "Local inference succeeded");
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_parsing() {
        let client = LocalMlClient::from_command_line("python ml_logic.py").unwrap();
        assert_eq!(client.program, "python");
        assert_eq!(client.args, vec!["ml_logic.py".to_string()]);

        assert!(LocalMlClient::from_command_line("   ").is_none());
    }

    #[tokio::test]
    async fn missing_program_is_execution_error() {
        let client =
            LocalMlClient::from_command_line("definitely-not-a-real-inference-binary").unwrap();
        let err = client.analyze("hello").await.unwrap_err();
        assert!(matches!(err, LocalMlError::Execution(_)));
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn non_zero_exit_is_failure() {
        let client = LocalMlClient::from_command_line("false").unwrap();
        let err = client.analyze("hello").await.unwrap_err();
        assert!(matches!(err, LocalMlError::Failed(_)));
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn garbage_stdout_is_parse_error() {
        let client = LocalMlClient::from_command_line("echo not-json").unwrap();
        let err = client.analyze("hello").await.unwrap_err();
        assert!(matches!(err, LocalMlError::Parse(_)));
    }
}
