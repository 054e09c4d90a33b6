use serde::{Deserialize, Serialize};

/// The named pipe path used for IPC between CLI and daemon.
pub const PIPE_NAME: &str = r"\\.\pipe\bolsillo";

/// A command sent from the CLI to the daemon.
///
/// These are serialized as JSON and sent over the named pipe.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Command {
    /// Request the daemon to stop (restores all windows first).
    Stop,
    /// Request the daemon's current status.
    Status,
    /// Restore every hidden window.
    RestoreAll,
    /// Append an executable path to the auto-hide target list.
    AddTarget { path: String },
    /// Remove an executable path from the auto-hide target list.
    RemoveTarget { path: String },
    /// List the auto-hide target list.
    ListTargets,
}

/// A response sent from the daemon back to the CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    /// Whether the command succeeded.
    pub status: ResponseStatus,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Status of a daemon response.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

impl Response {
    /// Creates a successful response with no message.
    pub fn ok() -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: None,
        }
    }

    /// Creates a successful response with a message.
    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: Some(message.into()),
        }
    }

    /// Creates a failed response with a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_json_round_trips() {
        // Arrange
        let command = Command::AddTarget {
            path: "C:\\bin\\notes.exe".into(),
        };

        // Act
        let json = serde_json::to_string(&command).unwrap();
        let parsed: Command = serde_json::from_str(&json).unwrap();

        // Assert
        assert!(json.contains("\"command\":\"AddTarget\""));
        assert!(matches!(parsed, Command::AddTarget { path } if path == "C:\\bin\\notes.exe"));
    }

    #[test]
    fn response_omits_absent_message() {
        let json = serde_json::to_string(&Response::ok()).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }
}
