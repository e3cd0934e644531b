//! Remote-shell channel boundary.
//!
//! The console forwards non-built-in lines here once a connection exists.
//! No transport ships yet; the trait pins down the message contract so the
//! interpreter and a future transport can evolve independently.

use serde::{Deserialize, Serialize};

/// Wire message sent to the remote shell for one forwarded line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCommand {
    /// Message discriminator, always `"command"` for forwarded lines.
    #[serde(rename = "type")]
    pub kind: String,
    /// The submitted line, verbatim.
    pub data: String,
}

impl RemoteCommand {
    /// Wraps one submitted line as a command message.
    pub fn command(data: impl Into<String>) -> Self {
        Self {
            kind: "command".to_string(),
            data: data.into(),
        }
    }
}

/// Fire-and-forget remote-shell connection.
///
/// At most one command is outstanding per connection; the core never waits
/// for a response before returning control to the event loop.
#[cfg_attr(test, mockall::automock)]
pub trait RemoteChannel: Send + Sync {
    /// Forwards one command message to the remote side.
    fn forward(&self, command: RemoteCommand);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_command_wire_shape() {
        // Arrange
        let command = RemoteCommand::command("ls -la");

        // Act
        let wire = serde_json::to_string(&command).expect("serialize failed");

        // Assert
        assert_eq!(wire, r#"{"type":"command","data":"ls -la"}"#);
    }
}
