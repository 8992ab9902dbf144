//! Event types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventTypeError {
    #[error("Unsupported event: {event}")]
    UnsupportedEvent { event: String },
}

/// Event type.
#[derive(Debug, Clone, Copy)]
pub enum EventType {
    /// Issue comment event.
    IssueComment,
    /// Issue event.
    Issues,
    /// Ping event.
    Ping,
    /// Pull request event.
    PullRequest,
    /// Workflow run event.
    WorkflowRun,
}

impl EventType {
    /// Convert event type to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl TryFrom<&str> for EventType {
    type Error = EventTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "issue_comment" => Ok(Self::IssueComment),
            "issues" => Ok(Self::Issues),
            "ping" => Ok(Self::Ping),
            "pull_request" => Ok(Self::PullRequest),
            "workflow_run" => Ok(Self::WorkflowRun),
            name => Err(EventTypeError::UnsupportedEvent {
                event: name.to_owned(),
            }),
        }
    }
}

impl From<EventType> for &'static str {
    fn from(event_type: EventType) -> Self {
        match event_type {
            EventType::IssueComment => "issue_comment",
            EventType::Issues => "issues",
            EventType::Ping => "ping",
            EventType::PullRequest => "pull_request",
            EventType::WorkflowRun => "workflow_run",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EventType;

    #[test]
    fn event_as_str() {
        assert_eq!(EventType::Ping.to_str(), "ping");
        assert_eq!(EventType::WorkflowRun.to_str(), "workflow_run");
    }

    #[test]
    fn event_from_str() {
        assert!(EventType::try_from("issue_comment").is_ok());
        assert!(EventType::try_from("deployment").is_err());
    }
}
