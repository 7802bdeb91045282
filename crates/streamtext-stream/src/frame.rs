use serde::{Deserialize, Serialize};

/// Sentinel payload of the terminal frame.
pub const DONE_MARKER: &str = "[DONE]";

/// Chat-completion chunk in the shape streaming clients expect:
/// `{"choices":[{"delta":{"content":"..."}}]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatChunk {
    pub choices: Vec<StreamChoice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamChoice {
    pub delta: Delta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    pub content: String,
}

impl ChatChunk {
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            choices: vec![StreamChoice {
                delta: Delta {
                    content: content.into(),
                },
            }],
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.delta.content.as_str())
    }
}

/// One unit of a stream: a content fragment or the terminal marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Content(String),
    Done,
}

impl Frame {
    pub fn is_done(&self) -> bool {
        matches!(self, Frame::Done)
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            Frame::Content(fragment) => Some(fragment),
            Frame::Done => None,
        }
    }

    /// Text carried on the frame's `data:` line.
    pub fn payload(&self) -> String {
        match self {
            Frame::Content(fragment) => {
                // A struct of plain strings always serializes.
                serde_json::to_string(&ChatChunk::from_content(fragment.as_str()))
                    .unwrap_or_default()
            }
            Frame::Done => DONE_MARKER.to_string(),
        }
    }

    /// Full wire encoding: `data: <payload>\n\n`.
    pub fn to_sse_line(&self) -> String {
        format!("data: {}\n\n", self.payload())
    }
}
