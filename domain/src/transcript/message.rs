//! Transcript messages

use super::invocation::ToolInvocation;
use super::part::Part;
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// A message in a transcript (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Message {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
            content: String::new(),
            parts: Vec::new(),
        }
    }

    pub fn system(id: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            parts: vec![Part::text(content.clone())],
            content,
            ..Self::new(id, Role::System)
        }
    }

    pub fn user(id: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            parts: vec![Part::text(content.clone())],
            content,
            ..Self::new(id, Role::User)
        }
    }

    pub fn assistant(id: impl Into<String>) -> Self {
        Self::new(id, Role::Assistant)
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    pub fn with_parts(mut self, parts: impl IntoIterator<Item = Part>) -> Self {
        self.parts.extend(parts);
        self
    }

    /// All text parts concatenated
    pub fn text_content(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| p.as_text())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Iterate over the tool invocations of this message
    pub fn tool_invocations(&self) -> impl Iterator<Item = &ToolInvocation> {
        self.parts.iter().filter_map(|p| p.as_tool_invocation())
    }
}
