use crate::id::EmojiId;
use std::fmt;

/// An emoji used as a reaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReactionEmoji {
    /// A standard unicode emoji, e.g. `"\u{2705}"`.
    Unicode {
        /// The emoji itself.
        name: String,
    },
    /// A server-specific emoji.
    Custom {
        /// Custom emoji id.
        id: EmojiId,
        /// Display name, when the gateway sent one.
        name: Option<String>,
    },
}

impl ReactionEmoji {
    /// A unicode emoji.
    pub fn unicode(name: impl Into<String>) -> Self {
        ReactionEmoji::Unicode { name: name.into() }
    }

    /// A custom emoji.
    pub fn custom(id: EmojiId, name: Option<String>) -> Self {
        ReactionEmoji::Custom { id, name }
    }

    /// The emoji's name, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            ReactionEmoji::Unicode { name } => Some(name),
            ReactionEmoji::Custom { name, .. } => name.as_deref(),
        }
    }
}

impl fmt::Display for ReactionEmoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReactionEmoji::Unicode { name } => f.write_str(name),
            ReactionEmoji::Custom { id, name } => {
                write!(f, "<:{}:{}>", name.as_deref().unwrap_or("_"), id)
            }
        }
    }
}

impl From<&str> for ReactionEmoji {
    fn from(name: &str) -> Self {
        ReactionEmoji::unicode(name)
    }
}
