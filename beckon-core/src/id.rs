//! Snowflake-style identifiers.

use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u64);

        impl $name {
            /// Create an id from its raw value.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// The raw value.
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Identifies a message.
    MessageId
);
id_type!(
    /// Identifies a channel, guild text channel or direct conversation.
    ChannelId
);
id_type!(
    /// Identifies a user (or the bot itself).
    UserId
);
id_type!(
    /// Identifies a custom emoji.
    EmojiId
);

/// A message together with the channel it lives in.
///
/// Outbound calls need both; events carry both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageRef {
    /// Channel the message was posted in.
    pub channel_id: ChannelId,
    /// The message itself.
    pub message_id: MessageId,
}

impl MessageRef {
    /// Create a new message reference.
    pub const fn new(channel_id: ChannelId, message_id: MessageId) -> Self {
        Self {
            channel_id,
            message_id,
        }
    }
}
