//! Channel permissions.

use bitflags::bitflags;

bitflags! {
    /// A permission set, using the chat service's bit layout.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u64 {
        /// Create invites.
        const CREATE_INSTANT_INVITE = 1 << 0;
        /// Every permission, regardless of channel overwrites.
        const ADMINISTRATOR = 1 << 3;
        /// Add new reactions to messages.
        const ADD_REACTIONS = 1 << 6;
        /// See the channel.
        const VIEW_CHANNEL = 1 << 10;
        /// Post messages.
        const SEND_MESSAGES = 1 << 11;
        /// Delete other users' messages and remove their reactions.
        const MANAGE_MESSAGES = 1 << 13;
        /// Embed links and rich content.
        const EMBED_LINKS = 1 << 14;
        /// Upload attachments.
        const ATTACH_FILES = 1 << 15;
        /// Read earlier messages.
        const READ_MESSAGE_HISTORY = 1 << 16;
        /// Use emoji from other servers.
        const USE_EXTERNAL_EMOJIS = 1 << 18;
    }
}

impl Permissions {
    /// Whether this set grants `required`, either directly or through
    /// [`Permissions::ADMINISTRATOR`].
    pub fn grants(self, required: Permissions) -> bool {
        self.contains(Permissions::ADMINISTRATOR) || self.contains(required)
    }
}

/// What kind of conversation a channel is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    /// One-to-one conversation with the bot. Permissions do not apply.
    Direct,
    /// A channel inside a guild, governed by role permissions.
    Guild,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_administrator_grants_everything() {
        assert!(Permissions::ADMINISTRATOR.grants(Permissions::MANAGE_MESSAGES));
        assert!(Permissions::ADMINISTRATOR.grants(Permissions::all()));
    }

    #[test]
    fn test_grants_requires_every_bit() {
        let perms = Permissions::ADD_REACTIONS | Permissions::SEND_MESSAGES;

        assert!(perms.grants(Permissions::ADD_REACTIONS));
        assert!(!perms.grants(Permissions::MANAGE_MESSAGES));
        assert!(!perms.grants(Permissions::ADD_REACTIONS | Permissions::MANAGE_MESSAGES));
    }
}
