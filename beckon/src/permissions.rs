use crate::context::Channel;
use beckon_core::{ChannelKind, Permissions, Transport, TransportError};

/// The bot's effective permissions in `channel`.
///
/// Direct conversations grant everything. In a guild channel the bot user's
/// permissions are fetched from the transport on every call; nothing is
/// cached, so a permission revoked mid-interaction is seen on the next check.
/// A set containing `ADMINISTRATOR` is widened to every permission.
pub async fn effective_permissions(
    transport: &dyn Transport,
    channel: Channel,
) -> Result<Permissions, TransportError> {
    match channel.kind {
        ChannelKind::Direct => Ok(Permissions::all()),
        ChannelKind::Guild => {
            let permissions = transport
                .effective_permissions(channel.id, transport.current_user())
                .await?;
            if permissions.contains(Permissions::ADMINISTRATOR) {
                Ok(Permissions::all())
            } else {
                Ok(permissions)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beckon_core::{ChannelId, UserId};
    use beckon_std::testing::{MockTransport, TransportCall};

    const BOT: UserId = UserId::new(1);

    #[tokio::test]
    async fn test_direct_grants_everything_without_a_query() {
        let transport = MockTransport::new(BOT).with_permissions(Permissions::empty());

        let permissions = effective_permissions(&transport, Channel::direct(ChannelId::new(5)))
            .await
            .unwrap();

        assert_eq!(permissions, Permissions::all());
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_guild_queries_bot_user() {
        let transport = MockTransport::new(BOT).with_permissions(Permissions::ADD_REACTIONS);

        let permissions = effective_permissions(&transport, Channel::guild(ChannelId::new(5)))
            .await
            .unwrap();

        assert_eq!(permissions, Permissions::ADD_REACTIONS);
        assert_eq!(
            transport.calls(),
            [TransportCall::EffectivePermissions {
                channel: ChannelId::new(5),
                user: BOT,
            }]
        );
    }

    #[tokio::test]
    async fn test_administrator_widens_to_all() {
        let transport = MockTransport::new(BOT).with_permissions(Permissions::ADMINISTRATOR);

        let permissions = effective_permissions(&transport, Channel::guild(ChannelId::new(5)))
            .await
            .unwrap();

        assert_eq!(permissions, Permissions::all());
    }
}
