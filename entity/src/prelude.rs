pub use super::channel_blocklist::Entity as ChannelBlocklist;
pub use super::command::Entity as Command;
pub use super::guild::Entity as Guild;
pub use super::guild_token::Entity as GuildToken;
pub use super::guild_xp::Entity as GuildXp;
pub use super::role_reward::Entity as RoleReward;
pub use super::user_token::Entity as UserToken;
