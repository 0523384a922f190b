mod channel_blocklist;
mod command;
mod guild;
mod guild_token;
mod guild_xp;
mod role_reward;
mod user_token;
