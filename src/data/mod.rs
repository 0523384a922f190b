pub mod channel_blocklist;
pub mod command;
pub mod guild;
pub mod guild_token;
pub mod guild_xp;
pub mod role_reward;
pub mod user_token;

#[cfg(test)]
mod test;
