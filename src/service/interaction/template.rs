use crate::{
    error::AppError,
    model::discord::{CommandDefinition, CommandOption},
};

/// Option type constants from Discord's application command schema.
const OPTION_SUB_COMMAND: i32 = 1;
const OPTION_USER: i32 = 6;

/// Chat-input command, the only command kind this backend registers.
const CHAT_INPUT: i32 = 1;

/// Static catalog of the slash commands this backend can register.
///
/// Command payloads are fixed. The dashboard only chooses which command to
/// register in a guild and whether it is enabled for everyone by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandTemplate {
    Level,
    Test,
}

impl CommandTemplate {
    /// Resolves a dashboard-supplied command name against the catalog.
    ///
    /// # Arguments
    /// - `name`: Command name as sent by the dashboard
    ///
    /// # Returns
    /// - `Ok(CommandTemplate)`: Matching catalog entry
    /// - `Err(AppError)`: Bad request for names outside the catalog
    pub fn from_name(name: &str) -> Result<Self, AppError> {
        match name {
            "level" => Ok(Self::Level),
            "test" => Ok(Self::Test),
            _ => Err(AppError::BadRequest(
                "Interaction does not exist: interaction not found".to_string(),
            )),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::Test => "test",
        }
    }

    /// Builds the full registration payload for this command.
    pub fn definition(&self, default_permission: bool) -> CommandDefinition {
        match self {
            Self::Level => CommandDefinition {
                name: self.name().to_string(),
                description: "Show level or level leaderboard related things.".to_string(),
                kind: CHAT_INPUT,
                options: vec![CommandOption {
                    kind: OPTION_SUB_COMMAND,
                    name: "display".to_string(),
                    description: "Display the level of a user.".to_string(),
                    options: vec![CommandOption {
                        kind: OPTION_USER,
                        name: "user".to_string(),
                        description: "The user to show the level of, defaults to yourself."
                            .to_string(),
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                default_permission,
            },
            Self::Test => CommandDefinition {
                name: self.name().to_string(),
                description: "Test interaction.".to_string(),
                kind: CHAT_INPUT,
                options: Vec::new(),
                default_permission,
            },
        }
    }
}
