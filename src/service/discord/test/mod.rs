use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use crate::{
    error::AppError,
    model::discord::{CommandDefinition, CommandPermission, PermissionTargetKind},
    service::{
        discord::DiscordClient,
        testing::{self, guild_entry},
    },
};
