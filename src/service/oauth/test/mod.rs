use serde_json::json;
use wiremock::{
    matchers::{body_string_contains, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::{
    error::{auth::AuthError, AppError},
    service::{oauth::OauthService, testing},
};
