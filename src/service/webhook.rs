//! Discord interactions webhook: signature checks and the immediate callback
//! for each interaction type.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use crate::{
    error::{auth::AuthError, AppError},
    model::discord::{ForwardedInteraction, InteractionCallback},
};

pub struct WebhookService<'a> {
    pub http_client: &'a reqwest::Client,
    pub public_key: &'a str,
    pub client_secret: &'a str,
    pub responder_url: Option<&'a str>,
}

impl<'a> WebhookService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        public_key: &'a str,
        client_secret: &'a str,
        responder_url: Option<&'a str>,
    ) -> Self {
        Self {
            http_client,
            public_key,
            client_secret,
            responder_url,
        }
    }

    /// Checks the Ed25519 signature Discord attaches to every webhook
    /// delivery.
    ///
    /// The signed message is the timestamp header concatenated with the raw
    /// request body. A malformed key, a malformed signature and a mismatch
    /// are indistinguishable to the caller.
    pub fn verify_signature(
        &self,
        signature: &str,
        timestamp: &str,
        body: &[u8],
    ) -> Result<(), AppError> {
        let key_bytes: [u8; 32] = hex::decode(self.public_key)
            .map_err(|_| AuthError::InvalidSignature)?
            .try_into()
            .map_err(|_| AuthError::InvalidSignature)?;
        let verifying_key =
            VerifyingKey::from_bytes(&key_bytes).map_err(|_| AuthError::InvalidSignature)?;

        let signature_bytes: [u8; 64] = hex::decode(signature)
            .map_err(|_| AuthError::InvalidSignature)?
            .try_into()
            .map_err(|_| AuthError::InvalidSignature)?;
        let signature = Signature::from_bytes(&signature_bytes);

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        verifying_key
            .verify(&message, &signature)
            .map_err(|_| AuthError::InvalidSignature)?;

        Ok(())
    }

    /// Picks the immediate callback for a verified interaction.
    ///
    /// A ping completes Discord's endpoint validation handshake. An
    /// application command is handed off to the responder while the deferred
    /// callback buys it time to deliver the real reply. Every other type is
    /// acknowledged with an empty response.
    pub fn dispatch(&self, interaction: serde_json::Value) -> Option<InteractionCallback> {
        match interaction.get("type").and_then(serde_json::Value::as_i64) {
            Some(1) => Some(InteractionCallback::pong()),
            Some(2) => {
                self.forward(interaction);
                Some(InteractionCallback::deferred())
            }
            _ => None,
        }
    }

    /// Posts the interaction to the responder without waiting on the result.
    ///
    /// The deferred callback has to go out within Discord's three second
    /// window, so delivery runs detached and failures are logged and dropped.
    fn forward(&self, interaction: serde_json::Value) {
        let Some(responder_url) = self.responder_url else {
            return;
        };

        let payload = ForwardedInteraction {
            interaction,
            token: self.client_secret.to_string(),
        };
        let request = self.http_client.post(responder_url).json(&payload);

        tokio::spawn(async move {
            if let Err(err) = request.send().await {
                tracing::warn!("Failed to forward interaction to responder: {}", err);
            }
        });
    }
}
