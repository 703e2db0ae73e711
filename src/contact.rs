use serde::Serialize;
use thiserror::Error;

use crate::config::{ConfigError, EmailConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Uncommitted contact form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// Fields that are empty or whitespace only.
    pub fn empty_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&f| self.get(f).trim().is_empty())
            .collect()
    }
}

/// Payload handed to the email provider's template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<&ContactDraft> for ContactMessage {
    fn from(draft: &ContactDraft) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            message: draft.message.clone(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Empty contact fields: {}", .missing.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", "))]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Email delivery is not configured: {0}")]
    NotConfigured(#[from] ConfigError),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Email provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("Email delivery is only available in the browser")]
    Unavailable,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
    #[error("A message is already being sent")]
    InFlight,
}

/// The external delivery capability.
#[allow(async_fn_in_trait)]
pub trait EmailSender {
    async fn send(
        &self,
        message: &ContactMessage,
        config: &EmailConfig,
    ) -> Result<(), DeliveryError>;
}

/// A validated message waiting to be handed to an [`EmailSender`].
#[derive(Debug, Clone)]
pub struct PendingDelivery {
    pub message: ContactMessage,
    config: Result<EmailConfig, ConfigError>,
}

impl PendingDelivery {
    pub async fn send<M: EmailSender>(&self, mailer: &M) -> Result<(), DeliveryError> {
        let config = self.config.clone()?;
        mailer.send(&self.message, &config).await
    }
}

/// Validates drafts and tracks the single in-flight delivery.
///
/// The flow is split in three so a reactive view never holds its state
/// across the network await: [`prepare`](Self::prepare) validates and marks
/// the submitter busy, [`PendingDelivery::send`] talks to the provider, and
/// [`finish`](Self::finish) applies the outcome to the draft.
#[derive(Debug, Clone)]
pub struct ContactSubmitter {
    config: Result<EmailConfig, ConfigError>,
    in_flight: bool,
}

impl ContactSubmitter {
    pub fn new(config: Result<EmailConfig, ConfigError>) -> Self {
        if let Err(e) = &config {
            log::warn!("contact form disabled: {e}");
        }
        Self {
            config,
            in_flight: false,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight
    }

    pub fn prepare(&mut self, draft: &ContactDraft) -> Result<PendingDelivery, SubmitError> {
        if self.in_flight {
            return Err(SubmitError::InFlight);
        }
        let missing = draft.empty_fields();
        if !missing.is_empty() {
            return Err(ValidationError { missing }.into());
        }
        self.in_flight = true;
        Ok(PendingDelivery {
            message: draft.into(),
            config: self.config.clone(),
        })
    }

    /// Clears the draft on success, unless it was edited after `pending` was
    /// prepared. On failure the draft is left as typed so the visitor can
    /// retry; the error is logged and handed back.
    pub fn finish(
        &mut self,
        draft: &mut ContactDraft,
        pending: &PendingDelivery,
        outcome: Result<(), DeliveryError>,
    ) -> Result<(), SubmitError> {
        self.in_flight = false;
        match outcome {
            Ok(()) => {
                log::info!("contact message delivered");
                if ContactMessage::from(&*draft) == pending.message {
                    draft.clear();
                } else {
                    log::debug!("draft edited while sending; keeping it");
                }
                Ok(())
            }
            Err(e) => {
                log::error!("contact delivery failed: {e}");
                Err(e.into())
            }
        }
    }

    pub async fn submit<M: EmailSender>(
        &mut self,
        draft: &mut ContactDraft,
        mailer: &M,
    ) -> Result<(), SubmitError> {
        let pending = self.prepare(draft)?;
        let outcome = pending.send(mailer).await;
        self.finish(draft, &pending, outcome)
    }
}
