// ---------------------------------------------------------------------------
// Contact form state and submit lifecycle
// ---------------------------------------------------------------------------

use crate::transport::{SubmitError, Transport};
use crate::wire::{ContactAck, ContactSubmission};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Element id / JSON key
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn from_id(id: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.id() == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Presence check only; whitespace counts as present.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL.into_iter().filter(|f| self.get(*f).is_empty()).collect()
    }

    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Default,
    Destructive,
}

/// Transient toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    fn received() -> Self {
        Self {
            title: "Message received!".into(),
            description: "Thank you for reaching out. I'll get back to you soon.".into(),
            variant: Variant::Default,
        }
    }

    fn failed(err: &SubmitError) -> Self {
        Self {
            title: "Error".into(),
            description: err.user_message().to_string(),
            variant: Variant::Destructive,
        }
    }
}

/// Why a submit never reached the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    MissingFields(Vec<Field>),
    NotEditing(Phase),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailure {
    Blocked(SubmitBlocked),
    Failed(SubmitError),
}

impl std::fmt::Display for SubmitFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blocked(SubmitBlocked::MissingFields(fields)) => {
                let names: Vec<&str> = fields.iter().map(|f| f.id()).collect();
                write!(f, "missing required fields: {}", names.join(", "))
            }
            Self::Blocked(SubmitBlocked::NotEditing(phase)) => {
                write!(f, "form is not editable ({:?})", phase)
            }
            Self::Failed(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SubmitFailure {}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: ContactFields,
    phase: Phase,
    notification: Option<Notification>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            phase: Phase::Editing,
            notification: None,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Input change. Only an editable form accepts it.
    pub fn set_field(&mut self, field: Field, value: &str) {
        if self.phase != Phase::Editing {
            return;
        }
        let slot = self.fields.slot(field);
        slot.clear();
        slot.push_str(value);
    }

    /// Validate presence and enter `Submitting`, returning the payload to send.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitBlocked> {
        if self.phase != Phase::Editing {
            return Err(SubmitBlocked::NotEditing(self.phase));
        }
        let missing = self.fields.missing();
        if !missing.is_empty() {
            return Err(SubmitBlocked::MissingFields(missing));
        }
        self.notification = None;
        self.phase = Phase::Submitting;
        Ok(self.fields.to_submission())
    }

    /// Apply the endpoint's answer and leave `Submitting`. No-op in any other phase.
    pub fn finish_submit(&mut self, outcome: &Result<ContactAck, SubmitError>) {
        if self.phase != Phase::Submitting {
            return;
        }
        match outcome {
            Ok(_) => {
                self.phase = Phase::Submitted;
                self.notification = Some(Notification::received());
                self.fields = ContactFields::default();
            }
            Err(e) => {
                tracing::warn!(error = %e, "contact form submission failed");
                self.phase = Phase::Editing;
                self.notification = Some(Notification::failed(e));
            }
        }
    }

    /// Full submit lifecycle: validate, send once, apply the outcome.
    pub async fn submit<T: Transport>(&mut self, transport: &T) -> Result<ContactAck, SubmitFailure> {
        let submission = self.begin_submit().map_err(SubmitFailure::Blocked)?;
        let guard = InFlight { form: self };
        let outcome = transport.send(&submission).await;
        guard.form.finish_submit(&outcome);
        outcome.map_err(SubmitFailure::Failed)
    }

    /// "Send another message": back to an empty, editable form.
    pub fn send_another(&mut self) {
        if self.phase != Phase::Submitted {
            return;
        }
        self.fields = ContactFields::default();
        self.notification = None;
        self.phase = Phase::Editing;
    }
}

/// Releases the loading state if the submit future is dropped mid-flight.
struct InFlight<'a> {
    form: &'a mut ContactForm,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.form.phase == Phase::Submitting {
            self.form.phase = Phase::Editing;
        }
    }
}
