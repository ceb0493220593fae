//! portfolio-form — contact form client
//!
//! Holds the three form fields and the idle → submitting → submitted
//! lifecycle, sends one submission through a [`Transport`], and renders the
//! form as a `DomNode` tree.

pub mod state;
pub mod transport;
mod view;
pub mod wire;

use portfolio_dom::{DomNode, Snapshot};

pub use state::{
    ContactFields, ContactForm, Field, Notification, Phase, SubmitBlocked, SubmitFailure, Variant,
};
pub use transport::{HttpTransport, SubmitError, Transport};
pub use wire::{ContactAck, ContactSubmission, ErrorBody};

/// Synchronous view actions. Submitting is async and goes through
/// [`ContactForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Input { field: Field, value: String },
    SendAnother,
    DismissNotification,
}

impl Action {
    /// Map a bound action name (as emitted in `events`) to an action.
    pub fn parse(name: &str, value: Option<&str>) -> Option<Action> {
        match name {
            "send_another" => Some(Action::SendAnother),
            "dismiss_notification" => Some(Action::DismissNotification),
            _ => {
                let field = Field::from_id(name.strip_prefix("on_input_")?)?;
                Some(Action::Input { field, value: value.unwrap_or("").to_string() })
            }
        }
    }
}

/// Mutate form state based on action.
pub fn reduce(form: &mut ContactForm, action: Action) {
    match action {
        Action::Input { field, value } => form.set_field(field, &value),
        Action::SendAnother => form.send_another(),
        Action::DismissNotification => form.dismiss_notification(),
    }
}

/// Render the form area as a DomNode.
pub fn render(form: &ContactForm) -> DomNode {
    view::render_form(form)
}

/// Render the form area as a JSON snapshot.
pub fn snapshot(form: &ContactForm) -> Snapshot {
    Snapshot::new(render(form))
}
