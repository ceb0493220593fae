// ---------------------------------------------------------------------------
// Contact form → DomNode
// ---------------------------------------------------------------------------

use portfolio_dom::DomNode;

use crate::state::{ContactForm, Field, Notification, Phase, Variant};

struct FieldDef {
    field: Field,
    input_type: &'static str,
    label: &'static str,
    placeholder: &'static str,
}

static FIELDS: [FieldDef; 3] = [
    FieldDef { field: Field::Name, input_type: "text", label: "Name", placeholder: "Your name" },
    FieldDef { field: Field::Email, input_type: "email", label: "Email", placeholder: "Your email" },
    FieldDef { field: Field::Message, input_type: "textarea", label: "Message", placeholder: "Your message" },
];

/// Render the form area of the contact section.
pub fn render_form(form: &ContactForm) -> DomNode {
    let mut root = DomNode::new("div")
        .with_key("contact-form")
        .with_class("contact-form-area");

    root = match form.phase() {
        Phase::Submitted => root.child(render_submitted()),
        phase => root.child(render_editing(form, phase == Phase::Submitting)),
    };

    if let Some(n) = form.notification() {
        root = root.child(render_toast(n));
    }
    root
}

fn render_editing(form: &ContactForm, submitting: bool) -> DomNode {
    let fields = FIELDS.iter().map(|def| render_field(def, form.fields().get(def.field)));

    let mut btn = DomNode::new("button")
        .with_key("btn")
        .with_attr("type", "submit")
        .with_class(if submitting { "submit-btn loading" } else { "submit-btn" })
        .with_text(if submitting { "Sending..." } else { "Send Message" });
    if submitting {
        btn = btn.with_attr("disabled", "");
    }

    DomNode::new("form")
        .with_key("form")
        .with_class("contact-form")
        .on("submit", "submit")
        .with_children(fields)
        .child(DomNode::new("div").with_class("field is-action").child(btn))
}

fn render_field(def: &FieldDef, value: &str) -> DomNode {
    let id = def.field.id();
    let is_textarea = def.input_type == "textarea";
    let action = format!("on_input_{}", id);

    let input = if is_textarea {
        DomNode::new("textarea")
            .with_attr("rows", "5")
            .with_text(value)
    } else {
        DomNode::new("input")
            .with_attr("type", def.input_type)
            .with_attr("value", value)
    };
    let input = input
        .with_key(&format!("i-{}", id))
        .with_attr("id", id)
        .with_attr("name", id)
        .with_attr("placeholder", def.placeholder)
        .with_attr("required", "")
        .on("input", &action);

    DomNode::new("div")
        .with_key(&format!("f-{}", id))
        .with_class(if is_textarea { "field is-textarea" } else { "field" })
        .child(DomNode::text("label", def.label).with_attr("for", id))
        .child(input)
}

fn render_submitted() -> DomNode {
    DomNode::new("div")
        .with_key("submitted")
        .with_class("submitted-panel")
        .child(DomNode::text("h3", "Message Received!"))
        .child(DomNode::text(
            "p",
            "Thank you for reaching out. I'll get back to you as soon as possible.",
        ))
        .child(
            DomNode::text("button", "Send Another Message")
                .with_key("send-another")
                .with_attr("type", "button")
                .with_class("outline-btn")
                .on("click", "send_another"),
        )
}

fn render_toast(n: &Notification) -> DomNode {
    let class = match n.variant {
        Variant::Default => "toast",
        Variant::Destructive => "toast toast-destructive",
    };
    DomNode::new("div")
        .with_key("toast")
        .with_class(class)
        .with_attr("role", "status")
        .on("click", "dismiss_notification")
        .child(DomNode::text("strong", &n.title))
        .child(DomNode::text("p", &n.description))
}
