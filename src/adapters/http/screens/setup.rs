//! Organizer setup form.

use super::layout::{disabled_when, html_escape, ScreenContext};
use crate::domain::event::EventDetails;
use crate::domain::wizard::WizardState;

enum Control {
    Input { placeholder: &'static str },
    TextArea { rows: u8 },
}

struct Field {
    name: &'static str,
    label: &'static str,
    control: Control,
}

const FIELDS: [Field; 6] = [
    Field {
        name: "eventName",
        label: "Event Name",
        control: Control::Input { placeholder: "" },
    },
    Field {
        name: "groupSize",
        label: "Target Group Size",
        control: Control::Input {
            placeholder: "e.g., 4 people, Pairs, 3-5",
        },
    },
    Field {
        name: "context",
        label: "Event Context & Goals",
        control: Control::TextArea { rows: 3 },
    },
    Field {
        name: "matchingRules",
        label: "Matching Rules",
        control: Control::TextArea { rows: 4 },
    },
    Field {
        name: "matchingPhilosophy",
        label: "Matching Philosophy",
        control: Control::TextArea { rows: 4 },
    },
    Field {
        name: "mandatoryTopics",
        label: "Mandatory Topics to Cover",
        control: Control::Input { placeholder: "" },
    },
];

pub(super) fn render(ctx: &ScreenContext, state: &WizardState) -> String {
    // A blank form starts from the sample event.
    let details = if state.event_details().is_blank() {
        EventDetails::demo()
    } else {
        state.event_details().clone()
    };
    let values = details.fields();
    let loading = state.is_loading();

    let fields: String = FIELDS
        .iter()
        .map(|field| {
            let value = values
                .iter()
                .find(|(name, _)| *name == field.name)
                .map(|(_, value)| *value)
                .unwrap_or_default();
            render_field(field, value, loading)
        })
        .collect();

    let button = if loading {
        "Thinking..."
    } else {
        "Generate Questionnaire"
    };

    format!(
        r#"<section class="card">
    <h2>Define Your Event</h2>
    <p class="muted">Tell us about your goals, and AI will craft the perfect questionnaire.</p>
    <form method="post" action="{action}">
{fields}        <button type="submit"{disabled}>{button}</button>
    </form>
</section>"#,
        action = ctx.action("setup"),
        fields = fields,
        disabled = disabled_when(loading),
        button = button,
    )
}

fn render_field(field: &Field, value: &str, loading: bool) -> String {
    let control = match field.control {
        Control::Input { placeholder } => format!(
            r#"<input id="{name}" name="{name}" type="text" value="{value}" placeholder="{placeholder}" required{disabled}>"#,
            name = field.name,
            value = html_escape(value),
            placeholder = html_escape(placeholder),
            disabled = disabled_when(loading),
        ),
        Control::TextArea { rows } => format!(
            r#"<textarea id="{name}" name="{name}" rows="{rows}" required{disabled}>{value}</textarea>"#,
            name = field.name,
            rows = rows,
            value = html_escape(value),
            disabled = disabled_when(loading),
        ),
    };

    format!(
        "        <label for=\"{name}\">{label}</label>\n        {control}\n",
        name = field.name,
        label = html_escape(field.label),
        control = control,
    )
}
