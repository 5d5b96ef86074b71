//! Participant collection screen.

use super::layout::{disabled_when, html_escape, ScreenContext};
use crate::domain::event::Participant;
use crate::domain::wizard::WizardState;

const MIN_MOCKS: usize = 4;
const MAX_MOCKS: usize = 30;
const DEFAULT_MOCKS: usize = 12;

pub(super) fn render(ctx: &ScreenContext, state: &WizardState) -> String {
    let loading = state.is_loading();
    let participants = state.participants();

    let roster = if participants.is_empty() {
        r#"<p class="muted">No participants yet.<br>Share link or generate mock data.</p>"#.to_string()
    } else {
        let entries: String = participants.iter().map(render_participant).collect();
        format!("<ul class=\"roster\">\n{}        </ul>", entries)
    };

    let analyze = if participants.is_empty() {
        String::new()
    } else {
        format!(
            r#"
<form method="post" action="{action}">
    <button type="submit"{disabled}>Create Optimal Groups</button>
</form>"#,
            action = ctx.action("analyze"),
            disabled = disabled_when(loading),
        )
    };

    format!(
        r#"<section class="card">
    <h2>Collection Phase</h2>
    <p class="muted">Share this link with your participants. For this demo, you can generate realistic AI personas to test the matching algorithm immediately.</p>
</section>
<div class="grid">
    <section class="card">
        <h3>Simulate Participants</h3>
        <p class="muted">Don't want to wait? Generate diverse AI personas with realistic answers to test your matching rules.</p>
        <form method="post" action="{mock_action}">
            <label for="count">Number of Participants</label>
            <input id="count" name="count" type="number" min="{min}" max="{max}" value="{default}"{disabled}>
            <button type="submit"{disabled}>Generate AI Participants</button>
        </form>
    </section>
    <section class="card">
        <h3>Current Roster</h3>
        <p class="muted">{count} participants</p>
        {roster}
    </section>
</div>{analyze}"#,
        mock_action = ctx.action("participants/mock"),
        min = MIN_MOCKS,
        max = MAX_MOCKS,
        default = DEFAULT_MOCKS,
        disabled = disabled_when(loading),
        count = participants.len(),
        roster = roster,
        analyze = analyze,
    )
}

fn render_participant(participant: &Participant) -> String {
    let initial = participant
        .initial()
        .map(|c| html_escape(&c.to_string()))
        .unwrap_or_default();
    format!(
        "            <li><span class=\"initial\">{}</span>{}</li>\n",
        initial,
        html_escape(&participant.name)
    )
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;
    use crate::domain::foundation::WizardSessionId;

    fn ctx() -> ScreenContext {
        ScreenContext::new(WizardSessionId::new(), "Gemini 2.5", 2)
    }

    #[test]
    fn empty_roster_hides_the_analyze_button() {
        let html = render(&ctx(), &fixtures::collection(vec![]));

        assert!(html.contains("No participants yet."));
        assert!(!html.contains("Create Optimal Groups"));
        assert!(html.contains(r#"min="4" max="30" value="12""#));
    }

    #[test]
    fn roster_lists_initial_and_name() {
        let ctx = ctx();
        let html = render(&ctx, &fixtures::collection(fixtures::roster()));

        assert!(html.contains(r#"<span class="initial">A</span>Ada Lovelace"#));
        assert!(html.contains(r#"<span class="initial">G</span>Grace Hopper"#));
        assert!(html.contains("2 participants"));
        assert!(html.contains("Create Optimal Groups"));
        assert!(html.contains(&ctx.action("analyze")));
    }

    #[test]
    fn participant_names_are_escaped() {
        let html = render_participant(&Participant::new("p-1", "<Bobby>"));
        assert!(html.contains("&lt;Bobby&gt;"));
        assert!(html.contains(r#"<span class="initial">&lt;</span>"#));
    }
}
