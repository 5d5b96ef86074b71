//! Server-rendered wizard screens.
//!
//! Each screen is a pure function of one [`WizardState`]; none of them
//! talks to the gateway. Forms post back to the session routes.

mod collection;
mod grouping;
mod layout;
mod questionnaire;
mod results;
mod setup;

pub use layout::{error_page, ScreenContext};

use crate::domain::wizard::{WizardState, WizardStep};

/// Renders the full page for the session's current step.
pub fn render_screen(ctx: &ScreenContext, state: &WizardState) -> String {
    let body = match state.step() {
        WizardStep::Setup => setup::render(ctx, state),
        WizardStep::Questionnaire => questionnaire::render(ctx, state),
        WizardStep::Collection => collection::render(ctx, state),
        WizardStep::Grouping => grouping::render(state),
        WizardStep::Results => results::render(state),
    };
    layout::wrap_page(ctx, state, body)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::WizardSessionId;

    fn ctx() -> ScreenContext {
        ScreenContext::new(WizardSessionId::new(), "Gemini 2.5", 3)
    }

    #[test]
    fn each_step_renders_its_screen() {
        let ctx = ctx();
        let cases = [
            (WizardState::initial(), "Define Your Event"),
            (fixtures::questionnaire(), "Review Questionnaire"),
            (fixtures::collection(vec![]), "Collection Phase"),
            (fixtures::grouping(), "AI is forming teams..."),
            (fixtures::results(vec![fixtures::group()]), "Optimal Grouping Configuration"),
        ];
        for (state, heading) in cases {
            let html = render_screen(&ctx, &state);
            assert!(html.contains(heading), "{} missing {}", state.step(), heading);
        }
    }

    #[test]
    fn loading_page_polls_at_the_configured_interval() {
        let html = render_screen(&ctx(), &fixtures::drafting());
        assert!(html.contains(r#"<meta http-equiv="refresh" content="3">"#));
    }

    #[test]
    fn error_banner_is_escaped_and_dismissible() {
        let ctx = ctx();
        let state = fixtures::failed(&fixtures::drafting(), "bad <reply>");
        let html = render_screen(&ctx, &state);

        assert!(html.contains("bad &lt;reply&gt;"));
        assert!(html.contains(&ctx.action("error/dismiss")));
    }

    #[test]
    fn grouping_shares_the_last_progress_slot() {
        let html = render_screen(&ctx(), &fixtures::grouping());
        assert_eq!(html.matches(r#"data-status="completed""#).count(), 3);
        assert!(html.contains(r#"data-status="current""#));
    }

    #[test]
    fn reset_form_is_offered_once_the_wizard_has_started() {
        let ctx = ctx();
        let html = render_screen(&ctx, &fixtures::questionnaire());
        assert!(html.contains("Start New Event"));
        assert!(html.contains(&ctx.action("reset")));
        assert!(html.contains(r#"name="confirm" value="yes""#));
    }
}
