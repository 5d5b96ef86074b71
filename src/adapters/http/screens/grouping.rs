//! Shown while the grouping call is in flight.

use crate::domain::wizard::WizardState;

pub(super) fn render(state: &WizardState) -> String {
    format!(
        r#"<section class="card" aria-busy="true">
    <div class="spinner"></div>
    <h2>AI is forming teams...</h2>
    <p class="muted">Analyzing {participants} participants against {questions} dimensions.</p>
</section>"#,
        participants = state.participants().len(),
        questions = state.questions().len(),
    )
}
