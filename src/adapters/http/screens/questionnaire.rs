//! Questionnaire review screen.

use super::layout::{disabled_when, html_escape, ScreenContext};
use crate::domain::event::Question;
use crate::domain::wizard::WizardState;

pub(super) fn render(ctx: &ScreenContext, state: &WizardState) -> String {
    let questions: String = state
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| render_question(index + 1, question))
        .collect();

    format!(
        r#"<section>
    <h2>Review Questionnaire</h2>
    <p class="muted">The AI has crafted these questions based on your event constraints. Review them before distributing to participants.</p>
{questions}    <form method="post" action="{action}">
        <button type="submit"{disabled}>Approve &amp; Start Collecting</button>
    </form>
</section>"#,
        questions = questions,
        action = ctx.action("questionnaire/confirm"),
        disabled = disabled_when(state.is_loading()),
    )
}

fn render_question(number: usize, question: &Question) -> String {
    let options = match &question.options {
        Some(options) if !options.is_empty() => format!(
            r#" <span class="muted">Options: {}</span>"#,
            html_escape(&options.join(", "))
        ),
        _ => String::new(),
    };

    format!(
        r#"    <article class="card question">
        <span class="question-number">{number}</span>
        <h3>{text}</h3>
        <span class="type-badge">{kind}</span>{options}
    </article>
"#,
        number = number,
        text = html_escape(&question.text),
        kind = question.question_type,
        options = options,
    )
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;
    use crate::domain::event::QuestionType;
    use crate::domain::foundation::WizardSessionId;

    #[test]
    fn questions_are_numbered_with_type_and_options() {
        let ctx = ScreenContext::new(WizardSessionId::new(), "Gemini 2.5", 2);
        let html = render(&ctx, &fixtures::questionnaire());

        assert!(html.contains(r#"<span class="question-number">1</span>"#));
        assert!(html.contains(r#"<span class="question-number">3</span>"#));
        assert!(html.contains(r#"<span class="type-badge">scale</span>"#));
        assert!(html.contains("Options: Designer, Engineer"));
        assert!(html.contains("Approve &amp; Start Collecting"));
        assert!(html.contains(&ctx.action("questionnaire/confirm")));
    }

    #[test]
    fn question_without_options_has_no_options_line() {
        let question = Question::new("q-1", "Tell us <anything>", QuestionType::Text);
        let html = render_question(1, &question);

        assert!(html.contains("Tell us &lt;anything&gt;"));
        assert!(!html.contains("Options:"));
    }
}
