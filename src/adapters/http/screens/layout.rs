//! Page chrome shared by every wizard screen.

use crate::domain::foundation::WizardSessionId;
use crate::domain::wizard::{ProgressStatus, WizardState, PROGRESS_TRACK};

/// Per-request values the renderers need besides the wizard state.
#[derive(Debug, Clone)]
pub struct ScreenContext {
    pub session_id: WizardSessionId,
    pub model_label: String,
    pub poll_interval_secs: u64,
}

impl ScreenContext {
    pub fn new(
        session_id: WizardSessionId,
        model_label: impl Into<String>,
        poll_interval_secs: u64,
    ) -> Self {
        Self {
            session_id,
            model_label: model_label.into(),
            poll_interval_secs,
        }
    }

    /// Form target for a session-scoped action, e.g. `action("analyze")`.
    pub fn action(&self, path: &str) -> String {
        format!("/sessions/{}/{}", self.session_id, path)
    }
}

/// Wraps a screen body in the document, header, progress track and banner.
pub(super) fn wrap_page(ctx: &ScreenContext, state: &WizardState, body: String) -> String {
    let refresh = if state.is_loading() {
        format!(
            r#"    <meta http-equiv="refresh" content="{}">
"#,
            ctx.poll_interval_secs
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
{refresh}    <title>TeamCraft AI</title>
    <style>
{css}
    </style>
</head>
<body>
{header}
<main>
{progress}
{banner}
{body}
{reset}
</main>
</body>
</html>"#,
        refresh = refresh,
        css = DEFAULT_CSS,
        header = header(&ctx.model_label),
        progress = progress_track(state),
        banner = error_banner(ctx, state),
        body = body,
        reset = reset_form(ctx, state),
    )
}

/// Standalone page for requests that never reach a screen.
pub fn error_page(title: &str, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
<main>
<section class="card">
    <h2>{title}</h2>
    <p>{message}</p>
    <p><a href="/">Start a new event</a></p>
</section>
</main>
</body>
</html>"#,
        title = html_escape(title),
        css = DEFAULT_CSS,
        message = html_escape(message),
    )
}

fn header(model_label: &str) -> String {
    format!(
        r#"<header class="topbar">
    <span class="brand">TeamCraft AI</span>
    <span class="badge">Powered by {}</span>
</header>"#,
        html_escape(model_label)
    )
}

fn progress_track(state: &WizardState) -> String {
    let slots: String = PROGRESS_TRACK
        .iter()
        .enumerate()
        .map(|(position, label)| {
            let status = ProgressStatus::of(position, state.step());
            format!(
                r#"    <li class="step {status}" data-status="{status}"><span class="dot">{number}</span>{label}</li>
"#,
                status = status.as_str(),
                number = position + 1,
                label = label,
            )
        })
        .collect();

    format!("<ol class=\"progress\">\n{}</ol>", slots)
}

fn error_banner(ctx: &ScreenContext, state: &WizardState) -> String {
    match state.error() {
        Some(message) => format!(
            r#"<div class="banner" role="alert">
    <span>{message}</span>
    <form method="post" action="{action}"><button type="submit" aria-label="Dismiss">&#x2715;</button></form>
</div>"#,
            message = html_escape(message),
            action = ctx.action("error/dismiss"),
        ),
        None => String::new(),
    }
}

fn reset_form(ctx: &ScreenContext, state: &WizardState) -> String {
    if state.is_pristine() {
        return String::new();
    }
    format!(
        r#"<form class="reset" method="post" action="{action}">
    <label><input type="checkbox" name="confirm" value="yes" required> Are you sure? This will clear all current event data.</label>
    <button type="submit" class="secondary">Start New Event</button>
</form>"#,
        action = ctx.action("reset"),
    )
}

/// `disabled` attribute while a request is in flight.
pub(super) fn disabled_when(loading: bool) -> &'static str {
    if loading {
        " disabled"
    } else {
        ""
    }
}

pub(super) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const DEFAULT_CSS: &str = r#"
:root {
    --primary-color: #4f46e5;
    --text-color: #1f2937;
    --muted-color: #6b7280;
    --border-color: #e5e7eb;
    --bg-color: #f9fafb;
    --ok-color: #059669;
    --warn-color: #d97706;
    --error-bg: #fef2f2;
}

* {
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    font-size: 16px;
    line-height: 1.6;
    color: var(--text-color);
    background-color: var(--bg-color);
    margin: 0;
}

main {
    max-width: 960px;
    margin: 0 auto;
    padding: 2rem;
}

.topbar {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem 2rem;
    background: #ffffff;
    border-bottom: 1px solid var(--border-color);
}

.brand {
    font-weight: 700;
    font-size: 1.25rem;
    color: var(--primary-color);
}

.badge {
    font-size: 0.75rem;
    padding: 0.25rem 0.75rem;
    border-radius: 999px;
    background: #eef2ff;
    color: var(--primary-color);
}

.progress {
    display: flex;
    gap: 1rem;
    list-style: none;
    padding: 0;
    margin: 0 0 2rem 0;
}

.progress .step {
    flex: 1;
    color: var(--muted-color);
}

.progress .step.current {
    color: var(--primary-color);
    font-weight: 600;
}

.progress .step.completed {
    color: var(--ok-color);
}

.dot {
    display: inline-block;
    width: 1.75rem;
    height: 1.75rem;
    margin-right: 0.5rem;
    border-radius: 50%;
    text-align: center;
    border: 2px solid currentColor;
}

.banner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 0.75rem 1rem;
    margin-bottom: 1.5rem;
    border: 1px solid #fecaca;
    border-radius: 0.5rem;
    background: var(--error-bg);
    color: #b91c1c;
}

.banner button {
    background: none;
    border: none;
    color: inherit;
    cursor: pointer;
}

.card {
    background: #ffffff;
    border: 1px solid var(--border-color);
    border-radius: 0.75rem;
    padding: 1.5rem;
    margin-bottom: 1.5rem;
}

.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 1.5rem;
}

label {
    display: block;
    font-weight: 500;
    margin-bottom: 0.25rem;
}

input, textarea {
    width: 100%;
    padding: 0.5rem 0.75rem;
    margin-bottom: 1rem;
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
    font: inherit;
}

input[type="checkbox"] {
    width: auto;
    margin: 0 0.5rem 0 0;
}

button {
    padding: 0.6rem 1.25rem;
    border: none;
    border-radius: 0.5rem;
    background: var(--primary-color);
    color: #ffffff;
    font-weight: 600;
    cursor: pointer;
}

button:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

button.secondary {
    background: #ffffff;
    color: var(--text-color);
    border: 1px solid var(--border-color);
}

.question-number {
    display: inline-block;
    width: 2rem;
    font-weight: 700;
    color: var(--primary-color);
}

.type-badge {
    font-size: 0.75rem;
    text-transform: uppercase;
    padding: 0.1rem 0.5rem;
    border-radius: 0.25rem;
    background: #f3f4f6;
}

.muted {
    color: var(--muted-color);
}

.roster {
    list-style: none;
    padding: 0;
}

.initial {
    display: inline-block;
    width: 2rem;
    height: 2rem;
    margin-right: 0.5rem;
    border-radius: 50%;
    text-align: center;
    line-height: 2rem;
    background: #eef2ff;
    color: var(--primary-color);
    font-weight: 700;
}

.tag {
    font-size: 0.75rem;
    margin-left: 0.25rem;
    padding: 0.1rem 0.4rem;
    border-radius: 0.25rem;
    background: #f3f4f6;
}

.strengths li::marker {
    color: var(--ok-color);
}

.risks li::marker {
    color: var(--warn-color);
}

.spinner {
    width: 4rem;
    height: 4rem;
    margin: 2rem auto;
    border: 4px solid var(--primary-color);
    border-top-color: transparent;
    border-radius: 50%;
    animation: spin 1s linear infinite;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

.reset {
    margin-top: 2rem;
    padding-top: 1rem;
    border-top: 1px solid var(--border-color);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ScreenContext {
        ScreenContext::new(WizardSessionId::new(), "gemini-2.5-flash", 2)
    }

    #[test]
    fn html_escape_escapes_special_chars() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn action_is_scoped_to_the_session() {
        let ctx = ctx();
        assert_eq!(
            ctx.action("analyze"),
            format!("/sessions/{}/analyze", ctx.session_id)
        );
    }

    #[test]
    fn page_carries_header_and_progress_track() {
        let html = wrap_page(&ctx(), &WizardState::initial(), String::new());

        assert!(html.contains("TeamCraft AI"));
        assert!(html.contains("Powered by gemini-2.5-flash"));
        for label in PROGRESS_TRACK {
            assert!(html.contains(label));
        }
        assert!(html.contains(r#"data-status="current""#));
        assert_eq!(html.matches(r#"data-status="upcoming""#).count(), 3);
    }

    #[test]
    fn idle_page_does_not_refresh() {
        let html = wrap_page(&ctx(), &WizardState::initial(), String::new());
        assert!(!html.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn pristine_page_has_no_reset_form() {
        let html = wrap_page(&ctx(), &WizardState::initial(), String::new());
        assert!(!html.contains("Start New Event"));
    }

    #[test]
    fn error_page_escapes_message() {
        let html = error_page("Not Found", "<b>gone</b>");
        assert!(html.contains("&lt;b&gt;gone&lt;/b&gt;"));
        assert!(!html.contains("<b>gone</b>"));
    }
}
