//! Grouping results screen.

use super::layout::html_escape;
use crate::domain::event::{Group, GroupMember};
use crate::domain::wizard::WizardState;

const STRENGTHS_PER_MEMBER: usize = 2;

pub(super) fn render(state: &WizardState) -> String {
    let groups: String = state.groups().iter().map(render_group).collect();

    format!(
        r#"<section>
    <h2>Optimal Grouping Configuration</h2>
    <p class="muted">Generated based on your rules and participant compatibility.</p>
    <div class="grid">
{groups}    </div>
</section>"#,
        groups = groups,
    )
}

fn render_group(group: &Group) -> String {
    let members: String = group.members.iter().map(render_member).collect();

    format!(
        r#"        <article class="card group">
            <h3>{name}</h3>
            <p class="muted">{count} members &bull; <strong>{score}% match</strong></p>
            <h4>Team Composition</h4>
            <ul class="roster">
{members}            </ul>
            <h4>Why this works</h4>
            <p>{justification}</p>
            <h4>Key Strengths</h4>
            <ul class="strengths">{strengths}</ul>
            <h4>Potential Risks</h4>
            <ul class="risks">{risks}</ul>
        </article>
"#,
        name = html_escape(&group.name),
        count = group.members.len(),
        score = group.compatibility_score,
        members = members,
        justification = html_escape(&group.justification),
        strengths = bullet_items(&group.strengths),
        risks = bullet_items(&group.risks),
    )
}

fn render_member(member: &GroupMember) -> String {
    let role = member
        .role
        .as_deref()
        .map(|role| format!(r#" <span class="muted">{}</span>"#, html_escape(role)))
        .unwrap_or_default();
    let strengths: String = member
        .top_strengths(STRENGTHS_PER_MEMBER)
        .iter()
        .map(|s| format!(r#"<span class="tag">{}</span>"#, html_escape(s)))
        .collect();

    format!(
        "                <li><strong>{}</strong>{}{}</li>\n",
        html_escape(&member.name),
        role,
        strengths
    )
}

fn bullet_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", html_escape(item)))
        .collect()
}
