//! Prompt templates for the wizard's model calls.
//!
//! Organizer- and participant-supplied values are embedded verbatim.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::event::{EventDetails, Participant, Question};

/// System instruction sent with the questionnaire request.
pub const JSON_SYSTEM_INSTRUCTION: &str =
    "You are a helpful AI assistant that generates structured JSON data.";

/// Heading that precedes the participant payload in the grouping prompt.
pub const PARTICIPANTS_HEADING: &str = "Participants & Answers:";

/// Heading that follows the participant payload in the grouping prompt.
pub const INSTRUCTIONS_HEADING: &str = "Instructions:";

#[derive(Serialize)]
struct QuestionBrief<'a> {
    id: &'a str,
    text: &'a str,
}

#[derive(Serialize)]
struct ParticipantBrief<'a> {
    id: &'a str,
    name: &'a str,
    answers: &'a BTreeMap<String, String>,
}

/// Prompt asking for a questionnaire tailored to `details`.
pub fn questionnaire_prompt(details: &EventDetails) -> String {
    format!(
        r#"You are an expert organizational psychologist and event planner.
Create a questionnaire to help form optimal teams for the following event:

Event Name: {}
Context: {}
Target Group Size: {}
Matching Rules: {}
Mandatory Topics: {}
Philosophy: {}

Generate 5-8 insightful questions that will reveal the necessary traits to follow the matching rules.
Include a mix of scale (1-10), multiple choice, and open text questions.
Ensure questions are clear and concise."#,
        details.event_name,
        details.context,
        details.group_size,
        details.matching_rules,
        details.mandatory_topics,
        details.matching_philosophy,
    )
}

/// Prompt asking the model to partition `participants` into groups.
pub fn grouping_prompt(
    details: &EventDetails,
    questions: &[Question],
    participants: &[Participant],
) -> Result<String, serde_json::Error> {
    let questions_json = serde_json::to_string_pretty(
        &questions
            .iter()
            .map(|q| QuestionBrief {
                id: &q.id,
                text: &q.text,
            })
            .collect::<Vec<_>>(),
    )?;
    let participants_json = serde_json::to_string_pretty(
        &participants
            .iter()
            .map(|p| ParticipantBrief {
                id: &p.id,
                name: &p.name,
                answers: &p.answers,
            })
            .collect::<Vec<_>>(),
    )?;

    Ok(format!(
        r#"Task: Form optimal teams for an event based on participant answers.

Event Details:
- Name: {name}
- Context: {context}
- Target Group Size: {size}
- Matching Rules: {rules}
- Philosophy: {philosophy}

Questions Asked:
{questions_json}

{participants_heading}
{participants_json}

{instructions_heading}
1. Analyze every participant's profile.
2. Group them according to the target size and matching rules.
3. Provide a clear justification for each group explaining why these people fit together.
4. List specific strengths and potential risks for each group.
5. Assign a compatibility score (0-100).
6. Assign a Role or Character Archetype to each member that specifically fits the theme of "{name}" (Context: {context}).
   - Example: If the event is "Star Wars", assign characters like "Jedi Guardian", "Smuggler", "Droid", "Sith Apprentice".
   - Example: If the event is a "Hackathon", assign roles like "Hacker", "Designer", "Pitcher".
   - Be creative and stick to the requested theme!
7. Every participant must appear in exactly one group, using the participant's exact id."#,
        name = details.event_name,
        context = details.context,
        size = details.group_size,
        rules = details.matching_rules,
        philosophy = details.matching_philosophy,
        questions_json = questions_json,
        participants_heading = PARTICIPANTS_HEADING,
        participants_json = participants_json,
        instructions_heading = INSTRUCTIONS_HEADING,
    ))
}
