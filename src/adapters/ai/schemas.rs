//! Response schemas handed to the model (Gemini OpenAPI subset).

use serde_json::{json, Value};

use crate::domain::event::QuestionType;

/// Array of `{text, type, options?}`.
pub fn questionnaire_schema() -> Value {
    let types: Vec<&str> = QuestionType::ALL.iter().map(QuestionType::as_str).collect();
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "text": { "type": "STRING", "description": "The question text" },
                "type": { "type": "STRING", "enum": types },
                "options": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Options for choice type questions"
                }
            },
            "required": ["text", "type"]
        }
    })
}

/// Array of groups with members, justification, strengths, risks and score.
pub fn grouping_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING", "description": "Creative team name based on the event theme" },
                "members": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "id": { "type": "STRING", "description": "Must match participant ID" },
                            "name": { "type": "STRING" },
                            "role": { "type": "STRING", "description": "Assigned role or character in group" },
                            "strengths": { "type": "ARRAY", "items": { "type": "STRING" } }
                        },
                        "required": ["id", "name"]
                    }
                },
                "justification": { "type": "STRING" },
                "strengths": { "type": "ARRAY", "items": { "type": "STRING" } },
                "risks": { "type": "ARRAY", "items": { "type": "STRING" } },
                "compatibilityScore": { "type": "NUMBER" }
            },
            "required": ["name", "members", "justification", "compatibilityScore"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questionnaire_schema_lists_every_type() {
        let schema = questionnaire_schema();
        let types = schema["items"]["properties"]["type"]["enum"].as_array().unwrap();
        assert_eq!(types.len(), 4);
        assert!(types.contains(&json!("boolean")));
        assert_eq!(schema["items"]["required"], json!(["text", "type"]));
    }

    #[test]
    fn grouping_schema_requires_score_and_members() {
        let schema = grouping_schema();
        let required = schema["items"]["required"].as_array().unwrap();
        assert!(required.contains(&json!("compatibilityScore")));
        assert!(required.contains(&json!("members")));
        assert_eq!(
            schema["items"]["properties"]["members"]["items"]["required"],
            json!(["id", "name"])
        );
    }
}
