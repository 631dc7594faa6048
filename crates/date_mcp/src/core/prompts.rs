use std::str::FromStr;

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageContent, PromptMessageRole};

use crate::core::error::{DateServerError, DateServerResult};

/// Prompts offered by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePrompt {
    DateSummary,
}

impl DatePrompt {
    pub const ALL: [DatePrompt; 1] = [DatePrompt::DateSummary];

    pub fn name(self) -> &'static str {
        match self {
            DatePrompt::DateSummary => "date-summary",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DatePrompt::DateSummary => "Summarize the current date, time and day of the week",
        }
    }
}

impl FromStr for DatePrompt {
    type Err = DateServerError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        DatePrompt::ALL
            .into_iter()
            .find(|prompt| prompt.name() == name)
            .ok_or_else(|| DateServerError::UnknownPrompt {
                name: name.to_string(),
            })
    }
}

/// Static prompt lookup
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    local_timezone: String,
}

impl PromptCatalog {
    pub fn new(local_timezone: impl Into<String>) -> Self {
        Self {
            local_timezone: local_timezone.into(),
        }
    }

    pub fn list(&self) -> Vec<Prompt> {
        DatePrompt::ALL
            .into_iter()
            .map(|prompt| Prompt::new(prompt.name(), Some(prompt.description()), None))
            .collect()
    }

    pub fn get(&self, name: &str) -> DateServerResult<GetPromptResult> {
        let prompt = name.parse::<DatePrompt>()?;
        let text = match prompt {
            DatePrompt::DateSummary => format!(
                "Give me a short summary of today's date. Include the current date in YYYY-MM-DD \
                 format, the current local time ({}) and the day of the week. Use the \
                 get_iso_date, current_time and get_day_name tools to look them up.",
                self.local_timezone
            ),
        };

        Ok(GetPromptResult {
            description: Some(prompt.description().to_string()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(text),
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_prompts() {
        let prompts = PromptCatalog::new("UTC").list();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "date-summary");
        assert!(prompts[0].arguments.is_none());
    }

    #[test]
    fn test_get_date_summary() {
        let result = PromptCatalog::new("Europe/Vienna")
            .get("date-summary")
            .unwrap();

        assert_eq!(result.messages.len(), 1);
        let message = &result.messages[0];
        assert_eq!(message.role, PromptMessageRole::User);
        match &message.content {
            PromptMessageContent::Text { text } => {
                assert!(text.contains("Europe/Vienna"));
                assert!(text.contains("day of the week"));
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_prompt() {
        let err = PromptCatalog::new("UTC").get("nope").unwrap_err();
        assert!(matches!(err, DateServerError::UnknownPrompt { name } if name == "nope"));
    }
}
