//! Core TicketExtractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_response;
use crate::prompt::PromptBuilder;
use crate::types::{DraftRequest, TicketDraft};
use ticketforge_llm::CompletionProvider;
use tokio::time::timeout;
use tracing::{debug, info};

/// Turns a free-form ticket description into a validated draft
pub struct TicketExtractor<P: CompletionProvider> {
    provider: P,
    config: ExtractorConfig,
}

impl<P: CompletionProvider> TicketExtractor<P> {
    /// Create a new extractor
    pub fn new(provider: P, config: ExtractorConfig) -> Self {
        Self { provider, config }
    }

    /// Draft a ticket from the request.
    ///
    /// Builds the prompt, calls the provider under the configured
    /// timeout, then normalizes and validates the completion.
    pub async fn draft(&self, request: DraftRequest) -> Result<TicketDraft, ExtractorError> {
        if request.user_input.len() > self.config.max_input_length {
            return Err(ExtractorError::InputTooLong(
                request.user_input.len(),
                self.config.max_input_length,
            ));
        }

        let prompt = PromptBuilder::new(request.user_input)
            .with_system_prompt(request.system_prompt)
            .with_context(request.context)
            .build();

        debug!(prompt_len = prompt.len(), "requesting ticket draft");

        let completion = timeout(
            self.config.completion_timeout(),
            self.provider.complete(&prompt),
        )
        .await
        .map_err(|_| ExtractorError::Timeout)?
        .map_err(|e| ExtractorError::Llm(e.to_string()))?;

        if completion.trim().is_empty() {
            return Err(ExtractorError::EmptyResponse);
        }

        debug!(completion_len = completion.len(), "received completion");

        let draft = parse_response(&completion)?;
        info!(summary = %draft.summary, "ticket draft validated");
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketforge_llm::MockProvider;

    fn request(input: &str) -> DraftRequest {
        DraftRequest {
            user_input: input.to_string(),
            system_prompt: "You draft tickets.".to_string(),
            context: String::new(),
        }
    }

    #[tokio::test]
    async fn test_draft_from_fenced_completion() {
        let provider = MockProvider::new(
            "Sure, here you go:\n```json\n{\"summary\":\"Fix bug\",\"project_name_suggestion\":\"Web\"}\n```",
        );
        let extractor = TicketExtractor::new(provider, ExtractorConfig::default());

        let draft = extractor.draft(request("the login page is broken")).await.unwrap();
        assert_eq!(draft.summary, "Fix bug");
        assert_eq!(draft.description, "");
        assert_eq!(draft.project_suggestion, "Web");
    }

    #[tokio::test]
    async fn test_draft_rejects_oversized_input() {
        let provider = MockProvider::new("{}");
        let extractor = TicketExtractor::new(provider, ExtractorConfig::default());

        let long_input = "a".repeat(100_000);
        let result = extractor.draft(request(&long_input)).await;
        assert!(matches!(result, Err(ExtractorError::InputTooLong(_, _))));
    }

    #[tokio::test]
    async fn test_draft_surfaces_provider_errors() {
        let mut provider = MockProvider::default();
        // MockProvider keys canned responses by full prompt, so build
        // the same prompt the extractor will send.
        let prompt = PromptBuilder::new("boom")
            .with_system_prompt("You draft tickets.")
            .build();
        provider.add_error(prompt);

        let extractor = TicketExtractor::new(provider, ExtractorConfig::default());
        let result = extractor.draft(request("boom")).await;
        assert!(matches!(result, Err(ExtractorError::Llm(_))));
    }

    #[tokio::test]
    async fn test_draft_rejects_blank_completion() {
        let provider = MockProvider::new("   \n  ");
        let extractor = TicketExtractor::new(provider, ExtractorConfig::default());

        let result = extractor.draft(request("anything")).await;
        assert!(matches!(result, Err(ExtractorError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_draft_propagates_validation_failure() {
        let provider = MockProvider::new(r#"{"summary":"only a summary"}"#);
        let extractor = TicketExtractor::new(provider, ExtractorConfig::default());

        let result = extractor.draft(request("anything")).await;
        assert!(matches!(
            result,
            Err(ExtractorError::MissingField("project_name_suggestion"))
        ));
    }
}
