//! Prompt construction for ticket drafting

/// Builds the prompt sent to the completion provider
pub struct PromptBuilder {
    user_input: String,
    system_prompt: String,
    context: String,
}

impl PromptBuilder {
    /// Create a new prompt builder for the user's request
    pub fn new(user_input: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
            system_prompt: String::new(),
            context: String::new(),
        }
    }

    /// Set the base instructions
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    /// Add contextual information (projects, conventions, ...)
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Build the complete drafting prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Base instructions
        if !self.system_prompt.is_empty() {
            prompt.push_str(&self.system_prompt);
            prompt.push_str("\n\n");
        }

        // 2. Context block
        if !self.context.is_empty() {
            prompt.push_str("Relevant Context:\n");
            prompt.push_str(&self.context);
            prompt.push_str("\n\n");
        }

        // 3. The user's request
        prompt.push_str("User Request:\n");
        prompt.push_str(&self.user_input);
        prompt.push_str("\n\n");

        // 4. Output format contract
        prompt.push_str(FORMAT_INSTRUCTIONS);

        prompt
    }
}

const FORMAT_INSTRUCTIONS: &str = r#"Based on the user request and context, generate a response in the following JSON format ONLY:
{
  "summary": "<A concise summary of the ticket/task>",
  "description": "<A detailed description of the ticket/task>",
  "project_name_suggestion": "<A suggested project name based on the request>"
}
Ensure the output is a single, valid JSON object and nothing else."#;
