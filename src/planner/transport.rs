use anyhow::{Context, Result, anyhow};

use crate::client::{ChatCompletionRequest, ChatMessage, ChatMessageRole, DynLlmClient};

use super::parsing::parse_reply;
use super::platform::platform_tag;
use super::prompt::{PLANNER_SYSTEM_PROMPT, build_prompt};
use super::types::Plan;

/// Ask the model for a plan and parse the reply.
///
/// Upstream failures are surfaced here, before parsing: transport errors,
/// an empty reply, and a reply the model prefixed with `Error:`. The
/// parser itself never fails.
pub async fn request_plan(
    client: &DynLlmClient,
    task: &str,
    model: &str,
    max_tokens: u32,
) -> Result<Plan> {
    let task = task.trim();
    if task.is_empty() {
        return Err(anyhow!("Cannot plan for an empty task"));
    }

    let request = ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage {
                role: ChatMessageRole::System,
                content: PLANNER_SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: ChatMessageRole::User,
                content: build_prompt(task, platform_tag()),
            },
        ],
        max_tokens: Some(max_tokens),
        temperature: Some(0.2),
    };

    let response = client
        .chat_completion(request)
        .await
        .context("Planner completion call failed")?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("Planner returned no choices"))?;

    let reply = choice.message.content;
    if reply.trim().is_empty() {
        return Err(anyhow!("Planner reply was empty"));
    }
    if reply.starts_with("Error:") {
        return Err(anyhow!("Planner signalled an error: {reply}"));
    }

    Ok(parse_reply(&reply))
}
