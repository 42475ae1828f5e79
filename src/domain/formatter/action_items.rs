//! Action-items-only rendering, used by the extraction tool.

use super::RULE_WIDTH;
use crate::domain::entities::{ActionItem, OutputFormat};
use crate::domain::errors::DomainError;
use serde::Serialize;

const NO_ITEMS: &str = "No action items found.";

#[derive(Serialize)]
struct ActionItemsOutput<'a> {
    action_items: &'a [ActionItem],
}

/// Render just the action items. The Korean layout has no action-only variant
/// and is rejected.
pub fn render_action_items(
    items: &[ActionItem],
    format: OutputFormat,
) -> Result<String, DomainError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ActionItemsOutput {
            action_items: items,
        })?),
        OutputFormat::Markdown => Ok(to_markdown(items)),
        OutputFormat::Text => Ok(to_plain_text(items)),
        OutputFormat::Korean => Err(DomainError::InvalidInput(
            "format must be one of: json, markdown, text".to_string(),
        )),
    }
}

fn to_markdown(items: &[ActionItem]) -> String {
    if items.is_empty() {
        return format!("# Action Items\n\n{}", NO_ITEMS);
    }

    let mut lines = vec!["# Action Items\n".to_string()];
    for item in items {
        let mut line = format!("- {} {}", item.priority.indicator(), item.task);
        if let Some(owner) = &item.owner {
            line.push_str(&format!(" *(@{})*", owner));
        }
        if let Some(deadline) = &item.deadline {
            line.push_str(&format!(" **Due:** {}", deadline));
        }
        lines.push(line);
    }
    lines.join("\n")
}

fn to_plain_text(items: &[ActionItem]) -> String {
    if items.is_empty() {
        return format!("ACTION ITEMS\n\n{}", NO_ITEMS);
    }

    let mut lines = vec!["ACTION ITEMS".to_string(), "=".repeat(RULE_WIDTH), String::new()];
    for (i, item) in items.iter().enumerate() {
        let mut line = format!(
            "{}. [{}] {}",
            i + 1,
            item.priority.as_str().to_uppercase(),
            item.task
        );
        if let Some(owner) = &item.owner {
            line.push_str(&format!(" (@{})", owner));
        }
        if let Some(deadline) = &item.deadline {
            line.push_str(&format!(" - Due: {}", deadline));
        }
        lines.push(line);
    }
    lines.join("\n")
}
