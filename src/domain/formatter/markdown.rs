//! Markdown rendering. Sections with no entries are left out.

use crate::domain::entities::{MeetingMetadata, MeetingSummary};

pub fn to_markdown(summary: &MeetingSummary, metadata: &MeetingMetadata) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# Meeting Summary\n".to_string());

    if let Some(title) = &metadata.title {
        lines.push(format!("**Title:** {}\n", title));
    }
    if let Some(date) = &metadata.date {
        lines.push(format!("**Date:** {}\n", date));
    }
    if let Some(attendees) = metadata.attendees.as_ref().filter(|a| !a.is_empty()) {
        lines.push(format!("**Attendees:** {}\n", attendees.join(", ")));
    }
    if let Some(duration) = metadata.duration {
        lines.push(format!("**Duration:** {} minutes\n", duration));
    }
    lines.push(String::new());

    lines.push("## Overview\n".to_string());
    lines.push(format!("{}\n", summary.overview));
    lines.push(String::new());

    if !summary.key_points.is_empty() {
        lines.push("## Key Discussion Points\n".to_string());
        for point in &summary.key_points {
            lines.push(format!("- {}", point));
        }
        lines.push(String::new());
    }

    if !summary.decisions.is_empty() {
        lines.push("## Decisions Made\n".to_string());
        for decision in &summary.decisions {
            lines.push(format!("### {}\n", decision.decision));
            lines.push(format!("**Context:** {}\n", decision.context));
            if let Some(timestamp) = &decision.timestamp {
                lines.push(format!("**Time:** {}\n", timestamp));
            }
            lines.push(String::new());
        }
    }

    if !summary.action_items.is_empty() {
        lines.push("## Action Items\n".to_string());
        for item in &summary.action_items {
            let mut line = format!("- {} {}", item.priority.indicator(), item.task);
            if let Some(owner) = &item.owner {
                line.push_str(&format!(" *(@{})*", owner));
            }
            if let Some(deadline) = &item.deadline {
                line.push_str(&format!(" **Due:** {}", deadline));
            }
            lines.push(line);
        }
        lines.push(String::new());
    }

    if !summary.topics_discussed.is_empty() {
        lines.push("## Topics Discussed\n".to_string());
        for topic in &summary.topics_discussed {
            lines.push(format!("- {}", topic));
        }
        lines.push(String::new());
    }

    if !summary.next_steps.is_empty() {
        lines.push("## Next Steps\n".to_string());
        for step in &summary.next_steps {
            lines.push(format!("1. {}", step));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
