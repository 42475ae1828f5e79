//! Plain-text rendering: uppercase headers over fixed-width rules, no markup.

use super::RULE_WIDTH;
use crate::domain::entities::{MeetingMetadata, MeetingSummary};

fn push_header(lines: &mut Vec<String>, header: &str) {
    lines.push(header.to_string());
    lines.push("-".repeat(RULE_WIDTH));
}

pub fn to_plain_text(summary: &MeetingSummary, metadata: &MeetingMetadata) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("MEETING SUMMARY".to_string());
    lines.push("=".repeat(RULE_WIDTH));
    lines.push(String::new());

    if let Some(title) = &metadata.title {
        lines.push(format!("Title: {}", title));
    }
    if let Some(date) = &metadata.date {
        lines.push(format!("Date: {}", date));
    }
    if let Some(attendees) = metadata.attendees.as_ref().filter(|a| !a.is_empty()) {
        lines.push(format!("Attendees: {}", attendees.join(", ")));
    }
    if let Some(duration) = metadata.duration {
        lines.push(format!("Duration: {} minutes", duration));
    }
    lines.push(String::new());

    push_header(&mut lines, "OVERVIEW");
    lines.push(summary.overview.clone());
    lines.push(String::new());

    if !summary.key_points.is_empty() {
        push_header(&mut lines, "KEY DISCUSSION POINTS");
        for point in &summary.key_points {
            lines.push(format!("* {}", point));
        }
        lines.push(String::new());
    }

    if !summary.decisions.is_empty() {
        push_header(&mut lines, "DECISIONS MADE");
        for decision in &summary.decisions {
            lines.push(format!("* {}", decision.decision));
            lines.push(format!("  Context: {}", decision.context));
            if let Some(timestamp) = &decision.timestamp {
                lines.push(format!("  Time: {}", timestamp));
            }
        }
        lines.push(String::new());
    }

    if !summary.action_items.is_empty() {
        push_header(&mut lines, "ACTION ITEMS");
        for item in &summary.action_items {
            let mut line = format!("[{}] {}", item.priority.as_str().to_uppercase(), item.task);
            if let Some(owner) = &item.owner {
                line.push_str(&format!(" (@{})", owner));
            }
            if let Some(deadline) = &item.deadline {
                line.push_str(&format!(" - Due: {}", deadline));
            }
            lines.push(line);
        }
        lines.push(String::new());
    }

    if !summary.topics_discussed.is_empty() {
        push_header(&mut lines, "TOPICS DISCUSSED");
        for topic in &summary.topics_discussed {
            lines.push(format!("* {}", topic));
        }
        lines.push(String::new());
    }

    if !summary.next_steps.is_empty() {
        push_header(&mut lines, "NEXT STEPS");
        for (i, step) in summary.next_steps.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, step));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::formatter::fixtures;

    #[test]
    fn test_plain_text_header_and_rules() {
        let text = to_plain_text(&fixtures::summary(), &fixtures::metadata());
        let expected_head = format!("MEETING SUMMARY\n{}\n\nTitle: Launch Review", "=".repeat(60));
        assert!(text.starts_with(&expected_head));
        assert!(text.contains(&format!("OVERVIEW\n{}\n", "-".repeat(60))));
    }

    #[test]
    fn test_plain_text_items() {
        let text = to_plain_text(&fixtures::summary(), &fixtures::metadata());
        assert!(text.contains("[HIGH] Alice will update the docs ASAP (@Alice)"));
        assert!(text.contains("[MEDIUM] Prepare release notes by Monday - Due: Monday"));
        assert!(text.contains("* We agreed to launch on Friday\n  Context: General discussion\n  Time: 10:15"));
        assert!(text.contains("TOPICS DISCUSSED"));
        assert!(text.contains("1. Alice will update the docs ASAP"));
        assert!(!text.contains('#'));
        assert!(!text.contains("**"));
    }

    #[test]
    fn test_plain_text_omits_empty_sections() {
        let text = to_plain_text(&Default::default(), &Default::default());
        assert!(text.contains("OVERVIEW"));
        assert!(!text.contains("ACTION ITEMS"));
        assert!(!text.contains("NEXT STEPS"));
    }
}
