//! Meeting summarizer. [`ParsedMeeting`] -> [`MeetingSummary`].
//!
//! Pure function of its input. All collections keep insertion order;
//! deduplication is exact string equality after [`clean_text`].

pub mod extractors;

use crate::domain::entities::{
    ActionItem, ActionStatus, Decision, MeetingMetadata, MeetingSummary, ParsedMeeting, Priority,
    Section, SectionKind,
};
use crate::domain::text::{clean_text, truncate_chars};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

pub use extractors::{determine_priority, extract_deadline, extract_owner};

pub const MAX_KEY_POINTS: usize = 10;
pub const MAX_TOPICS: usize = 8;
pub const MAX_NEXT_STEPS: usize = 5;

/// Discussion lines longer than this (in characters) become key points.
const KEY_POINT_MIN_CHARS: usize = 50;
/// Sections preceding a decision that make up its context.
const CONTEXT_WINDOW: usize = 2;
const CONTEXT_MAX_CHARS: usize = 200;
const DEFAULT_CONTEXT: &str = "General discussion";
/// Words of a decision line used as a fallback topic.
const TOPIC_WORDS: usize = 5;
/// Medium-priority items with a deadline that make it into next steps.
const MAX_DEADLINE_STEPS: usize = 3;

static TOPIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:Topic|Agenda|Discussion):\s*(.+)").expect("Invalid regex"));

static FOLLOW_UP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:next meeting|follow-up|reconvene)").expect("Invalid regex"));

/// Derive the full summary from a parsed meeting.
pub fn summarize(parsed: &ParsedMeeting) -> MeetingSummary {
    let action_items = extract_action_items(&parsed.sections);
    let summary = MeetingSummary {
        overview: generate_overview(parsed),
        key_points: extract_key_points(&parsed.sections),
        decisions: extract_decisions(&parsed.sections),
        topics_discussed: extract_topics(&parsed.sections),
        next_steps: extract_next_steps(&parsed.sections, &action_items),
        action_items,
    };
    debug!(
        key_points = summary.key_points.len(),
        decisions = summary.decisions.len(),
        action_items = summary.action_items.len(),
        topics = summary.topics_discussed.len(),
        next_steps = summary.next_steps.len(),
        "summarized meeting"
    );
    summary
}

/// "{title} with N attendees. The meeting resulted in ..." in one sentence.
pub fn generate_overview(parsed: &ParsedMeeting) -> String {
    overview_sentence(
        &parsed.metadata,
        parsed.count(SectionKind::Decision),
        parsed.count(SectionKind::Action),
    )
}

fn overview_sentence(metadata: &MeetingMetadata, decisions: usize, actions: usize) -> String {
    let mut overview = match &metadata.title {
        Some(title) => title.clone(),
        None => "Meeting".to_string(),
    };

    let attendees = metadata.attendee_count();
    if attendees > 0 {
        overview.push_str(&format!(" with {} attendees", attendees));
    }
    overview.push_str(". ");

    let mut parts = Vec::new();
    if decisions > 0 {
        parts.push(pluralize(decisions, "decision"));
    }
    if actions > 0 {
        parts.push(pluralize(actions, "action item"));
    }

    if parts.is_empty() {
        overview.push_str("The meeting covered various discussion topics.");
    } else {
        overview.push_str(&format!("The meeting resulted in {}.", parts.join(" and ")));
    }
    overview
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Long discussion lines, cleaned and deduplicated.
pub fn extract_key_points(sections: &[Section]) -> Vec<String> {
    unique_capped(
        sections
            .iter()
            .filter(|s| s.is(SectionKind::Discussion))
            .filter(|s| s.content.chars().count() > KEY_POINT_MIN_CHARS)
            .map(|s| clean_text(&s.content)),
        MAX_KEY_POINTS,
    )
}

/// One decision per decision section, with context from the sections right before it.
pub fn extract_decisions(sections: &[Section]) -> Vec<Decision> {
    sections
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is(SectionKind::Decision))
        .map(|(index, section)| Decision {
            decision: clean_text(&section.content),
            context: find_context(sections, index),
            timestamp: section.timestamp.clone(),
        })
        .collect()
}

fn find_context(sections: &[Section], index: usize) -> String {
    let start = index.saturating_sub(CONTEXT_WINDOW);
    let joined = sections[start..index]
        .iter()
        .map(|s| s.content.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let context = truncate_chars(&clean_text(&joined), CONTEXT_MAX_CHARS);
    if context.is_empty() {
        DEFAULT_CONTEXT.to_string()
    } else {
        context
    }
}

/// One pending action item per action section. Fields come from the raw line.
pub fn extract_action_items(sections: &[Section]) -> Vec<ActionItem> {
    sections
        .iter()
        .filter(|s| s.is(SectionKind::Action))
        .map(|s| ActionItem {
            task: clean_text(&s.content),
            owner: extract_owner(&s.content),
            deadline: extract_deadline(&s.content),
            priority: determine_priority(&s.content),
            status: ActionStatus::Pending,
        })
        .collect()
}

/// Explicit `Topic:`/`Agenda:`/`Discussion:` lines; otherwise the opening words of decisions.
pub fn extract_topics(sections: &[Section]) -> Vec<String> {
    let explicit = unique_capped(
        sections.iter().filter_map(|s| {
            TOPIC_RE
                .captures(&s.content)
                .map(|caps| caps[1].trim().to_string())
        }),
        MAX_TOPICS,
    );
    if !explicit.is_empty() {
        return explicit;
    }

    unique_capped(
        sections
            .iter()
            .filter(|s| s.is(SectionKind::Decision))
            .map(|s| topic_from_content(&s.content)),
        MAX_TOPICS,
    )
}

fn topic_from_content(content: &str) -> String {
    let words = content
        .split_whitespace()
        .take(TOPIC_WORDS)
        .collect::<Vec<_>>()
        .join(" ");
    clean_text(&words)
}

/// High-priority tasks, then a few medium tasks with deadlines, then follow-up
/// mentions. Not deduplicated; truncated to [`MAX_NEXT_STEPS`].
pub fn extract_next_steps(sections: &[Section], action_items: &[ActionItem]) -> Vec<String> {
    let high = action_items
        .iter()
        .filter(|item| item.priority == Priority::High)
        .map(|item| item.task.clone());

    let with_deadline = action_items
        .iter()
        .filter(|item| item.priority == Priority::Medium && item.deadline.is_some())
        .take(MAX_DEADLINE_STEPS)
        .map(|item| item.task.clone());

    let follow_ups = sections
        .iter()
        .filter(|s| FOLLOW_UP_RE.is_match(&s.content))
        .map(|s| clean_text(&s.content));

    high.chain(with_deadline)
        .chain(follow_ups)
        .take(MAX_NEXT_STEPS)
        .collect()
}

fn unique_capped(items: impl Iterator<Item = String>, cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .filter(|item| seen.insert(item.clone()))
        .take(cap)
        .collect()
}
