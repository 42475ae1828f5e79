//! Korean structured layout: five fixed sections, always emitted in order.
//!
//! Dates in the details line are rendered as `YYMMDD`. Action items are grouped
//! by owner in first-seen order; items without an owner are listed without a
//! header.

use crate::domain::entities::{ActionItem, MeetingMetadata, MeetingSummary};
use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static FOLLOW_UP_MEETING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:next meeting|follow-up|reconvene|다음 회의|차기 회의)")
        .expect("Invalid regex")
});

static YYMMDD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{2})([0-9]{2})([0-9]{2})").expect("Invalid regex"));

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y%m%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

pub fn to_korean(summary: &MeetingSummary, metadata: &MeetingMetadata) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("## Meeting Details".to_string());
    match (&metadata.date, &metadata.title) {
        (Some(date), Some(title)) => lines.push(format!("{} {}", format_yymmdd(date), title)),
        (Some(date), None) => lines.push(format_yymmdd(date)),
        (None, Some(title)) => lines.push(title.clone()),
        (None, None) => {}
    }
    lines.push(String::new());

    lines.push("## Attendees".to_string());
    for attendee in metadata.attendees.iter().flatten() {
        lines.push(format!("- {}", attendee));
    }
    lines.push(String::new());

    lines.push("## Key Discussion Points".to_string());
    let points = if summary.key_points.is_empty() {
        &summary.topics_discussed
    } else {
        &summary.key_points
    };
    for point in points {
        lines.push(format!("- {}", point));
    }
    for decision in &summary.decisions {
        lines.push(format!("- {}", decision.decision));
    }
    lines.push(String::new());

    lines.push("## Action Items".to_string());
    for (owner, items) in group_by_owner(&summary.action_items) {
        if let Some(owner) = owner {
            lines.push(format!("\n**{}:**", owner));
        }
        for item in items {
            let mut line = format!("- {}", item.task);
            if let Some(deadline) = &item.deadline {
                line.push_str(&format!(" (마감: {})", deadline));
            }
            lines.push(line);
        }
    }
    lines.push(String::new());

    lines.push("## Next Steps/Meeting".to_string());
    match summary
        .next_steps
        .iter()
        .find(|step| FOLLOW_UP_MEETING_RE.is_match(step))
    {
        Some(follow_up) => lines.push(follow_up.clone()),
        None => {
            for step in &summary.next_steps {
                lines.push(format!("- {}", step));
            }
        }
    }

    lines.join("\n")
}

/// Group items by owner, keeping the order in which owners first appear and the
/// relative order of items inside each group. `None` is the unassigned group.
pub fn group_by_owner(items: &[ActionItem]) -> Vec<(Option<&str>, Vec<&ActionItem>)> {
    let mut groups: Vec<(Option<&str>, Vec<&ActionItem>)> = Vec::new();
    for item in items {
        let owner = item.owner.as_deref();
        match groups.iter().position(|(key, _)| *key == owner) {
            Some(index) => groups[index].1.push(item),
            None => groups.push((owner, vec![item])),
        }
    }
    groups
}

/// Render a calendar date as `YYMMDD`.
///
/// Unparseable input that contains six consecutive digits yields the first such
/// run verbatim, even when those digits are not a date. Anything else is
/// returned unchanged.
pub fn format_yymmdd(date: &str) -> String {
    if let Some(parsed) = parse_calendar_date(date.trim()) {
        return parsed.format("%y%m%d").to_string();
    }
    if let Some(m) = YYMMDD_RE.find(date) {
        return m.as_str().to_string();
    }
    date.to_string()
}

fn parse_calendar_date(date: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|dt| dt.date_naive()))
        .or_else(|| DateTime::parse_from_rfc2822(date).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            // ISO date followed by a time part, e.g. "2025-12-19 14:00".
            let (parsed, rest) = NaiveDate::parse_and_remainder(date, "%Y-%m-%d").ok()?;
            rest.starts_with([' ', 'T']).then_some(parsed)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ActionStatus, Priority};
    use crate::domain::formatter::fixtures;

    fn item(task: &str, owner: Option<&str>, deadline: Option<&str>) -> ActionItem {
        ActionItem {
            task: task.to_string(),
            owner: owner.map(str::to_string),
            deadline: deadline.map(str::to_string),
            priority: Priority::Medium,
            status: ActionStatus::Pending,
        }
    }

    #[test]
    fn test_format_yymmdd_parses_dates() {
        assert_eq!(format_yymmdd("2025-12-19"), "251219");
        assert_eq!(format_yymmdd("2025/01/05"), "250105");
        assert_eq!(format_yymmdd("December 19, 2025"), "251219");
        assert_eq!(format_yymmdd("2025-12-19T09:30:00+09:00"), "251219");
        assert_eq!(format_yymmdd("2025-12-19 14:00"), "251219");
    }

    #[test]
    fn test_format_yymmdd_fallbacks() {
        assert_eq!(format_yymmdd("회의 251219 오전"), "251219");
        assert_eq!(format_yymmdd("next Tuesday"), "next Tuesday");
    }

    #[test]
    fn test_meeting_details_line() {
        let metadata = MeetingMetadata {
            date: Some("2025-12-19".to_string()),
            title: Some("Arbitrum 파트너십 논의".to_string()),
            ..Default::default()
        };
        let out = to_korean(&MeetingSummary::default(), &metadata);
        assert!(out.contains("251219 Arbitrum 파트너십 논의"));
    }

    #[test]
    fn test_meeting_details_single_field() {
        let only_title = MeetingMetadata {
            title: Some("주간 회의".to_string()),
            ..Default::default()
        };
        let out = to_korean(&MeetingSummary::default(), &only_title);
        assert!(out.starts_with("## Meeting Details\n주간 회의\n"));
    }

    #[test]
    fn test_empty_input_has_all_headers() {
        let out = to_korean(&MeetingSummary::default(), &MeetingMetadata::default());
        assert_eq!(
            out,
            "## Meeting Details\n\n## Attendees\n\n## Key Discussion Points\n\n## Action Items\n\n## Next Steps/Meeting"
        );
    }

    #[test]
    fn test_action_items_grouped_by_owner() {
        let summary = MeetingSummary {
            action_items: vec![
                item("제안서 준비", Some("김철수"), Some("next Friday")),
                item("일정 공유", Some("이영희"), None),
                item("예산 검토", Some("김철수"), None),
                item("회의록 배포", None, None),
            ],
            ..Default::default()
        };
        let out = to_korean(&summary, &MeetingMetadata::default());
        assert!(out.contains(
            "**김철수:**\n- 제안서 준비 (마감: next Friday)\n- 예산 검토\n\n**이영희:**\n- 일정 공유\n- 회의록 배포"
        ));
    }

    #[test]
    fn test_group_by_owner_keeps_first_seen_order() {
        let items = vec![
            item("a", Some("Zed"), None),
            item("b", None, None),
            item("c", Some("Amy"), None),
            item("d", Some("Zed"), None),
        ];
        let groups = group_by_owner(&items);
        let keys: Vec<_> = groups.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![Some("Zed"), None, Some("Amy")]);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_key_points_fall_back_to_topics_and_add_decisions() {
        let mut summary = fixtures::summary();
        let out = to_korean(&summary, &fixtures::metadata());
        assert!(out.contains(
            "## Key Discussion Points\n- The beta feedback was mostly positive across regions\n- We agreed to launch on Friday\n"
        ));

        summary.key_points.clear();
        let out = to_korean(&summary, &fixtures::metadata());
        assert!(out.contains(
            "## Key Discussion Points\n- Launch timing\n- We agreed to launch on Friday\n"
        ));
    }

    #[test]
    fn test_next_steps_prefers_follow_up_meeting() {
        let summary = MeetingSummary {
            next_steps: vec![
                "Ship the build".to_string(),
                "차기 회의는 1월 5일".to_string(),
                "Reconvene on Monday".to_string(),
            ],
            ..Default::default()
        };
        let out = to_korean(&summary, &MeetingMetadata::default());
        assert!(out.ends_with("## Next Steps/Meeting\n차기 회의는 1월 5일"));
    }

    #[test]
    fn test_next_steps_listed_without_follow_up() {
        let summary = MeetingSummary {
            next_steps: vec!["Ship the build".to_string(), "Write docs".to_string()],
            ..Default::default()
        };
        let out = to_korean(&summary, &MeetingMetadata::default());
        assert!(out.ends_with("## Next Steps/Meeting\n- Ship the build\n- Write docs"));
    }
}
