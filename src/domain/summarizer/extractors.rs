//! Per-line extractors for action items: owner, deadline, priority.
//!
//! Each extractor is an ordered list of patterns; the first match wins.

use crate::domain::entities::Priority;
use once_cell::sync::Lazy;
use regex::Regex;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("Invalid regex"))
        .collect()
}

static OWNER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        // @mention
        r"@([\p{L}\p{N}_]+)",
        r"(?i)(?:assigned to|owner:)\s*(\p{L}[\p{L}\s]*)",
        // leading "Name will" / "Name to"
        r"(?i)^(\p{L}[\p{L}\s]{0,20}?)\s+(?:will|to)\s+",
        // any short name right before an action verb
        r"(?i)(\p{L}{2,10})\s+(?:will|to|should|needs?|must)",
    ])
});

static DEADLINE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)(?:by|due|deadline|before)\s+((?:next\s+)?(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|week|month))",
        r"(?:by|due|deadline|before)\s+([0-9]{1,2}/[0-9]{1,2}(?:/[0-9]{2,4})?)",
        r"(?:by|due|deadline|before)\s+([A-Z][a-z]+\s+[0-9]{1,2}(?:,?\s+[0-9]{4})?)",
    ])
});

static HIGH_PRIORITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:urgent|critical|asap|immediately|high priority)\b")
        .expect("Invalid regex")
});

static LOW_PRIORITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:when possible|nice to have|optional|low priority)\b")
        .expect("Invalid regex")
});

fn first_match(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}

/// Who owns the task. Unicode-aware so non-Latin names are kept.
pub fn extract_owner(text: &str) -> Option<String> {
    first_match(&OWNER_PATTERNS, text)
}

/// Free-form deadline phrase following `by`/`due`/`deadline`/`before`.
pub fn extract_deadline(text: &str) -> Option<String> {
    first_match(&DEADLINE_PATTERNS, text)
}

/// High cues beat low cues; neither means medium.
pub fn determine_priority(text: &str) -> Priority {
    if HIGH_PRIORITY_RE.is_match(text) {
        Priority::High
    } else if LOW_PRIORITY_RE.is_match(text) {
        Priority::Low
    } else {
        Priority::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_from_mention() {
        assert_eq!(
            extract_owner("Review the PR @jamie_k before lunch").as_deref(),
            Some("jamie_k")
        );
        assert_eq!(extract_owner("문서 검토 @민수").as_deref(), Some("민수"));
    }

    #[test]
    fn test_owner_from_assignment() {
        assert_eq!(
            extract_owner("Budget review assigned to Priya").as_deref(),
            Some("Priya")
        );
        assert_eq!(extract_owner("Owner: Kim").as_deref(), Some("Kim"));
    }

    #[test]
    fn test_owner_leading_name() {
        assert_eq!(
            extract_owner("Sarah will prepare the checklist").as_deref(),
            Some("Sarah")
        );
    }

    #[test]
    fn test_owner_unicode_before_verb() {
        assert_eq!(
            extract_owner("Action: 김철수 will prepare partnership proposal by next Friday")
                .as_deref(),
            Some("김철수")
        );
    }

    #[test]
    fn test_owner_absent() {
        assert_eq!(extract_owner("Action: finalize budget"), None);
    }

    #[test]
    fn test_deadline_weekday() {
        assert_eq!(
            extract_deadline("Mike will complete the task by Friday.").as_deref(),
            Some("Friday")
        );
        assert_eq!(
            extract_deadline("ship it before next Monday").as_deref(),
            Some("next Monday")
        );
    }

    #[test]
    fn test_deadline_numeric_date() {
        assert_eq!(
            extract_deadline("Send the invoice due 3/15/2026").as_deref(),
            Some("3/15/2026")
        );
    }

    #[test]
    fn test_deadline_month_name() {
        assert_eq!(
            extract_deadline("Publish the report by March 3, 2026").as_deref(),
            Some("March 3, 2026")
        );
    }

    #[test]
    fn test_deadline_absent() {
        assert_eq!(extract_deadline("Someone should look at it"), None);
    }

    #[test]
    fn test_priority_levels() {
        assert_eq!(determine_priority("Fix the outage ASAP"), Priority::High);
        assert_eq!(determine_priority("Dark mode is nice to have"), Priority::Low);
        assert_eq!(determine_priority("Update the docs"), Priority::Medium);
        assert_eq!(
            determine_priority("urgent, though optional for now"),
            Priority::High
        );
    }
}
