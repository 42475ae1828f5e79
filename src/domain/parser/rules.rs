//! Line classification rules.
//!
//! Rules are evaluated in the order of [`LINE_RULES`] and the first one that
//! returns a section wins. The order is a contract:
//!
//! 1. `action` — task verbs, assignment markers, or deadline phrases
//! 2. `decision` — decision verbs, nouns, or phrases
//! 3. `speaker` — `Name:` / `First Last:` prefix, split into speaker and content
//! 4. `discussion` — everything else, whole line as content
//!
//! A line that carries both an action cue and a speaker prefix is therefore an
//! action whose content still includes the speaker name.

use crate::domain::entities::{Section, SectionKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// A named predicate + extractor over one trimmed, non-blank line.
pub struct LineRule {
    pub name: &'static str,
    pub classify: fn(&str) -> Option<Section>,
}

pub static LINE_RULES: [LineRule; 4] = [
    LineRule {
        name: "action",
        classify: classify_action,
    },
    LineRule {
        name: "decision",
        classify: classify_decision,
    },
    LineRule {
        name: "speaker",
        classify: classify_speaker,
    },
    LineRule {
        name: "discussion",
        classify: classify_discussion,
    },
];

static ACTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(?:will|should|needs? to|must|action|todo|task)\b",
        r"(?i)@\w+|\b(?:assigned to|owner:)",
        r"(?i)\b(?:by|due|deadline|before)\s+(?:friday|monday|tuesday|wednesday|thursday|saturday|sunday|next week|tomorrow)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid regex"))
    .collect()
});

static DECISION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(?:decided|agreed|concluded|resolved|approved)\b",
        r"(?i)\b(?:decision|consensus|agreement|resolution)\b",
        r"(?i)\b(?:we're going with|we'll move forward with|final decision)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid regex"))
    .collect()
});

static SPEAKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*):\s*(.+)$").expect("Invalid regex")
});

pub fn is_action(line: &str) -> bool {
    ACTION_PATTERNS.iter().any(|re| re.is_match(line))
}

pub fn is_decision(line: &str) -> bool {
    DECISION_PATTERNS.iter().any(|re| re.is_match(line))
}

fn classify_action(line: &str) -> Option<Section> {
    is_action(line).then(|| Section::new(SectionKind::Action, line))
}

fn classify_decision(line: &str) -> Option<Section> {
    is_decision(line).then(|| Section::new(SectionKind::Decision, line))
}

fn classify_speaker(line: &str) -> Option<Section> {
    let caps = SPEAKER_RE.captures(line)?;
    Some(Section {
        kind: SectionKind::Discussion,
        content: caps[2].to_string(),
        speaker: Some(caps[1].to_string()),
        timestamp: None,
    })
}

fn classify_discussion(line: &str) -> Option<Section> {
    Some(Section::new(SectionKind::Discussion, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order_is_fixed() {
        let names: Vec<_> = LINE_RULES.iter().map(|r| r.name).collect();
        assert_eq!(names, ["action", "decision", "speaker", "discussion"]);
    }

    #[test]
    fn test_action_verbs() {
        assert!(is_action("Sarah will draft the memo"));
        assert!(is_action("We should revisit pricing"));
        assert!(is_action("Ops needs to rotate keys"));
        assert!(is_action("TODO: update the wiki"));
        assert!(!is_action("Willow trees are nice"));
    }

    #[test]
    fn test_action_markers() {
        assert!(is_action("ping @dana about the budget"));
        assert!(is_action("Budget review assigned to Priya"));
        assert!(is_action("Owner: Kim"));
    }

    #[test]
    fn test_action_deadline_phrase() {
        assert!(is_action("Slides due Monday"));
        assert!(is_action("Report before next week"));
        assert!(is_action("Draft by tomorrow"));
    }

    #[test]
    fn test_decision_signals() {
        assert!(is_decision("We decided to launch in March"));
        assert!(is_decision("The team reached consensus"));
        assert!(is_decision("We're going with vendor B"));
        assert!(!is_decision("Let's keep talking"));
    }

    #[test]
    fn test_speaker_prefix_split() {
        let section = classify_speaker("John Smith: The numbers look good").unwrap();
        assert_eq!(section.kind, SectionKind::Discussion);
        assert_eq!(section.speaker.as_deref(), Some("John Smith"));
        assert_eq!(section.content, "The numbers look good");
    }

    #[test]
    fn test_speaker_requires_capitalized_tokens() {
        assert!(classify_speaker("john: lowercase name").is_none());
        assert!(classify_speaker("NASA: all caps").is_none());
    }
}
