//! Skill and certification line parsers.

use serde::Serialize;

use crate::resume::entries::normalize_whitespace;

/// One skills line split on its first colon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub label: String,
    pub value: String,
}

pub fn parse_skills(lines: &[String]) -> Vec<SkillGroup> {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once(':') {
            Some((label, value)) => SkillGroup {
                label: label.trim().to_string(),
                value: normalize_whitespace(value),
            },
            None => SkillGroup {
                label: line.trim().to_string(),
                value: String::new(),
            },
        })
        .collect()
}

pub fn parse_certifications(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| normalize_whitespace(line))
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_splits_on_first_colon_only() {
        let parsed = parse_skills(&lines(&["Tools: git, CI: Jenkins"]));
        assert_eq!(parsed[0].label, "Tools");
        assert_eq!(parsed[0].value, "git, CI: Jenkins");
    }

    #[test]
    fn test_line_without_colon_keeps_empty_value() {
        let parsed = parse_skills(&lines(&["Generalist"]));
        assert_eq!(parsed[0].label, "Generalist");
        assert!(parsed[0].value.is_empty());
    }

    #[test]
    fn test_blank_skill_lines_are_skipped() {
        let parsed = parse_skills(&lines(&["", "  ", "Languages: Rust"]));
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].label, "Languages");
        assert_eq!(parsed[0].value, "Rust");
    }

    #[test]
    fn test_certifications_keep_order_and_normalize() {
        let parsed =
            parse_certifications(&lines(&["First  cert", "Second\u{a0}cert", "   "]));
        assert_eq!(parsed, vec!["First cert", "Second cert"]);
    }
}
