//! Line scanners for the dated resume sections: the title/period splitter,
//! the paired education reader, and the stateful experience/project
//! scanners. All of them degrade to empty strings on malformed input.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub period: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub organization: String,
    pub period: String,
    pub role: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub name: String,
    pub period: String,
    /// Untitled lines that preceded this entry's header.
    pub context: Vec<String>,
    pub bullets: Vec<String>,
}

/// A line split into its leading title and trailing period.
#[derive(Debug, Clone, PartialEq)]
pub struct TitlePeriod {
    pub title: String,
    pub period: String,
}

/// Splits on the first tab or run of two-or-more spaces. Lines without such
/// a gap are all title, with an empty period.
pub fn split_title_period(line: &str) -> TitlePeriod {
    match find_gap(line) {
        Some(idx) => TitlePeriod {
            title: line[..idx].trim().to_string(),
            period: line[idx..].trim().to_string(),
        },
        None => TitlePeriod {
            title: line.trim().to_string(),
            period: String::new(),
        },
    }
}

fn find_gap(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    for i in 0..bytes.len() {
        if bytes[i] == b'\t' {
            return Some(i);
        }
        if bytes[i] == b' ' && bytes.get(i + 1) == Some(&b' ') {
            return Some(i);
        }
    }
    None
}

/// Collapses NBSPs and runs of whitespace into single spaces.
pub fn normalize_whitespace(line: &str) -> String {
    line.replace('\u{a0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Education lines arrive in fixed pairs: a header carrying the institution
/// and period, then a detail line. A trailing unpaired header keeps an
/// empty detail.
pub fn parse_education(lines: &[String]) -> Vec<EducationEntry> {
    lines
        .chunks(2)
        .map(|pair| {
            let TitlePeriod { title, period } = split_title_period(&pair[0]);
            EducationEntry {
                institution: title,
                period,
                detail: pair.get(1).map(|l| normalize_whitespace(l)).unwrap_or_default(),
            }
        })
        .collect()
}

/// States for the experience/project line scanners.
enum ScanState {
    AwaitingHeader,
    AwaitingRole,
    CollectingBullets,
}

/// Scans experience lines: a line with a detected period opens a new entry
/// (flushing the previous one), the next line is the role, and everything
/// after that is a bullet. Entries that end up with neither a role nor an
/// organization are dropped.
pub fn parse_experience(lines: &[String]) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();
    let mut current: Option<ExperienceEntry> = None;
    let mut state = ScanState::AwaitingHeader;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let TitlePeriod { title, period } = split_title_period(line);
        if !period.is_empty() {
            flush_experience(&mut entries, current.take());
            current = Some(ExperienceEntry {
                organization: title,
                period,
                role: String::new(),
                bullets: Vec::new(),
            });
            state = ScanState::AwaitingRole;
            continue;
        }

        match state {
            // Untitled line before any header: nothing to attach it to.
            ScanState::AwaitingHeader => {}
            ScanState::AwaitingRole => {
                if let Some(entry) = current.as_mut() {
                    entry.role = normalize_whitespace(line);
                }
                state = ScanState::CollectingBullets;
            }
            ScanState::CollectingBullets => {
                if let Some(entry) = current.as_mut() {
                    entry.bullets.push(normalize_whitespace(line));
                }
            }
        }
    }

    flush_experience(&mut entries, current);
    entries
}

fn flush_experience(entries: &mut Vec<ExperienceEntry>, entry: Option<ExperienceEntry>) {
    if let Some(entry) = entry {
        if !entry.role.is_empty() || !entry.organization.is_empty() {
            entries.push(entry);
        }
    }
}

/// Scans project lines with the same header detection, except untitled lines
/// seen before a header become context lines attached to the next titled
/// entry, and every line after a header is a bullet.
pub fn parse_projects(lines: &[String]) -> Vec<ProjectEntry> {
    let mut entries = Vec::new();
    let mut current: Option<ProjectEntry> = None;
    let mut pending_context: Vec<String> = Vec::new();
    let mut state = ScanState::AwaitingHeader;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let TitlePeriod { title, period } = split_title_period(line);
        if !period.is_empty() {
            if let Some(entry) = current.take() {
                entries.push(entry);
            }
            current = Some(ProjectEntry {
                name: title,
                period,
                context: std::mem::take(&mut pending_context),
                bullets: Vec::new(),
            });
            state = ScanState::CollectingBullets;
            continue;
        }

        match state {
            ScanState::AwaitingHeader => pending_context.push(normalize_whitespace(line)),
            ScanState::AwaitingRole | ScanState::CollectingBullets => {
                if let Some(entry) = current.as_mut() {
                    entry.bullets.push(normalize_whitespace(line));
                }
            }
        }
    }

    if let Some(entry) = current.take() {
        entries.push(entry);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_on_multiple_spaces() {
        let split = split_title_period("Acme Corp   2020 - 2022");
        assert_eq!(split.title, "Acme Corp");
        assert_eq!(split.period, "2020 - 2022");
    }

    #[test]
    fn test_split_on_tab() {
        let split = split_title_period("Acme Corp\t2020 - 2022");
        assert_eq!(split.title, "Acme Corp");
        assert_eq!(split.period, "2020 - 2022");
    }

    #[test]
    fn test_no_gap_means_whole_line_is_title() {
        let split = split_title_period("Standalone line with single spaces");
        assert_eq!(split.title, "Standalone line with single spaces");
        assert!(split.period.is_empty());
    }

    #[test]
    fn test_exactly_two_spaces_is_a_gap() {
        let split = split_title_period("Org  2019");
        assert_eq!(split.title, "Org");
        assert_eq!(split.period, "2019");
    }

    #[test]
    fn test_normalize_whitespace_collapses_nbsp_and_runs() {
        assert_eq!(normalize_whitespace("a\u{a0}\u{a0}b   c\t d"), "a b c d");
    }

    #[test]
    fn test_education_consumes_fixed_pairs() {
        let parsed = parse_education(&lines(&[
            "State University   2015 - 2019",
            "B.S. in Computer Science",
            "City College\t2013 - 2015",
            "Associate degree",
        ]));
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].institution, "State University");
        assert_eq!(parsed[0].period, "2015 - 2019");
        assert_eq!(parsed[0].detail, "B.S. in Computer Science");
        assert_eq!(parsed[1].institution, "City College");
    }

    #[test]
    fn test_education_trailing_unpaired_header_keeps_empty_detail() {
        let parsed = parse_education(&lines(&["Solo School   2020"]));
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].institution, "Solo School");
        assert!(parsed[0].detail.is_empty());
    }

    #[test]
    fn test_experience_single_entry_with_role_and_bullets() {
        let parsed = parse_experience(&lines(&[
            "Acme Corp   2020-2022",
            "Engineer",
            "Built X",
            "Shipped Y",
        ]));
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].organization, "Acme Corp");
        assert_eq!(parsed[0].period, "2020-2022");
        assert_eq!(parsed[0].role, "Engineer");
        assert_eq!(parsed[0].bullets, vec!["Built X", "Shipped Y"]);
    }

    #[test]
    fn test_experience_new_header_flushes_previous_entry() {
        let parsed = parse_experience(&lines(&[
            "First Org   2020",
            "Dev",
            "Did a thing",
            "Second Org   2021",
            "Lead",
        ]));
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].organization, "First Org");
        assert_eq!(parsed[0].bullets, vec!["Did a thing"]);
        assert_eq!(parsed[1].organization, "Second Org");
        assert_eq!(parsed[1].role, "Lead");
        assert!(parsed[1].bullets.is_empty());
    }

    #[test]
    fn test_experience_bullets_are_whitespace_normalized() {
        let parsed = parse_experience(&lines(&[
            "Org   2020",
            "Role",
            "Reduced\u{a0}\u{a0}latency   by 40%",
        ]));
        assert_eq!(parsed[0].bullets, vec!["Reduced latency by 40%"]);
    }

    #[test]
    fn test_experience_line_before_any_header_is_dropped() {
        let parsed = parse_experience(&lines(&["stray line", "Org   2020", "Role"]));
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].role, "Role");
    }

    #[test]
    fn test_experience_entry_without_role_and_org_is_dropped() {
        // Header whose title is empty and that never receives a role.
        let parsed = parse_experience(&lines(&["\t2020 - 2021"]));
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_experience_entry_with_org_but_no_role_is_kept() {
        let parsed = parse_experience(&lines(&["Org Only   2020"]));
        assert_eq!(parsed.len(), 1);
        assert!(parsed[0].role.is_empty());
    }

    #[test]
    fn test_experience_empty_input_yields_no_entries() {
        assert!(parse_experience(&[]).is_empty());
    }

    #[test]
    fn test_projects_context_lines_attach_to_next_titled_entry() {
        let parsed = parse_projects(&lines(&[
            "Built during a hack week.",
            "shelfdb   2023",
            "Embedded key-value store",
            "trailhead   2021",
            "Route planner",
        ]));
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].name, "shelfdb");
        assert_eq!(parsed[0].context, vec!["Built during a hack week."]);
        assert_eq!(parsed[0].bullets, vec!["Embedded key-value store"]);
        assert_eq!(parsed[1].name, "trailhead");
        assert!(parsed[1].context.is_empty());
        assert_eq!(parsed[1].bullets, vec!["Route planner"]);
    }

    #[test]
    fn test_projects_without_headers_yield_no_entries() {
        let parsed = parse_projects(&lines(&["only context", "more context"]));
        assert!(parsed.is_empty());
    }
}
