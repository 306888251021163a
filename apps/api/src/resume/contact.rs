//! Contact line parser — recovers labeled fields from the single
//! pipe-delimited contact line and canonicalizes profile handles into URLs.

use serde::Serialize;

const LINKEDIN_BASE: &str = "https://www.linkedin.com/in/";
const GITHUB_BASE: &str = "https://github.com/";

/// Contact fields recovered from the contact line. Missing labels leave the
/// corresponding field empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    /// LinkedIn handle as written in the source line.
    pub linked_in: String,
    /// Canonical LinkedIn profile URL derived from the handle.
    pub linked_in_url: String,
    /// Canonical GitHub profile URL.
    pub github: String,
}

/// Splits the contact line on `|`, then each segment on its first `:`.
/// Trimming every segment also absorbs the known source glitch of a missing
/// space before the GitHub label. Unrecognized labels are skipped; nothing
/// here ever fails.
pub fn parse_contact(line: &str) -> ContactInfo {
    let mut info = ContactInfo::default();

    for segment in line.split('|') {
        let Some((label, value)) = segment.trim().split_once(':') else {
            continue;
        };
        let value = value.trim();

        match label.trim().to_lowercase().as_str() {
            "email" => info.email = value.to_string(),
            "contact number" => info.phone = value.to_string(),
            "linkedin" => {
                info.linked_in = value.to_string();
                info.linked_in_url = canonical_url(value, LINKEDIN_BASE);
            }
            "github" => {
                info.github = canonical_url(value.trim_start_matches('@'), GITHUB_BASE);
            }
            _ => {}
        }
    }

    info
}

/// Already-absolute URLs pass through; bare handles are joined to `base`.
fn canonical_url(value: &str, base: &str) -> String {
    if value.starts_with("http://") || value.starts_with("https://") {
        value.to_string()
    } else {
        format!("{base}{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovers_all_four_fields_including_glitched_github_label() {
        let info = parse_contact(
            "Email: a@b.com | Contact Number: 123 | LinkedIn: jiashu-huang |GitHub: @joshh",
        );
        assert_eq!(info.email, "a@b.com");
        assert_eq!(info.phone, "123");
        assert_eq!(info.linked_in, "jiashu-huang");
        assert_eq!(info.linked_in_url, "https://www.linkedin.com/in/jiashu-huang");
        assert_eq!(info.github, "https://github.com/joshh");
    }

    #[test]
    fn test_absolute_urls_pass_through_unchanged() {
        let info = parse_contact(
            "LinkedIn: https://www.linkedin.com/in/someone | GitHub: https://github.com/someone",
        );
        assert_eq!(info.linked_in_url, "https://www.linkedin.com/in/someone");
        assert_eq!(info.github, "https://github.com/someone");
    }

    #[test]
    fn test_labels_match_case_insensitively() {
        let info = parse_contact("EMAIL: x@y.z | contact number: 555");
        assert_eq!(info.email, "x@y.z");
        assert_eq!(info.phone, "555");
    }

    #[test]
    fn test_github_handle_without_at_sign() {
        let info = parse_contact("GitHub: plainuser");
        assert_eq!(info.github, "https://github.com/plainuser");
    }

    #[test]
    fn test_missing_labels_degrade_to_empty_fields() {
        let info = parse_contact("Email: only@here.com");
        assert_eq!(info.email, "only@here.com");
        assert!(info.phone.is_empty());
        assert!(info.linked_in.is_empty());
        assert!(info.linked_in_url.is_empty());
        assert!(info.github.is_empty());
    }

    #[test]
    fn test_empty_line_yields_default() {
        assert_eq!(parse_contact(""), ContactInfo::default());
    }

    #[test]
    fn test_segment_without_colon_is_skipped() {
        let info = parse_contact("just text | Email: a@b.com");
        assert_eq!(info.email, "a@b.com");
    }
}
