//! Resume data model and the heuristic parser that turns the raw sectioned
//! text dump into structured records. Parsing is a single pass over each
//! section and never fails: missing or malformed input degrades to empty
//! strings and lists.

pub mod contact;
pub mod entries;
pub mod handlers;
pub mod skills;
pub mod source;

use serde::Serialize;

use crate::resume::contact::ContactInfo;
use crate::resume::entries::{EducationEntry, ExperienceEntry, ProjectEntry};
use crate::resume::skills::SkillGroup;
use crate::resume::source::ResumeDocument;

/// Structured resume, built once at startup and immutable afterward.
/// Serialized field names match the original frontend JSON (camelCase).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub name: String,
    #[serde(flatten)]
    pub contact: ContactInfo,
    pub profile: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<SkillGroup>,
    pub certifications: Vec<String>,
}

/// Assembles [`ResumeData`] from a raw document.
pub fn parse(doc: &ResumeDocument) -> ResumeData {
    ResumeData {
        name: doc.name.trim().to_string(),
        contact: contact::parse_contact(&doc.contact),
        profile: entries::normalize_whitespace(&doc.sections.profile.join(" ")),
        education: entries::parse_education(&doc.sections.education),
        experience: entries::parse_experience(&doc.sections.experience),
        projects: entries::parse_projects(&doc.sections.projects),
        skills: skills::parse_skills(&doc.sections.skills),
        certifications: skills::parse_certifications(&doc.sections.certifications),
    }
}
