//! Pure filter predicate over the aggregated roster.

use crate::models::enriched_student::EnrichedStudent;

/// Search/filter state for the roster view, passed explicitly instead of
/// living in presentation state. Must be re-evaluated on every change to the
/// search term, the skill selection, or the underlying roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterFilter {
    /// Free-text term matched case-insensitively against name, email, phone.
    pub search_term: String,
    /// Skill tokens the student must ALL hold. Matched verbatim against the
    /// student's normalized skill list; matching stays case-sensitive on
    /// purpose (source behavior, flagged for product-owner review).
    pub selected_skills: Vec<String>,
}

impl RosterFilter {
    pub fn new(search_term: impl Into<String>, selected_skills: Vec<String>) -> Self {
        Self {
            search_term: search_term.into(),
            selected_skills,
        }
    }

    /// A filter that matches every student.
    pub fn match_all() -> Self {
        Self::default()
    }

    /// Decide whether a student matches the current search/filter state.
    /// Pure, total, no failure modes.
    pub fn matches(&self, student: &EnrichedStudent) -> bool {
        self.matches_text(student) && self.matches_skills(student)
    }

    fn matches_text(&self, student: &EnrichedStudent) -> bool {
        let term = self.search_term.to_lowercase();
        if term.is_empty() {
            return true;
        }

        // An absent phone never satisfies a non-empty term.
        student.name.to_lowercase().contains(&term)
            || student.email.to_lowercase().contains(&term)
            || student
                .phone
                .as_ref()
                .is_some_and(|phone| phone.to_lowercase().contains(&term))
    }

    fn matches_skills(&self, student: &EnrichedStudent) -> bool {
        self.selected_skills
            .iter()
            .all(|skill| student.skills.contains(skill))
    }
}
