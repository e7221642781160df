use roster_core::RosterFilter;

use serde::Deserialize;

/// Query parameters for listing students
#[derive(Debug, Deserialize, Default)]
pub struct ListStudentsQuery {
    /// Case-insensitive substring matched against name, email, phone
    pub search: Option<String>,
    /// Comma-separated skill tokens the student must ALL hold (exact match)
    pub skills: Option<String>,
}

impl ListStudentsQuery {
    /// Build the pure roster predicate from the raw query parameters.
    /// Absent parameters yield the match-everything filter.
    pub fn filter(&self) -> RosterFilter {
        let selected_skills = self
            .skills
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        RosterFilter::new(self.search.clone().unwrap_or_default(), selected_skills)
    }
}
