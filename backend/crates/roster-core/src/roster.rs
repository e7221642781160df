//! Roster aggregation: join accounts with credentials and collect skills.

use crate::models::credential_record::CredentialRecord;
use crate::models::enriched_student::EnrichedStudent;
use crate::models::student_account::StudentAccount;
use crate::skills::normalize_skill_field;

use std::collections::{BTreeSet, HashMap};

use uuid::Uuid;

/// Output of roster aggregation: every fetched student enriched with its
/// skill tokens, plus the global skill vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterView {
    pub students: Vec<EnrichedStudent>,
    /// Lexicographically sorted union of normalized tokens across all
    /// credentials, independent of ownership. No duplicates, no empty tokens.
    pub available_skills: Vec<String>,
}

/// Build the roster view from the full account list and the credential
/// records owned by those accounts.
///
/// Every input account appears exactly once in the output, in input order,
/// even when it owns zero credentials (empty skill list). Credentials whose
/// owner is not among the fetched accounts still contribute their tokens to
/// the global vocabulary.
pub fn aggregate_roster(
    accounts: Vec<StudentAccount>,
    credentials: &[CredentialRecord],
) -> RosterView {
    let mut skills_by_student: HashMap<Uuid, BTreeSet<String>> = accounts
        .iter()
        .map(|account| (account.id, BTreeSet::new()))
        .collect();

    let mut vocabulary: BTreeSet<String> = BTreeSet::new();

    for credential in credentials {
        let tokens = normalize_skill_field(credential.skills_acquired.as_deref());

        for token in tokens {
            vocabulary.insert(token.clone());

            if let Some(set) = skills_by_student.get_mut(&credential.student_id) {
                set.insert(token);
            }
        }
    }

    let students = accounts
        .into_iter()
        .map(|account| {
            let skills = skills_by_student
                .remove(&account.id)
                .unwrap_or_default()
                .into_iter()
                // The normalizer never emits empty tokens; strip any residual
                // defensively so presentation never sees a blank chip.
                .filter(|skill| !skill.is_empty())
                .collect();

            EnrichedStudent {
                id: account.id,
                name: account.name,
                email: account.email,
                phone: account.phone,
                created_at: account.created_at,
                skills,
            }
        })
        .collect();

    RosterView {
        students,
        available_skills: vocabulary.into_iter().collect(),
    }
}
