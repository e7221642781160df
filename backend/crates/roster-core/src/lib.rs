pub mod fetch;
pub mod filter;
pub mod models;
pub mod roster;
pub mod skills;

pub use fetch::FetchPhase;
pub use filter::RosterFilter;
pub use models::credential_record::CredentialRecord;
pub use models::enriched_student::EnrichedStudent;
pub use models::student_account::{STUDENT_ROLE, StudentAccount};
pub use models::student_profile::StudentProfile;
pub use roster::{RosterView, aggregate_roster};
pub use skills::normalize_skill_field;
