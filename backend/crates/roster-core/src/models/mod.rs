pub mod credential_record;
pub mod enriched_student;
pub mod student_account;
pub mod student_profile;
