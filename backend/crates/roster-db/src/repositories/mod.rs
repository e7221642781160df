pub mod account_repository;
pub mod credential_repository;
