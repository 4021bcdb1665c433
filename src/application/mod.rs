/// PetFriends API client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Append-only request log
pub mod request_log;
