/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # PetFriends Client
//!
//! A thin asynchronous client for the PetFriends pet management REST API.
//!
//! Every endpoint of the service maps to one method of [`application::client::Client`]
//! (through the [`application::interfaces::pets::PetService`] trait). Each method sends
//! exactly one request and returns an [`model::http::ApiResponse`] carrying the numeric
//! status code and a body that is either decoded JSON or the raw response text.
//!
//! Every call outcome is appended to a plain text request log (see
//! [`application::request_log`]).
//!
//! ## Example
//!
//! ```ignore
//! use petfriends_client::prelude::*;
//!
//! let client = Client::from_env()?;
//! let response = client.authenticate("me@example.com", "secret").await?;
//! let auth_key = AuthKey::from_response(&response).expect("no key in response");
//!
//! let pets = client.list_pets(&auth_key, &PetFilter::MyPets).await?;
//! if pets.status == 200 {
//!     let list: PetList = pets.body.decode()?;
//!     println!("{} pets", list.pets.len());
//! }
//! ```

/// Application layer: client, configuration, request log and service traits
pub mod application;
/// Global constants
pub mod constants;
/// Library error type
pub mod error;
/// Data models for requests, responses and transport
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Utilities: environment helpers, identifiers and logging setup
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the current version of the library
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
