/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # PetFriends Client Prelude
//!
//! Brings the commonly used types and traits into scope in one line.
//!
//! ## Usage
//!
//! ```rust
//! use petfriends_client::prelude::*;
//!
//! let filter = PetFilter::MyPets;
//! assert_eq!(filter.as_str(), "my_pets");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the PetFriends API client
pub use crate::application::config::{Config, Credentials, RequestLogConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, PetResult};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Client implementation
pub use crate::application::client::Client;

/// Pet service trait
pub use crate::application::interfaces::pets::PetService;

/// Request log
pub use crate::application::request_log::{LogEntry, LogOutcome, LogPolicy, RequestLog};

// ============================================================================
// MODELS
// ============================================================================

/// Session token
pub use crate::model::auth::AuthKey;

/// Uniform response and transport helpers
pub use crate::model::http::{ApiResponse, RequestPayload, ResponseBody, make_http_request};

/// Request models
pub use crate::model::requests::{NewPet, PetFilter, PhotoUpload};

/// Response models
pub use crate::model::responses::{Pet, PetList};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Identifier generation
pub use crate::utils::id::get_id;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::path::Path;
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest's method type
pub use reqwest::Method;
