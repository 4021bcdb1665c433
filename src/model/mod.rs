/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Session token model
pub mod auth;
/// HTTP request helper and the uniform response type
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
