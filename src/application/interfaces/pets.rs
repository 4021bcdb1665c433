use crate::error::AppError;
use crate::model::auth::AuthKey;
use crate::model::http::ApiResponse;
use crate::model::requests::{NewPet, PetFilter};
use async_trait::async_trait;
use std::path::Path;

/// Interface for the pet service.
///
/// Every method issues exactly one request. Server side failures come back as
/// `Ok(ApiResponse)` with the matching status; `Err` is reserved for transport and
/// local I/O failures.
#[async_trait]
pub trait PetService: Send + Sync {
    /// Requests a session key for the given credentials (`GET api/key`).
    ///
    /// Credentials travel as the `email` and `password` headers and are not checked
    /// locally. On success the body holds a `key` field.
    async fn authenticate(&self, email: &str, password: &str) -> Result<ApiResponse, AppError>;

    /// Lists pets (`GET api/pets?filter=...`)
    async fn list_pets(
        &self,
        auth_key: &AuthKey,
        filter: &PetFilter,
    ) -> Result<ApiResponse, AppError>;

    /// Creates a pet with a photo (`POST api/pets`, multipart).
    ///
    /// # Errors
    /// `AppError::Io` if `photo_path` cannot be read; nothing is sent in that case.
    async fn create_pet(
        &self,
        auth_key: &AuthKey,
        pet: &NewPet,
        photo_path: &Path,
    ) -> Result<ApiResponse, AppError>;

    /// Creates a pet without a photo (`POST api/create_pet_simple`, form)
    async fn create_pet_without_photo(
        &self,
        auth_key: &AuthKey,
        pet: &NewPet,
    ) -> Result<ApiResponse, AppError>;

    /// Replaces name, type and age of a pet (`PUT api/pets/{pet_id}`, form)
    async fn update_pet(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        pet: &NewPet,
    ) -> Result<ApiResponse, AppError>;

    /// Deletes a pet (`DELETE api/pets/{pet_id}`)
    async fn delete_pet(&self, auth_key: &AuthKey, pet_id: &str)
    -> Result<ApiResponse, AppError>;

    /// Uploads a photo for an existing pet (`POST api/pets/set_photo/{pet_id}`, multipart).
    ///
    /// # Errors
    /// `AppError::Io` if `photo_path` cannot be read; nothing is sent in that case.
    async fn attach_photo(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        photo_path: &Path,
    ) -> Result<ApiResponse, AppError>;
}
