/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Client for the PetFriends API
//!
//! One method per endpoint, each sending exactly one request. Every outcome goes
//! through the [`RequestLog`] before it is returned.
//!
//! # Example
//! ```ignore
//! use petfriends_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let response = client.authenticate_with(&client.config().credentials).await?;
//! let auth_key = AuthKey::from_response(&response).expect("no key");
//!
//! let pet = NewPet::new("Barsik", "cat", 3);
//! let created = client.create_pet(&auth_key, &pet, Path::new("images/cat1.jpg")).await?;
//! ```

use crate::application::config::{Config, Credentials};
use crate::application::interfaces::pets::PetService;
use crate::application::request_log::RequestLog;
use crate::constants::{AUTH_KEY_HEADER, FILTER_PARAM, USER_AGENT};
use crate::error::{AppError, PetResult};
use crate::model::auth::AuthKey;
use crate::model::http::{ApiResponse, RequestPayload, make_http_request};
use crate::model::requests::{NewPet, PetFilter, PhotoUpload};
use async_trait::async_trait;
use reqwest::{Client as HttpInternalClient, Method, Url};
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

const KEY_PATH: &str = "api/key";
const PETS_PATH: &str = "api/pets";
const CREATE_PET_SIMPLE_PATH: &str = "api/create_pet_simple";
const SET_PHOTO_PATH: &str = "api/pets/set_photo";

/// Client for the PetFriends API
pub struct Client {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    request_log: RequestLog,
}

impl Client {
    /// Creates a new client
    ///
    /// # Arguments
    /// * `config` - Base URL, credentials and request log settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the base URL is not a valid URL or the HTTP client cannot be built
    pub fn new(config: Config) -> PetResult<Self> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Self::with_http_client(config, http_client)
    }

    /// Creates a client from the environment configuration (see [`Config::new`])
    pub fn from_env() -> PetResult<Self> {
        Self::new(Config::new())
    }

    /// Creates a client on top of an existing `reqwest::Client`
    pub fn with_http_client(config: Config, http_client: HttpInternalClient) -> PetResult<Self> {
        Url::parse(&config.rest_api.base_url).map_err(|e| {
            AppError::InvalidInput(format!(
                "invalid base url {}: {e}",
                config.rest_api.base_url
            ))
        })?;

        let request_log = config.request_log.build();
        debug!(
            "Client for {} logging to {} ({:?})",
            config.rest_api.base_url,
            request_log.path().display(),
            request_log.policy()
        );

        Ok(Self {
            http_client,
            config: Arc::new(config),
            request_log,
        })
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the request log handle
    pub fn request_log(&self) -> &RequestLog {
        &self.request_log
    }

    /// Authenticates with a credentials pair
    pub async fn authenticate_with(&self, credentials: &Credentials) -> PetResult<ApiResponse> {
        self.authenticate(&credentials.email, &credentials.password)
            .await
    }

    fn url(&self, path: &str) -> String {
        let base = self.config.rest_api.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Runs `work` and hands its outcome to the request log
    async fn logged<F>(&self, method: Method, path: &str, work: F) -> PetResult<ApiResponse>
    where
        F: Future<Output = PetResult<ApiResponse>>,
    {
        let result = work.await;
        self.request_log.observe(&method, path, result).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        auth_key: &AuthKey,
        payload: RequestPayload,
    ) -> PetResult<ApiResponse> {
        let url = self.url(path);
        let headers = vec![(AUTH_KEY_HEADER, auth_key.as_str())];
        make_http_request(&self.http_client, method, &url, headers, payload).await
    }
}

#[async_trait]
impl PetService for Client {
    async fn authenticate(&self, email: &str, password: &str) -> PetResult<ApiResponse> {
        info!("Requesting api key for {}", email);
        self.logged(Method::GET, KEY_PATH, async {
            let url = self.url(KEY_PATH);
            let headers = vec![("email", email), ("password", password)];
            make_http_request(
                &self.http_client,
                Method::GET,
                &url,
                headers,
                RequestPayload::Empty,
            )
            .await
        })
        .await
    }

    async fn list_pets(&self, auth_key: &AuthKey, filter: &PetFilter) -> PetResult<ApiResponse> {
        info!("Listing pets with filter '{}'", filter);
        let query = vec![(FILTER_PARAM, filter.as_str().to_string())];
        self.logged(
            Method::GET,
            PETS_PATH,
            self.send(Method::GET, PETS_PATH, auth_key, RequestPayload::Query(query)),
        )
        .await
    }

    async fn create_pet(
        &self,
        auth_key: &AuthKey,
        pet: &NewPet,
        photo_path: &Path,
    ) -> PetResult<ApiResponse> {
        info!("Creating pet {} with photo {}", pet.name, photo_path.display());
        self.logged(Method::POST, PETS_PATH, async {
            let photo = PhotoUpload::load(photo_path).await?;
            let form = photo.attach_to(pet.to_multipart())?;
            self.send(
                Method::POST,
                PETS_PATH,
                auth_key,
                RequestPayload::Multipart(form),
            )
            .await
        })
        .await
    }

    async fn create_pet_without_photo(
        &self,
        auth_key: &AuthKey,
        pet: &NewPet,
    ) -> PetResult<ApiResponse> {
        info!("Creating pet {} without photo", pet.name);
        self.logged(
            Method::POST,
            CREATE_PET_SIMPLE_PATH,
            self.send(
                Method::POST,
                CREATE_PET_SIMPLE_PATH,
                auth_key,
                RequestPayload::Form(pet.form_fields()),
            ),
        )
        .await
    }

    async fn update_pet(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        pet: &NewPet,
    ) -> PetResult<ApiResponse> {
        info!("Updating pet {}", pet_id);
        let path = format!("{PETS_PATH}/{pet_id}");
        self.logged(
            Method::PUT,
            &path,
            self.send(
                Method::PUT,
                &path,
                auth_key,
                RequestPayload::Form(pet.form_fields()),
            ),
        )
        .await
    }

    async fn delete_pet(&self, auth_key: &AuthKey, pet_id: &str) -> PetResult<ApiResponse> {
        info!("Deleting pet {}", pet_id);
        let path = format!("{PETS_PATH}/{pet_id}");
        self.logged(
            Method::DELETE,
            &path,
            self.send(Method::DELETE, &path, auth_key, RequestPayload::Empty),
        )
        .await
    }

    async fn attach_photo(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        photo_path: &Path,
    ) -> PetResult<ApiResponse> {
        info!("Attaching photo {} to pet {}", photo_path.display(), pet_id);
        let path = format!("{SET_PHOTO_PATH}/{pet_id}");
        self.logged(Method::POST, &path, async {
            let photo = PhotoUpload::load(photo_path).await?;
            let form = photo.attach_to(reqwest::multipart::Form::new())?;
            self.send(Method::POST, &path, auth_key, RequestPayload::Multipart(form))
                .await
        })
        .await
    }
}
