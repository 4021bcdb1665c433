/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{DEFAULT_PHOTO_MIME, PHOTO_FIELD};
use crate::error::PetResult;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Selects which pets `GET api/pets` returns.
///
/// No validation happens locally: a [`PetFilter::Custom`] value is forwarded as-is
/// and the server decides what to do with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PetFilter {
    /// Every pet on the platform (`filter=`)
    #[default]
    All,
    /// Only pets owned by the caller (`filter=my_pets`)
    MyPets,
    /// Any other value, sent verbatim
    Custom(String),
}

impl PetFilter {
    /// Value of the `filter` query parameter
    pub fn as_str(&self) -> &str {
        match self {
            PetFilter::All => "",
            PetFilter::MyPets => "my_pets",
            PetFilter::Custom(value) => value,
        }
    }
}

impl From<&str> for PetFilter {
    fn from(value: &str) -> Self {
        match value {
            "" => PetFilter::All,
            "my_pets" => PetFilter::MyPets,
            other => PetFilter::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for PetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form fields shared by pet creation and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPet {
    /// Pet name
    pub name: String,
    /// Free text species/breed
    pub animal_type: String,
    /// Age, passed through as text; the server owns validation
    pub age: String,
}

impl NewPet {
    /// Builds the field set from anything string-like. `age` accepts numbers too.
    pub fn new(
        name: impl Into<String>,
        animal_type: impl Into<String>,
        age: impl ToString,
    ) -> Self {
        Self {
            name: name.into(),
            animal_type: animal_type.into(),
            age: age.to_string(),
        }
    }

    /// Fields as `(name, value)` pairs in wire order
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("animal_type", self.animal_type.clone()),
            ("age", self.age.clone()),
        ]
    }

    /// Multipart form holding the text fields only
    pub fn to_multipart(&self) -> Form {
        self.form_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value))
    }
}

/// A photo read from disk, ready to be attached to a multipart request.
///
/// The file is read completely by [`PhotoUpload::load`] and its handle released before
/// anything touches the network, so no handle outlives the call on any path.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    /// File name sent in the `Content-Disposition` of the part
    pub file_name: String,
    /// MIME type guessed from the extension
    pub mime: &'static str,
    /// File content
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    /// Reads `path` into memory.
    ///
    /// # Errors
    /// `AppError::Io` when the file is missing or unreadable.
    pub async fn load(path: impl AsRef<Path>) -> PetResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime = guess_photo_mime(path);
        debug!("Loaded photo {} ({} bytes, {})", file_name, bytes.len(), mime);
        Ok(Self {
            file_name,
            mime,
            bytes,
        })
    }

    /// Converts the photo into the `pet_photo` part
    pub fn into_part(self) -> PetResult<Part> {
        Ok(Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(self.mime)?)
    }

    /// Appends the photo to `form` under the `pet_photo` field
    pub fn attach_to(self, form: Form) -> PetResult<Form> {
        Ok(form.part(PHOTO_FIELD, self.into_part()?))
    }
}

/// Guesses an image MIME type from the file extension, defaulting to JPEG
pub fn guess_photo_mime(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => DEFAULT_PHOTO_MIME,
    }
}
