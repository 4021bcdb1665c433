/// Default base URL of the PetFriends service
pub const DEFAULT_BASE_URL: &str = "https://petfriends.skillfactory.ru/";
/// Default path of the append-only request log
pub const DEFAULT_LOG_FILE: &str = "log.txt";
/// User agent string used in HTTP requests to identify this client to the PetFriends API
pub const USER_AGENT: &str = "petfriends-client/0.1.0";
/// Header carrying the session token on authenticated calls
pub const AUTH_KEY_HEADER: &str = "auth_key";
/// Multipart field name of an uploaded pet photo
pub const PHOTO_FIELD: &str = "pet_photo";
/// Query parameter selecting which pets are listed
pub const FILTER_PARAM: &str = "filter";
/// MIME type used for photos whose extension is not recognised
pub const DEFAULT_PHOTO_MIME: &str = "image/jpeg";
/// Length of the identifier attached to each request log entry
pub const LOG_ENTRY_ID_LEN: usize = 30;
