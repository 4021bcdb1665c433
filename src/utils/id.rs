use crate::constants::LOG_ENTRY_ID_LEN;

const ID_ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Generates an identifier of `LOG_ENTRY_ID_LEN` characters drawn from `A-Z0-9`.
///
/// Used to tag request log entries so a single call can be found in a long log.
///
/// # Examples
/// ```
/// use petfriends_client::utils::id::get_id;
/// let id = get_id();
/// assert_eq!(id.len(), 30);
/// ```
pub fn get_id() -> String {
    nanoid::nanoid!(LOG_ENTRY_ID_LEN, &ID_ALPHABET)
}
