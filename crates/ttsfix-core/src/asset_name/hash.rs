//! URL-addressed filename derivation.

use md5::{Digest, Md5};
use uuid::Uuid;

/// Fixed extension for stored assets; only mesh/collider text is fetched.
const ASSET_EXT: &str = ".obj";

/// Derives the stable local filename for `url`: MD5 of the UTF-8 URL text,
/// formatted as a canonical UUID, plus `.obj`. Pure function of the URL string.
pub fn hashed_filename(url: &str) -> String {
    let digest = Md5::digest(url.as_bytes());
    let uuid = Uuid::from_bytes(digest.into());
    format!("{}{}", uuid, ASSET_EXT)
}
