//! Password hashing

use sha2::{Digest, Sha256};

pub(crate) fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}
