//! One-time passcodes

use jiff::SignedDuration;
use rand::Rng;

/// How long an issued passcode stays valid.
pub(crate) const OTP_TTL: SignedDuration = SignedDuration::from_secs(5 * 60);

/// Six random decimal digits.
pub(crate) fn generate_code() -> String {
    format!("{:06}", rand::thread_rng().gen_range(0..1_000_000))
}
