//! Account Data

use std::fmt;

use zeroize::Zeroizing;

/// Email/password registration.
#[derive(Clone)]
pub struct NewRegistration {
    pub name: String,
    pub email: String,
    pub password: Zeroizing<String>,
    pub phone: Option<String>,
}

impl fmt::Debug for NewRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewRegistration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .finish_non_exhaustive()
    }
}

/// Email/password sign-in.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: Zeroizing<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Phone/OTP sign-in. `name` and `email` are only used when the phone is new.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpVerification {
    pub phone: String,
    pub code: String,
    pub name: Option<String>,
    pub email: Option<String>,
}
