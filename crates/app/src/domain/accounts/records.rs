//! Account Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// User Record
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub name: String,
    pub email: String,

    /// Hex SHA-256 of the password; absent for accounts created through OTP.
    pub password_hash: Option<String>,

    pub phone: Option<String>,
    pub is_admin: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: UserUuid,
    pub name: String,
}

impl From<&UserRecord> for Session {
    fn from(user: &UserRecord) -> Self {
        Self {
            token: user.uuid.to_string(),
            user: user.uuid,
            name: user.name.clone(),
        }
    }
}

/// One-time passcode issued to a phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpRecord {
    pub phone: String,
    pub code: String,
    pub expires_at: Timestamp,
}

impl OtpRecord {
    /// Whether `code` matches and the passcode has not expired at `point_in_time`.
    #[must_use]
    pub fn accepts(&self, code: &str, point_in_time: Timestamp) -> bool {
        self.code == code && self.expires_at >= point_in_time
    }
}

#[cfg(test)]
mod tests {
    use jiff::ToSpan;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn otp_accepts_matching_unexpired_code() -> TestResult {
        let now = Timestamp::now();
        let otp = OtpRecord {
            phone: "9990001111".to_string(),
            code: "042137".to_string(),
            expires_at: now.checked_add(5.minutes())?,
        };

        assert!(otp.accepts("042137", now));
        assert!(!otp.accepts("42137", now));
        assert!(!otp.accepts("042137", now.checked_add(6.minutes())?));

        Ok(())
    }

    #[test]
    fn session_token_is_user_uuid() {
        let user = UserRecord {
            uuid: UserUuid::new(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            password_hash: None,
            phone: None,
            is_admin: false,
            is_active: true,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        };

        let session = Session::from(&user);

        assert_eq!(session.token, user.uuid.to_string());
        assert_eq!(session.user, user.uuid);
        assert_eq!(session.name, "Asha");
    }
}
