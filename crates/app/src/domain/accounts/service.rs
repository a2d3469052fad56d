//! Accounts service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::accounts::{
        data::{Credentials, NewRegistration, OtpVerification},
        errors::AccountsServiceError,
        otp::{OTP_TTL, generate_code},
        password::hash_password,
        records::{OtpRecord, Session, UserUuid},
        repository::{PgAccountsRepository, UserRow},
    },
};

/// Name given to accounts created through OTP without one.
pub const DEFAULT_USER_NAME: &str = "User";

#[derive(Debug, Clone)]
pub struct PgAccountsService {
    db: Db,
    repository: PgAccountsRepository,
}

impl PgAccountsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAccountsRepository::new(),
        }
    }
}

#[async_trait]
impl AccountsService for PgAccountsService {
    #[tracing::instrument(
        name = "accounts.service.register",
        skip(self, registration),
        fields(user_uuid = tracing::field::Empty),
        err
    )]
    async fn register(
        &self,
        registration: NewRegistration,
    ) -> Result<Session, AccountsServiceError> {
        let name = registration.name.trim();
        let email = registration.email.trim();

        if name.is_empty() || email.is_empty() || registration.password.is_empty() {
            return Err(AccountsServiceError::MissingRequiredData);
        }

        let password_hash = hash_password(&registration.password);

        let mut tx = self.db.begin().await?;

        let user = self
            .repository
            .create_user(
                &mut tx,
                UserRow {
                    uuid: UserUuid::new(),
                    name,
                    email,
                    password_hash: Some(&password_hash),
                    phone: registration.phone.as_deref().map(str::trim),
                },
            )
            .await?;

        tx.commit().await?;

        tracing::Span::current().record("user_uuid", tracing::field::display(user.uuid));

        info!(user_uuid = %user.uuid, "registered user");

        Ok(Session::from(&user))
    }

    async fn login(&self, credentials: Credentials) -> Result<Session, AccountsServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self
            .repository
            .find_user_by_email(&mut tx, credentials.email.trim())
            .await?;

        tx.commit().await?;

        let password_hash = hash_password(&credentials.password);

        user.filter(|user| {
            user.is_active && user.password_hash.as_deref() == Some(password_hash.as_str())
        })
        .map(|user| Session::from(&user))
        .ok_or(AccountsServiceError::InvalidCredentials)
    }

    #[tracing::instrument(name = "accounts.service.request_otp", skip(self, phone), err)]
    async fn request_otp(
        &self,
        phone: &str,
        point_in_time: Timestamp,
    ) -> Result<OtpRecord, AccountsServiceError> {
        let phone = phone.trim();

        if phone.is_empty() {
            return Err(AccountsServiceError::MissingRequiredData);
        }

        let expires_at = point_in_time
            .checked_add(OTP_TTL)
            .map_err(|_jiff| AccountsServiceError::InvalidData)?;

        let mut tx = self.db.begin().await?;

        let otp = self
            .repository
            .upsert_otp(&mut tx, phone, &generate_code(), expires_at)
            .await?;

        tx.commit().await?;

        info!(expires_at = %otp.expires_at, "issued otp");

        Ok(otp)
    }

    #[tracing::instrument(
        name = "accounts.service.verify_otp",
        skip(self, verification),
        fields(user_uuid = tracing::field::Empty, created = tracing::field::Empty),
        err
    )]
    async fn verify_otp(
        &self,
        verification: OtpVerification,
        point_in_time: Timestamp,
    ) -> Result<Session, AccountsServiceError> {
        let phone = verification.phone.trim();

        let mut tx = self.db.begin().await?;

        let accepted = self
            .repository
            .find_otp(&mut tx, phone)
            .await?
            .is_some_and(|otp| otp.accepts(verification.code.trim(), point_in_time));

        if !accepted {
            return Err(AccountsServiceError::InvalidOtp);
        }

        let existing = self.repository.find_user_by_phone(&mut tx, phone).await?;
        let created = existing.is_none();

        let user = match existing {
            Some(user) => user,
            None => {
                let name = verification
                    .name
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .unwrap_or(DEFAULT_USER_NAME);

                let email = verification
                    .email
                    .as_deref()
                    .map(str::trim)
                    .filter(|email| !email.is_empty())
                    .map_or_else(|| format!("{phone}@example.com"), str::to_string);

                self.repository
                    .create_user(
                        &mut tx,
                        UserRow {
                            uuid: UserUuid::new(),
                            name,
                            email: &email,
                            password_hash: None,
                            phone: Some(phone),
                        },
                    )
                    .await?
            }
        };

        self.repository.delete_otp(&mut tx, phone).await?;

        tx.commit().await?;

        let span = tracing::Span::current();

        span.record("user_uuid", tracing::field::display(user.uuid));
        span.record("created", created);

        info!(user_uuid = %user.uuid, created, "verified otp");

        Ok(Session::from(&user))
    }
}

#[automock]
#[async_trait]
pub trait AccountsService: Send + Sync {
    /// Creates an email/password account and signs it in.
    async fn register(
        &self,
        registration: NewRegistration,
    ) -> Result<Session, AccountsServiceError>;

    /// Signs in with email and password.
    async fn login(&self, credentials: Credentials) -> Result<Session, AccountsServiceError>;

    /// Issues a six digit passcode for `phone`, replacing any earlier one.
    async fn request_otp(
        &self,
        phone: &str,
        point_in_time: Timestamp,
    ) -> Result<OtpRecord, AccountsServiceError>;

    /// Consumes a passcode and signs in, creating the account on first use of the phone.
    async fn verify_otp(
        &self,
        verification: OtpVerification,
        point_in_time: Timestamp,
    ) -> Result<Session, AccountsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::ToSpan;
    use testresult::TestResult;
    use zeroize::Zeroizing;

    use crate::test::TestContext;

    use super::*;

    fn registration(email: &str, password: &str) -> NewRegistration {
        NewRegistration {
            name: "Asha".to_string(),
            email: email.to_string(),
            password: Zeroizing::new(password.to_string()),
            phone: None,
        }
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: Zeroizing::new(password.to_string()),
        }
    }

    fn verification(phone: &str, code: &str) -> OtpVerification {
        OtpVerification {
            phone: phone.to_string(),
            code: code.to_string(),
            name: None,
            email: None,
        }
    }

    #[tokio::test]
    async fn register_then_login_returns_same_user() -> TestResult {
        let ctx = TestContext::new().await;

        let registered = ctx
            .accounts
            .register(registration("asha@example.com", "secret"))
            .await?;

        let session = ctx
            .accounts
            .login(credentials("asha@example.com", "secret"))
            .await?;

        assert_eq!(registered.user, session.user);
        assert_eq!(session.token, session.user.to_string());
        assert_eq!(session.name, "Asha");

        Ok(())
    }

    #[tokio::test]
    async fn register_duplicate_email_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.accounts
            .register(registration("asha@example.com", "secret"))
            .await?;

        let result = ctx
            .accounts
            .register(registration("asha@example.com", "other"))
            .await;

        assert!(
            matches!(result, Err(AccountsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn register_blank_password_returns_missing_required_data() {
        let ctx = TestContext::new().await;

        let result = ctx
            .accounts
            .register(registration("asha@example.com", ""))
            .await;

        assert!(
            matches!(result, Err(AccountsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn login_wrong_password_returns_invalid_credentials() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.accounts
            .register(registration("asha@example.com", "secret"))
            .await?;

        let wrong_password = ctx
            .accounts
            .login(credentials("asha@example.com", "Secret"))
            .await;

        let unknown_email = ctx
            .accounts
            .login(credentials("nobody@example.com", "secret"))
            .await;

        assert!(
            matches!(wrong_password, Err(AccountsServiceError::InvalidCredentials)),
            "expected InvalidCredentials, got {wrong_password:?}"
        );
        assert!(
            matches!(unknown_email, Err(AccountsServiceError::InvalidCredentials)),
            "expected InvalidCredentials, got {unknown_email:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn verify_otp_creates_user_once_and_consumes_code() -> TestResult {
        let ctx = TestContext::new().await;
        let now = Timestamp::from_second(1_800_000_000)?;

        let otp = ctx.accounts.request_otp("9990001111", now).await?;

        assert_eq!(otp.code.len(), 6);
        assert_eq!(otp.expires_at, now.checked_add(5.minutes())?);

        let first = ctx
            .accounts
            .verify_otp(verification("9990001111", &otp.code), now)
            .await?;

        assert_eq!(first.name, DEFAULT_USER_NAME);

        let reused = ctx
            .accounts
            .verify_otp(verification("9990001111", &otp.code), now)
            .await;

        assert!(
            matches!(reused, Err(AccountsServiceError::InvalidOtp)),
            "expected InvalidOtp on reuse, got {reused:?}"
        );

        let again = ctx.accounts.request_otp("9990001111", now).await?;

        let second = ctx
            .accounts
            .verify_otp(verification("9990001111", &again.code), now)
            .await?;

        assert_eq!(first.user, second.user, "phone should map to one account");

        Ok(())
    }

    #[tokio::test]
    async fn verify_otp_wrong_or_expired_code_returns_invalid_otp() -> TestResult {
        let ctx = TestContext::new().await;
        let now = Timestamp::now();

        let otp = ctx.accounts.request_otp("9990002222", now).await?;
        let wrong_code = if otp.code == "000000" { "111111" } else { "000000" };

        let wrong = ctx
            .accounts
            .verify_otp(verification("9990002222", wrong_code), now)
            .await;

        let expired = ctx
            .accounts
            .verify_otp(
                verification("9990002222", &otp.code),
                now.checked_add(10.minutes())?,
            )
            .await;

        let unknown = ctx
            .accounts
            .verify_otp(verification("9990003333", &otp.code), now)
            .await;

        for result in [wrong, expired, unknown] {
            assert!(
                matches!(result, Err(AccountsServiceError::InvalidOtp)),
                "expected InvalidOtp, got {result:?}"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn verify_otp_uses_supplied_name_and_email() -> TestResult {
        let ctx = TestContext::new().await;
        let now = Timestamp::now();

        let otp = ctx.accounts.request_otp("9990004444", now).await?;

        let session = ctx
            .accounts
            .verify_otp(
                OtpVerification {
                    name: Some("Ravi".to_string()),
                    email: Some("ravi@example.com".to_string()),
                    ..verification("9990004444", &otp.code)
                },
                now,
            )
            .await?;

        assert_eq!(session.name, "Ravi");

        let duplicate = ctx
            .accounts
            .register(registration("ravi@example.com", "secret"))
            .await;

        assert!(
            matches!(duplicate, Err(AccountsServiceError::AlreadyExists)),
            "expected the OTP account to own the email, got {duplicate:?}"
        );

        Ok(())
    }
}
