//! Verification code entity for account confirmation challenges.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vc_shared::time::DateTimeProvider;

use crate::errors::{VerificationError, VerificationResult};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// Rule deciding whether a code is eligible for a successful match
///
/// Two predicates exist because the carried-over activity check requires a
/// verification timestamp to already be present, which makes a first-time
/// `verify` on a fresh code fail unconditionally. That behavior is kept as
/// the default to stay compatible with systems built against it; changing
/// [`VerificationCode::DEFAULT_ACTIVATION_RULE`] to `RequireUnverified` is
/// the one-line switch to the commonly intended rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationRule {
    /// Active only when already verified AND the expiry window is still open.
    /// A fresh code never passes this gate, so first-time verification always
    /// fails with `InvalidVerificationCode`.
    RequirePriorVerification,

    /// Active while not yet verified AND the expiry window is still open.
    RequireUnverified,
}

/// Explicit lifecycle state of a verification code
///
/// Computed lazily from the stored timestamps; expiry is a property, not an
/// event, so a code moves to `Expired` simply by being observed after its
/// window closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeState {
    /// Issued, not yet consumed, expiry window still open
    Pending,

    /// Successfully verified or manually overridden (terminal for `verify`)
    Verified,

    /// Expiry window closed without a successful verification
    Expired,
}

/// Verification code entity for short-lived, single-use challenges
///
/// Created only through [`VerificationCode::new`]; the code value is never
/// reassigned after construction. A successful `verify` consumes the code by
/// clearing its expiry, so it can be matched at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// The 6-character uppercase hexadecimal code
    code: String,

    /// Timestamp when the code expires; cleared on successful verification
    expires_at_utc: Option<DateTime<Utc>>,

    /// Timestamp when the code was successfully verified
    verified_at_utc: Option<DateTime<Utc>>,
}

impl VerificationCode {
    /// Activity predicate used by [`Self::verify`]
    pub const DEFAULT_ACTIVATION_RULE: ActivationRule = ActivationRule::RequirePriorVerification;

    /// Creates a new verification code with a random 6-character code
    ///
    /// The code is a fixed-length prefix of a freshly generated UUID rendered
    /// in dashless hexadecimal, uppercased. Expiry is the provider's current
    /// instant plus [`DEFAULT_EXPIRATION_MINUTES`].
    ///
    /// # Arguments
    ///
    /// * `time` - Time source supplying the current UTC instant
    ///
    /// # Returns
    ///
    /// A new `VerificationCode` instance that has not been verified
    pub fn new(time: &dyn DateTimeProvider) -> Self {
        let code = Self::generate_code();
        let expires_at_utc = time.utc_now() + Duration::minutes(DEFAULT_EXPIRATION_MINUTES);
        Self::from_parts(code, expires_at_utc)
    }

    /// Pure assignment constructor; all derivation happens in the factory
    fn from_parts(code: String, expires_at_utc: DateTime<Utc>) -> Self {
        Self {
            code,
            expires_at_utc: Some(expires_at_utc),
            verified_at_utc: None,
        }
    }

    /// Generates a random 6-character uppercase hexadecimal code
    fn generate_code() -> String {
        let token = Uuid::new_v4().simple().to_string();
        token[..CODE_LENGTH].to_ascii_uppercase()
    }

    /// The code value
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Expiry instant, or `None` once the code has been consumed
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        self.expires_at_utc
    }

    /// Instant of successful verification, or `None` while unverified
    pub fn verified_at_utc(&self) -> Option<DateTime<Utc>> {
        self.verified_at_utc
    }

    /// Checks whether the code is active at `now` under the default rule
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.is_active_under(Self::DEFAULT_ACTIVATION_RULE, now)
    }

    /// Checks whether the code is active at `now` under an explicit rule
    pub fn is_active_under(&self, rule: ActivationRule, now: DateTime<Utc>) -> bool {
        let window_open = matches!(self.expires_at_utc, Some(expires_at) if expires_at > now);
        match rule {
            ActivationRule::RequirePriorVerification => {
                self.verified_at_utc.is_some() && window_open
            }
            ActivationRule::RequireUnverified => self.verified_at_utc.is_none() && window_open,
        }
    }

    /// Explicit lifecycle state at `now`
    pub fn state(&self, now: DateTime<Utc>) -> CodeState {
        if self.verified_at_utc.is_some() {
            return CodeState::Verified;
        }
        match self.expires_at_utc {
            Some(expires_at) if expires_at > now => CodeState::Pending,
            _ => CodeState::Expired,
        }
    }

    /// Validates a candidate code and consumes this code on success
    ///
    /// Preconditions are checked in order; every failure raises the same
    /// [`VerificationError::InvalidVerificationCode`]:
    ///
    /// 1. candidate is non-empty
    /// 2. candidate is not whitespace-only
    /// 3. candidate is exactly [`CODE_LENGTH`] characters
    /// 4. candidate matches the code case-insensitively
    /// 5. the code is active under [`Self::DEFAULT_ACTIVATION_RULE`]
    /// 6. candidate matches the code case-sensitively
    ///
    /// On success the verification timestamp is set and the expiry is
    /// cleared, so a second call with the same candidate fails.
    ///
    /// # Arguments
    ///
    /// * `candidate` - The code submitted by the user
    /// * `time` - Time source supplying the current UTC instant
    pub fn verify(&mut self, candidate: &str, time: &dyn DateTimeProvider) -> VerificationResult<()> {
        self.verify_under(candidate, Self::DEFAULT_ACTIVATION_RULE, time)
    }

    /// Same checks as [`Self::verify`] with an explicit activation rule
    pub fn verify_under(
        &mut self,
        candidate: &str,
        rule: ActivationRule,
        time: &dyn DateTimeProvider,
    ) -> VerificationResult<()> {
        if candidate.is_empty() {
            return Err(VerificationError::InvalidVerificationCode);
        }
        if candidate.trim().is_empty() {
            return Err(VerificationError::InvalidVerificationCode);
        }
        if candidate.chars().count() != CODE_LENGTH {
            return Err(VerificationError::InvalidVerificationCode);
        }
        if !candidate.eq_ignore_ascii_case(&self.code) {
            return Err(VerificationError::InvalidVerificationCode);
        }

        let now = time.utc_now();
        if !self.is_active_under(rule, now) {
            return Err(VerificationError::InvalidVerificationCode);
        }
        if candidate != self.code {
            return Err(VerificationError::InvalidVerificationCode);
        }

        self.verified_at_utc = Some(now);
        self.expires_at_utc = None;

        tracing::debug!(
            event = "code_verified",
            verified_at = %now,
            "Verification code accepted and consumed"
        );

        Ok(())
    }

    /// Administrative override: records a verification timestamp
    ///
    /// Bypasses every check in [`Self::verify`] and runs regardless of prior
    /// state or expiry. Leaves the expiry untouched.
    pub fn mark_verified(&mut self, time: &dyn DateTimeProvider) {
        let now = time.utc_now();
        self.verified_at_utc = Some(now);

        tracing::debug!(
            event = "code_marked_verified",
            verified_at = %now,
            "Verification code manually marked as verified"
        );
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl AsRef<str> for VerificationCode {
    fn as_ref(&self) -> &str {
        &self.code
    }
}
