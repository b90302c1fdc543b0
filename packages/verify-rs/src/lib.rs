//! Mocked phone-verification backend.
//!
//! The production service does not exist yet; onboarding flows develop
//! against [`MockVerificationService`], which honors the contract a real
//! backend must satisfy: every call resolves or rejects exactly once, after
//! a fixed delay, with no partial results and no ordering between concurrent
//! calls.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

pub mod models;

use crate::models::{ResendResponse, SendCodeResponse, VerifyCodeResponse};

/// Sending the code failed.
#[derive(Debug, thiserror::Error)]
#[error("Failed to send verification code")]
pub struct SendError;

/// The submitted code did not match.
#[derive(Debug, thiserror::Error)]
#[error("Invalid verification code. Try {hint}")]
pub struct InvalidCodeError {
    /// The code the backend accepts; surfaced so testers can recover.
    pub hint: String,
}

/// Resending the code failed.
#[derive(Debug, thiserror::Error)]
#[error("Failed to resend verification code")]
pub struct ResendError;

/// Contract the onboarding flow depends on.
#[async_trait]
pub trait VerificationService: Send + Sync {
    async fn send_code(&self, phone_number: &str) -> Result<SendCodeResponse, SendError>;

    async fn verify_code(
        &self,
        verification_id: &str,
        code: &str,
    ) -> Result<VerifyCodeResponse, InvalidCodeError>;

    async fn resend_code(&self, phone_number: &str) -> Result<ResendResponse, ResendError>;
}

/// Tuning knobs for the mock.
#[derive(Debug, Clone)]
pub struct MockOptions {
    /// Fixed delay applied before every outcome.
    pub latency: Duration,
    /// Probability in `[0, 1]` that `send_code` fails.
    pub send_failure_rate: f32,
    /// The one code `verify_code` accepts.
    pub accepted_code: String,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(1000),
            send_failure_rate: 0.1,
            accepted_code: "123456".to_string(),
        }
    }
}

/// Stand-in verification backend with canned responses.
#[derive(Debug, Clone, Default)]
pub struct MockVerificationService {
    options: MockOptions,
}

impl MockVerificationService {
    pub fn new(options: MockOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl VerificationService for MockVerificationService {
    async fn send_code(&self, phone_number: &str) -> Result<SendCodeResponse, SendError> {
        tokio::time::sleep(self.options.latency).await;
        info!("Sending code to: {}", phone_number);
        if fastrand::f32() < self.options.send_failure_rate {
            return Err(SendError);
        }
        Ok(SendCodeResponse {
            verification_id: format!("mock-verification-id-{}", Utc::now().timestamp_millis()),
            message: "Verification code sent successfully".to_string(),
        })
    }

    async fn verify_code(
        &self,
        verification_id: &str,
        code: &str,
    ) -> Result<VerifyCodeResponse, InvalidCodeError> {
        tokio::time::sleep(self.options.latency).await;
        info!("OTP: {} VerificationID: {}", code, verification_id);
        if code != self.options.accepted_code {
            return Err(InvalidCodeError {
                hint: self.options.accepted_code.clone(),
            });
        }
        Ok(VerifyCodeResponse {
            success: true,
            token: "mock-auth-token".to_string(),
        })
    }

    async fn resend_code(&self, phone_number: &str) -> Result<ResendResponse, ResendError> {
        tokio::time::sleep(self.options.latency).await;
        info!("Resending code to: {}", phone_number);
        Ok(ResendResponse {
            message: "Code resent successfully".to_string(),
        })
    }
}
