//! Response types returned by the verification service.

use serde::{Deserialize, Serialize};

/// Outcome of a successful `send_code` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeResponse {
    pub verification_id: String,
    pub message: String,
}

/// Outcome of a successful `verify_code` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub success: bool,
    pub token: String,
}

/// Outcome of a successful `resend_code` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendResponse {
    pub message: String,
}
