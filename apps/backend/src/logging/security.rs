use tracing::warn;

use crate::auth::claims::TokenKind;
use crate::logging::redact::Redacted;
use crate::trace_ctx;

/// Log a security-relevant login failure event.
pub fn login_failed(reason: &str, username: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        username = %Redacted(username),
        reason,
        "Authentication failure"
    );
}

/// Log a rejected session token.
pub fn token_rejected(kind: TokenKind, reason: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        %trace_id,
        %kind,
        reason,
        "Session token rejected"
    );
}
