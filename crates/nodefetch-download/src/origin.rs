//! Bearer-token origin allow-list.
//!
//! A supplied token is only ever attached to requests whose scheme+host
//! matches a recognized origin. Everything else gets the request without
//! the header (and a warning at the call site).

use url::Url;

/// Origins permitted to receive the bearer token, as (scheme, host) pairs.
///
/// Exactly one recognized origin in the current design: the HuggingFace
/// model hub over HTTPS.
const TOKEN_ALLOWED_ORIGINS: &[(&str, &str)] = &[("https", "huggingface.co")];

/// Whether the URL's origin may receive the bearer token.
///
/// Matches on the parsed scheme and full host, not on a string prefix, so
/// look-alike hosts such as `huggingface.co.evil.example` are rejected.
#[must_use]
pub fn origin_accepts_token(url: &Url) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    TOKEN_ALLOWED_ORIGINS
        .iter()
        .any(|(scheme, allowed)| url.scheme() == *scheme && host == *allowed)
}
