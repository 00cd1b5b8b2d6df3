//! Target URL validation.
//!
//! Shortened targets must be absolute HTTP(S) URLs. The parsed form returned
//! here is what the link table stores and compares, so equality between two
//! submissions is exact string equality of the parsed URL text. No
//! canonicalization is applied beyond what URL parsing itself performs.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum InvalidUrl {
    #[error("invalid URL format: {0}")]
    Malformed(String),

    #[error("only HTTP and HTTPS URLs can be shortened")]
    UnsupportedScheme,

    #[error("URL must have a host")]
    MissingHost,
}

/// Parses `input` as an absolute HTTP(S) URL.
///
/// # Errors
///
/// Returns [`InvalidUrl::Malformed`] when the input fails URL syntax rules
/// (including relative references), [`InvalidUrl::UnsupportedScheme`] for
/// schemes other than `http`/`https`, and [`InvalidUrl::MissingHost`] when
/// the authority has no host.
pub fn parse_target_url(input: &str) -> Result<Url, InvalidUrl> {
    let url = Url::parse(input).map_err(|e| InvalidUrl::Malformed(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(InvalidUrl::UnsupportedScheme),
    }

    if url.host_str().is_none() {
        return Err(InvalidUrl::MissingHost);
    }

    Ok(url)
}
