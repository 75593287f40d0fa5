//! HMAC-SHA1 URL signing for premium-plan requests
//!
//! The signed payload is the request target of the URL: path, `?` and the
//! query exactly as built, without scheme or host. The private key is
//! base64url-encoded and the signature is returned base64url-encoded, so it
//! can be appended to the query without further escaping.

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE};
use base64::engine::DecodePaddingMode;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use tracing::debug;
use url::{Position, Url};

use crate::error::GeocodingError;

type HmacSha1 = Hmac<Sha1>;

/// base64url decoder that accepts keys with or without trailing `=`
const KEY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Sign a full request URL with a base64url private key
///
/// # Errors
///
/// Returns [`GeocodingError::InvalidUrl`] if the URL cannot be parsed and
/// [`GeocodingError::InvalidPrivateKey`] if the key is not valid base64url.
pub fn sign_url(full_url: &str, private_key: &str) -> Result<String, GeocodingError> {
    let target = request_target(full_url)?;
    let key = decode_private_key(private_key)?;
    debug!(target_len = target.len(), "Signing request target");
    sign_bytes(&key, target.as_bytes())
}

/// Strip scheme and host, keeping path and query verbatim
///
/// Only the part before `?` goes through the URL parser. The query is
/// copied byte for byte, since the parser would percent-encode characters
/// the caller sends unescaped.
///
/// # Errors
///
/// Returns [`GeocodingError::InvalidUrl`] if the URL cannot be parsed.
pub fn request_target(full_url: &str) -> Result<String, GeocodingError> {
    let (endpoint, query) = match full_url.split_once('?') {
        Some((endpoint, query)) => (endpoint, Some(query)),
        None => (full_url, None),
    };
    let url = Url::parse(endpoint).map_err(|e| GeocodingError::InvalidUrl(e.to_string()))?;
    let path = &url[Position::BeforePath..Position::AfterPath];

    Ok(match query {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    })
}

/// Decode a base64url private key into raw HMAC key bytes
///
/// # Errors
///
/// Returns [`GeocodingError::InvalidPrivateKey`] on any decoding failure.
pub fn decode_private_key(private_key: &str) -> Result<Vec<u8>, GeocodingError> {
    KEY_ENGINE
        .decode(private_key)
        .map_err(|e| GeocodingError::InvalidPrivateKey(e.to_string()))
}

fn sign_bytes(key: &[u8], message: &[u8]) -> Result<String, GeocodingError> {
    let mut mac = HmacSha1::new_from_slice(key)
        .map_err(|e| GeocodingError::InvalidPrivateKey(e.to_string()))?;
    mac.update(message);
    Ok(URL_SAFE.encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Published example key and signature for URL signing
    const DOC_KEY: &str = "vNIXE0xscrmjlyV-12Nj_BvUPaw=";
    const DOC_URL: &str =
        "https://maps.googleapis.com/maps/api/geocode/json?address=New+York&client=clientID";
    const DOC_SIGNATURE: &str = "chaRF2hTJKOScPr-RQCEhZbSzIE=";

    #[test]
    fn test_request_target_strips_scheme_and_host() {
        let target = request_target(DOC_URL).unwrap();
        assert_eq!(target, "/maps/api/geocode/json?address=New+York&client=clientID");
    }

    #[test]
    fn test_request_target_keeps_query_order_and_encoding() {
        let target = request_target(
            "http://127.0.0.1:8080/geocode?sensor=false&address=a%2Cb&channel=web&client=gme-acme",
        )
        .unwrap();
        assert_eq!(
            target,
            "/geocode?sensor=false&address=a%2Cb&channel=web&client=gme-acme"
        );
    }

    #[test]
    fn test_request_target_does_not_reencode_query() {
        let target = request_target(
            "https://maps.googleapis.com/maps/api/geocode/json?sensor=false&channel=a b\"c<d>&client=é",
        )
        .unwrap();
        assert_eq!(
            target,
            "/maps/api/geocode/json?sensor=false&channel=a b\"c<d>&client=é"
        );
    }

    #[test]
    fn test_request_target_without_query() {
        let target = request_target("https://maps.googleapis.com/maps/api/geocode/json").unwrap();
        assert_eq!(target, "/maps/api/geocode/json");
    }

    #[test]
    fn test_request_target_rejects_relative_url() {
        let err = request_target("/maps/api/geocode/json?address=x").unwrap_err();
        assert!(matches!(err, GeocodingError::InvalidUrl(_)));
    }

    #[test]
    fn test_sign_url_matches_published_example() {
        assert_eq!(sign_url(DOC_URL, DOC_KEY).unwrap(), DOC_SIGNATURE);
    }

    #[test]
    fn test_sign_bytes_rfc2202_vector() {
        // RFC 2202 test case 2
        let signature = sign_bytes(b"Jefe", b"what do ya want for nothing?").unwrap();
        assert_eq!(signature, "7_zfauXrL6LSdBbV8YTfnCWafHk=");
    }

    #[test]
    fn test_signature_is_deterministic() {
        let url = "https://maps.googleapis.com/maps/api/geocode/json?sensor=false&address=Paris&client=gme-acme";
        assert_eq!(sign_url(url, DOC_KEY).unwrap(), sign_url(url, DOC_KEY).unwrap());
    }

    #[test]
    fn test_single_character_change_changes_signature() {
        let a = sign_url(
            "https://maps.googleapis.com/maps/api/geocode/json?sensor=false&address=Paris&client=gme-acme",
            DOC_KEY,
        )
        .unwrap();
        let b = sign_url(
            "https://maps.googleapis.com/maps/api/geocode/json?sensor=false&address=Parit&client=gme-acme",
            DOC_KEY,
        )
        .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_host_does_not_affect_signature() {
        let a = sign_url("https://maps.googleapis.com/maps/api/geocode/json?address=New+York&client=clientID", DOC_KEY).unwrap();
        let b = sign_url("http://localhost:9999/maps/api/geocode/json?address=New+York&client=clientID", DOC_KEY).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_signature_is_url_safe() {
        let signature = sign_url(DOC_URL, DOC_KEY).unwrap();
        assert!(!signature.contains(['+', '/']));
    }

    #[test]
    fn test_decode_private_key_with_and_without_padding() {
        assert_eq!(decode_private_key("SmVmZQ==").unwrap(), b"Jefe");
        assert_eq!(decode_private_key("SmVmZQ").unwrap(), b"Jefe");
    }

    #[test]
    fn test_invalid_private_key() {
        let err = sign_url(DOC_URL, "not+valid/base64url!").unwrap_err();
        assert!(matches!(err, GeocodingError::InvalidPrivateKey(_)));
        assert!(err.is_configuration_error());
    }
}
