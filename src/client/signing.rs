//! AWS Signature Version 4.
//!
//! Requests are signed with `aws-sigv4`, the signer the AWS SDKs use. This
//! module adapts it to the protocol layer's plain header map and keeps the
//! RFC 3986 encoding used when building paths and query strings.

use crate::client::Credentials;
use crate::error::{Error, Result};
use aws_sigv4::http_request::{sign, SignableBody, SignableRequest, SigningSettings};
use aws_sigv4::sign::v4;
use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::BTreeMap;
use std::time::SystemTime;

/// Everything except the RFC 3986 unreserved characters.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const PROVIDER_NAME: &str = "aws-blocks";

/// Signs requests for one service in one region.
#[derive(Debug, Clone)]
pub struct SigV4Signer {
    credentials: aws_credential_types::Credentials,
    region: String,
    service: String,
}

impl SigV4Signer {
    pub fn new(credentials: &Credentials, region: &str, service: &str) -> Self {
        Self {
            credentials: aws_credential_types::Credentials::new(
                credentials.access_key_id.clone(),
                credentials.secret_access_key.clone(),
                credentials.session_token.clone(),
                None,
                PROVIDER_NAME,
            ),
            region: region.to_string(),
            service: service.to_string(),
        }
    }

    /// Adds `x-amz-date`, `x-amz-security-token` (when a session token is
    /// set) and `authorization` to `headers`.
    ///
    /// `headers` must already contain `host`. Header names are expected in
    /// lower case.
    pub fn sign(
        &self,
        method: &str,
        url: &str,
        headers: &mut BTreeMap<String, String>,
        body: &[u8],
        timestamp: DateTime<Utc>,
    ) -> Result<()> {
        let identity = self.credentials.clone().into();
        let params = v4::SigningParams::builder()
            .identity(&identity)
            .region(&self.region)
            .name(&self.service)
            .time(SystemTime::from(timestamp))
            .settings(SigningSettings::default())
            .build()
            .map_err(|e| Error::Signing(e.to_string()))?
            .into();

        let signable = SignableRequest::new(
            method,
            url,
            headers.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            SignableBody::Bytes(body),
        )
        .map_err(|e| Error::Signing(format!("{}: {}", url, e)))?;

        let (instructions, _signature) = sign(signable, &params)
            .map_err(|e| Error::Signing(e.to_string()))?
            .into_parts();

        for (name, value) in instructions.headers() {
            headers.insert(name.to_lowercase(), value.to_string());
        }
        Ok(())
    }
}

/// URI-encodes everything except unreserved characters.
pub fn uri_encode(input: &str) -> String {
    utf8_percent_encode(input, UNRESERVED).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_credentials(session_token: Option<&str>) -> Credentials {
        Credentials::new(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            session_token.map(str::to_string),
        )
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap()
    }

    fn signed(signer: &SigV4Signer, method: &str, url: &str, body: &[u8]) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        let host = url::Url::parse(url).unwrap().host_str().unwrap().to_string();
        headers.insert("host".to_string(), host);
        signer.sign(method, url, &mut headers, body, fixed_time()).unwrap();
        headers
    }

    #[test]
    fn test_uri_encode() {
        assert_eq!(uri_encode("hello world"), "hello%20world");
        assert_eq!(uri_encode("a/b"), "a%2Fb");
        assert_eq!(uri_encode("abcABC123-_.~"), "abcABC123-_.~");
        assert_eq!(uri_encode("k=v&x"), "k%3Dv%26x");
    }

    #[test]
    fn test_get_vanilla() {
        let signer = SigV4Signer::new(&test_credentials(None), "us-east-1", "service");
        let headers = signed(&signer, "GET", "https://example.amazonaws.com/", b"");

        assert_eq!(headers["x-amz-date"], "20150830T123600Z");
        assert_eq!(
            headers["authorization"],
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
             SignedHeaders=host;x-amz-date, \
             Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
        assert!(!headers.contains_key("x-amz-security-token"));
    }

    #[test]
    fn test_session_token_is_signed() {
        let signer = SigV4Signer::new(&test_credentials(Some("session")), "us-east-1", "eks");
        let headers = signed(
            &signer,
            "GET",
            "https://eks.us-east-1.amazonaws.com/clusters",
            b"",
        );

        assert_eq!(headers["x-amz-security-token"], "session");
        assert!(headers["authorization"]
            .contains("SignedHeaders=host;x-amz-date;x-amz-security-token"));
    }

    #[test]
    fn test_signature_depends_on_body() {
        let signer = SigV4Signer::new(&test_credentials(None), "us-east-1", "waf");
        let first = signed(&signer, "POST", "https://waf.amazonaws.com/", b"{}");
        let second = signed(&signer, "POST", "https://waf.amazonaws.com/", b"{\"Limit\":10}");
        assert_ne!(first["authorization"], second["authorization"]);
    }

    #[test]
    fn test_protocol_headers_are_signed() {
        let signer = SigV4Signer::new(&test_credentials(None), "us-east-1", "waf");
        let mut headers = BTreeMap::new();
        headers.insert("host".to_string(), "waf.amazonaws.com".to_string());
        headers.insert(
            "content-type".to_string(),
            "application/x-amz-json-1.1".to_string(),
        );
        headers.insert(
            "x-amz-target".to_string(),
            "AWSWAF_20150824.GetChangeToken".to_string(),
        );
        signer
            .sign("POST", "https://waf.amazonaws.com/", &mut headers, b"{}", fixed_time())
            .unwrap();

        assert!(headers["authorization"]
            .contains("/20150830/us-east-1/waf/aws4_request, SignedHeaders=content-type;host;x-amz-date;x-amz-target,"));
    }

    #[test]
    fn test_query_order_does_not_change_signature() {
        let signer = SigV4Signer::new(&test_credentials(None), "us-east-1", "eks");
        let first = signed(
            &signer,
            "GET",
            "https://eks.us-east-1.amazonaws.com/clusters?maxResults=10&include=all",
            b"",
        );
        let second = signed(
            &signer,
            "GET",
            "https://eks.us-east-1.amazonaws.com/clusters?include=all&maxResults=10",
            b"",
        );
        assert_eq!(first["authorization"], second["authorization"]);
    }

    #[test]
    fn test_invalid_url_is_a_signing_error() {
        let signer = SigV4Signer::new(&test_credentials(None), "us-east-1", "eks");
        let mut headers = BTreeMap::new();
        let err = signer
            .sign("GET", "not a url", &mut headers, b"", fixed_time())
            .unwrap_err();
        assert!(matches!(err, Error::Signing(_)));
    }
}
