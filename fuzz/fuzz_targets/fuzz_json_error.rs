//! Fuzz target for JSON error responses (EKS and WAF Classic).

#![no_main]

use aws_blocks::client::protocol::{self, HttpResponse};
use aws_blocks::service::Service;
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::collections::BTreeMap;

#[derive(Debug, Arbitrary)]
struct FuzzErrorResponse {
    waf: bool,
    status: u16,
    error_type: Option<String>,
    request_id: Option<String>,
    body: Vec<u8>,
}

fuzz_target!(|input: FuzzErrorResponse| {
    let mut headers = BTreeMap::new();
    if let Some(error_type) = input.error_type {
        headers.insert("x-amzn-errortype".to_string(), error_type);
    }
    if let Some(request_id) = input.request_id {
        headers.insert("x-amzn-requestid".to_string(), request_id);
    }
    let response = HttpResponse {
        status: input.status,
        headers,
        body: input.body,
    };

    let service = if input.waf { Service::Waf } else { Service::Eks };
    let error = protocol::decode_error(service, &response);
    assert_eq!(error.status, input.status);
    assert!(!error.code.contains('#'));
});
