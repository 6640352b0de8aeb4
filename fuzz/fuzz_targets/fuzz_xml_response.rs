//! Fuzz target for RDS XML response decoding.
//!
//! Feeds arbitrary bodies through the success and error paths of the query
//! protocol decoder.

#![no_main]

use aws_blocks::blocks::builtin_operations;
use aws_blocks::client::protocol::{self, query, HttpResponse};
use aws_blocks::client::Command;
use aws_blocks::service::Service;
use libfuzzer_sys::fuzz_target;
use serde_json::Map;
use std::collections::BTreeMap;
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, body)) = data.split_first() else {
        return;
    };

    let operations: Vec<_> = builtin_operations()
        .into_iter()
        .filter(|op| op.service == Service::Rds)
        .collect();
    if operations.is_empty() {
        return;
    }
    let operation = operations[selector as usize % operations.len()].clone();
    let command = Command::new(Arc::new(operation), Map::new());

    let response = HttpResponse {
        status: 200,
        headers: BTreeMap::new(),
        body: body.to_vec(),
    };
    let _ = query::decode(&command, &response);

    let failed = HttpResponse {
        status: 400,
        ..response
    };
    let error = protocol::decode_error(Service::Rds, &failed);
    assert!(!error.code.is_empty());
});
