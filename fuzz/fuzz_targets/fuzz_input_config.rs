//! Fuzz target for input config validation and request encoding.
//!
//! Any JSON object a host might send must either be rejected by validation
//! or encode into a request without panicking.

#![no_main]

use aws_blocks::blocks::{builtin_operations, Block, OperationBlock, REGION_FIELD};
use aws_blocks::client::{protocol, Command};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, json)) = data.split_first() else {
        return;
    };
    let Ok(Value::Object(mut input)) = serde_json::from_slice::<Value>(json) else {
        return;
    };

    let operations = builtin_operations();
    if operations.is_empty() {
        return;
    }
    let operation = operations[selector as usize % operations.len()].clone();
    let block = OperationBlock::new(operation.clone());

    if block.validate(&input).is_err() {
        return;
    }
    input.remove(REGION_FIELD);
    let command = Command::new(Arc::new(operation), input);
    let _ = protocol::encode(&command);
});
