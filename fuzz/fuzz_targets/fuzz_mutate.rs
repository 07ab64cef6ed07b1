#![no_main]

use json_mutator_core::{mutate_with_rng, OutputFormat};
use libfuzzer_sys::fuzz_target;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Input layout: 8-byte RNG seed, then "<schema JSON>\n<sample JSON>".
// Goal: no panics for any pair of well-formed JSON documents, and every
// payload renders.
fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let (seed, rest) = data.split_at(8);
    let mut seed_bytes = [0u8; 8];
    seed_bytes.copy_from_slice(seed);
    let mut rng = StdRng::seed_from_u64(u64::from_le_bytes(seed_bytes));

    let Some(split) = rest.iter().position(|&b| b == b'\n') else {
        return;
    };
    let (Ok(schema), Ok(sample)) = (
        serde_json::from_slice::<serde_json::Value>(&rest[..split]),
        serde_json::from_slice::<serde_json::Value>(&rest[split + 1..]),
    ) else {
        return;
    };

    for payload in mutate_with_rng(&schema, &sample, 2, &mut rng) {
        let _ = payload.to_json_string(OutputFormat::Compact);
    }
});
