use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use crate::rewrite::Rewrite;

/// The JSON record carried inside a `vmess://` link.
///
/// Only the fields the rewrite touches are typed. Everything else rides along
/// in `extra` and is re-emitted verbatim, since some clients reject records
/// with missing keys.
#[derive(Debug, Serialize, Deserialize)]
struct VmessConfig {
    add: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sni: Option<String>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

fn decode_payload(b64: &str) -> Option<Vec<u8>> {
    // Share links in the wild come both with and without padding.
    general_purpose::STANDARD
        .decode(b64)
        .or_else(|_| general_purpose::STANDARD_NO_PAD.decode(b64))
        .ok()
}

pub fn rewrite(raw: &str, address: &str, index: usize) -> Rewrite {
    match try_rewrite(raw, address, index) {
        Some(link) => Rewrite::Done(link),
        None => Rewrite::Unchanged(raw.to_string()),
    }
}

fn try_rewrite(raw: &str, address: &str, index: usize) -> Option<String> {
    let b64 = raw.strip_prefix("vmess://")?;
    let bytes = decode_payload(b64.trim())?;
    let mut config: VmessConfig = serde_json::from_slice(&bytes).ok()?;

    let original_add = config.add.clone();

    // Fill host/sni from the original address only when the link did not
    // already carry them.
    if config.host.as_deref().map_or(true, str::is_empty) {
        config.host = Some(original_add.clone());
    }
    if config.sni.as_deref().map_or(true, str::is_empty) {
        config.sni = Some(original_add);
    }

    config.add = address.trim().to_string();

    let label = config.ps.take().unwrap_or_default();
    config.ps = Some(format!("{}_optimized_{}", label, index));

    let json = serde_json::to_string(&config).ok()?;
    Some(format!("vmess://{}", general_purpose::STANDARD.encode(json)))
}
