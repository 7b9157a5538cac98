//! Profile fixtures

use serde_json::{json, Value};

/// A static-site profile on plain FTP with build and install disabled.
pub fn static_profile() -> Value {
    json!({
        "project": { "type": "static", "name": "brochure" },
        "ftp": {
            "host": "ftp.example.com",
            "port": 21,
            "username": "deploy",
            "password": "hunter2",
            "remote_path": "/public_html",
            "secure": false
        },
        "deployment": {
            "build_assets": false,
            "run_package_install": false,
            "exclude": [".env", "drafts/"]
        },
        "history": []
    })
}

/// `n` incremental records with revisions `rev1..revN` (padded to 40 chars).
pub fn records(n: usize) -> Vec<Value> {
    (1..=n)
        .map(|i| {
            json!({
                "timestamp": format!("2026-10-{:02}T09:00:00Z", i.min(28)),
                "user": "dana",
                "kind": "incremental",
                "revision": format!("{:0<40}", format!("rev{}", i)),
            })
        })
        .collect()
}

pub fn with_records(mut profile: Value, records: Vec<Value>) -> Value {
    profile["history"] = Value::Array(records);
    profile
}
