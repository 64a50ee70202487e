//! Embeds the git commit and build time into the binary for the version
//! surfaces. Missing git tooling degrades to an "unknown" marker.

use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=THOMAS_BUILD_GIT_HASH");
    println!("cargo:rerun-if-env-changed=THOMAS_BUILD_TIMESTAMP");

    let git_hash = env::var("THOMAS_BUILD_GIT_HASH").unwrap_or_else(|_| git_short_hash());
    let build_timestamp =
        env::var("THOMAS_BUILD_TIMESTAMP").unwrap_or_else(|_| unix_timestamp());

    println!("cargo:rustc-env=THOMAS_BUILD_GIT_HASH={git_hash}");
    println!("cargo:rustc-env=THOMAS_BUILD_TIMESTAMP={build_timestamp}");
}

fn git_short_hash() -> String {
    let hash = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());
    hash.unwrap_or_else(|| "unknown".to_string())
}

fn unix_timestamp() -> String {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|delta| delta.as_secs())
        .unwrap_or(0);
    format!("unix:{seconds}")
}
