//! Build script for storefront crate.
//!
//! Hashes `static/css/main.css` so templates can append a content version to
//! the stylesheet URL.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let css_path = Path::new(&manifest_dir).join("static/css/main.css");

    println!("cargo:rerun-if-changed={}", css_path.display());

    let hash = fs::read(&css_path).map_or_else(
        |e| {
            println!("cargo:warning=Could not read main.css: {e}");
            String::from("dev")
        },
        |content| {
            let digest = format!("{:x}", Sha256::digest(&content));
            digest.chars().take(8).collect()
        },
    );

    println!("cargo:rustc-env=CSS_HASH={hash}");
}
