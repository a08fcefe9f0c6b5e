use std::{env, fs, path::PathBuf};

use gesture_config_compiler::generate_from_path;

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("gesture: CARGO_MANIFEST_DIR not set"));
    let config_path = manifest_dir.join("config/gestures.toml");

    println!("cargo:rerun-if-changed={}", config_path.display());

    let generated = generate_from_path(&config_path).unwrap_or_else(|e| {
        panic!(
            "gesture: invalid config {}: {e}",
            config_path.display()
        )
    });

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("gesture: OUT_DIR not set"));
    let out_file = out_dir.join("gesture_config.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|e| panic!("gesture: cannot write generated config {}: {e}", out_file.display()));
}
