use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    if target_os == "macos" {
        println!("cargo:rerun-if-changed=resources/macos/Info.plist");

        // Copy resources next to the binary for development runs
        let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
        let Some(target_dir) = out_dir.ancestors().nth(3) else {
            println!("cargo:warning=Unexpected OUT_DIR layout: {}", out_dir.display());
            return;
        };

        let resources_src = PathBuf::from("resources/macos");
        let resources_dst = target_dir.join("resources");

        if let Err(e) = fs::create_dir_all(&resources_dst) {
            println!("cargo:warning=Failed to create resources directory: {}", e);
        }

        let src = resources_src.join("Info.plist");
        if src.exists() {
            if let Err(e) = fs::copy(&src, resources_dst.join("Info.plist")) {
                println!("cargo:warning=Failed to copy Info.plist: {}", e);
            }
        }
    }
}
