use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    // target/<profile>/ sits three levels above OUT_DIR
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let Some(profile_dir) = Path::new(&out_dir).ancestors().nth(3) else {
        return;
    };

    let config_path = Path::new("config.toml");
    if config_path.exists() {
        if let Err(e) = fs::copy(config_path, profile_dir.join("config.toml")) {
            println!("cargo:warning=could not copy config.toml: {}", e);
        }
    }
}
