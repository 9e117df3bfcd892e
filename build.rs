// build.rs

use clap::Command;
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Mirrors `src/cli.rs`; the build script cannot depend on the crate itself
fn build_cli() -> Command {
    Command::new("hipify-tree")
        .version(env!("CARGO_PKG_VERSION"))
        .author("hipify-tree Contributors")
        .about("Convert every CUDA .cu file under ./gpu4pyscf to HIP in place with hipify-perl")
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("hipify-tree.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
