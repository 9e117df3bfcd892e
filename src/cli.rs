// src/cli.rs
//! CLI definition for hipify-tree
//!
//! The tool takes no arguments: it always converts `gpu4pyscf` under the
//! working directory. clap supplies `--help` and `--version`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hipify-tree")]
#[command(author, version)]
#[command(about = "Convert every CUDA .cu file under ./gpu4pyscf to HIP in place with hipify-perl", long_about = None)]
pub struct Cli {}
