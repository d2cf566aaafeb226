//! CLI options.

use std::path::PathBuf;

use clap::Parser;

/// CLI options.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct CliOpt {
    /// STL file (binary or ASCII)
    #[arg(default_value = "deadpool.stl")]
    pub input: PathBuf,
    /// JSON file to write
    #[arg(default_value = "scene_triangles_deadpool.json")]
    pub output: PathBuf,
    /// JSON file with a material overriding the default one
    #[arg(long, value_name = "FILE")]
    pub material: Option<PathBuf>,
}
