//! STL to WebGL JSON mesh converter.

use anyhow::Context;
use clap::Parser;
use log::info;

use stl_to_json::{convert::convert, data::Material, CliOpt};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("version: {}", env!("CARGO_PKG_VERSION"));

    let opt = CliOpt::parse();

    let material = match &opt.material {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read material file {}", path.display()))?;
            Material::from_json(&json)
                .with_context(|| format!("Failed to load material from {}", path.display()))?
        }
        None => Material::default(),
    };

    convert(&opt.input, &opt.output, &material).with_context(|| {
        format!(
            "Failed to convert {} to {}",
            opt.input.display(),
            opt.output.display()
        )
    })?;

    Ok(())
}
