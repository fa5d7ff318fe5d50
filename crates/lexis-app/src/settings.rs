use anyhow::Context;
use lexis_config::Config;

use crate::cli::Args;

/// Config file if given, otherwise environment and defaults; flags on top
pub fn resolve_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::new(),
    };
    args.apply(&mut config);

    tracing::debug!(
        input = %config.input_path.display(),
        dict = %config.dictionary.path.display(),
        output = %config.output.path.display(),
        mode = %config.output.mode,
        format = %config.output.format,
        relations = ?config.dictionary.relations,
        "resolved config"
    );

    Ok(config)
}
