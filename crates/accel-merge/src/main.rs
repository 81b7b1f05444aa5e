mod bootstrap;

use anyhow::{Context, Result};
use merge_core::settings::Settings;
use merge_data::merger::MergeConfig;
use merge_data::runner::run_range;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("accel-merge v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        "Source: {}, output: {}, match mode: {:?}",
        settings.source_dir.display(),
        settings.output_dir.display(),
        settings.match_mode
    );

    let range = settings.date_range()?;
    let config = MergeConfig::from(&settings);
    bootstrap::ensure_output_dir(&config.output_dir)?;

    let summary = run_range(&range, &config, |day| {
        for line in day.console_lines() {
            println!("{line}");
        }
    })
    .with_context(|| format!("merging logs from {}", config.source_dir.display()))?;

    if settings.json {
        println!("{}", summary.to_json()?);
    }

    Ok(())
}
