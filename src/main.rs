use anyhow::Context;
use clap::Parser;
use stitchkit::cli::Arguments;
use stitchkit::{import_pattern, init_logging, Config, StitchDocument};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();

    init_logging()?;
    info!("StitchKit {} (built {})", stitchkit::VERSION, stitchkit::BUILD_DATE);

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default(&Config::default_path()?)?,
    };
    args.update_config(&mut config);

    let document = StitchDocument::load(&args.document)?;
    let report = import_pattern(&document, &config)
        .with_context(|| format!("Import of {} failed", args.document.display()))?;

    if let Some(path) = &args.plan {
        let json = serde_json::to_string_pretty(&report.plan)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write plan to {}", path.display()))?;
        info!("Wrote emission plan to {}", path.display());
    }

    if report.plan.needs_material() {
        info!("Plan requests a thread material driven by the color ramp");
    }
    info!("{}: {}", args.document.display(), report.summary());
    Ok(())
}
