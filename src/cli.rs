use std::path::PathBuf;

use stitchkit_settings::Config;

#[derive(clap::Parser, Debug)]
#[command(name = "stitchkit", version, about = "Segment and shade embroidery stitch documents", long_about = None)]
pub struct Arguments {
    /// Decoded stitch document (JSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub document: PathBuf,

    /// Config file (.toml or .json); defaults to the platform config directory
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Break paths at jumps instead of drawing jump wires
    #[arg(long)]
    pub hide_jump_wires: bool,

    /// Decoder units per normalized unit
    #[arg(long, value_parser = parse_scale)]
    pub scale: Option<f64>,

    /// Write the emission plan as JSON
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub plan: Option<PathBuf>,
}

impl Arguments {
    pub fn update_config(&self, config: &mut Config) {
        if self.hide_jump_wires {
            config.import.show_jump_wires = false;
        }

        if let Some(scale) = self.scale {
            config.import.scale = scale;
        }
    }
}

fn parse_scale(s: &str) -> Result<f64, String> {
    let scale: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(format!("scale must be a positive number, got {scale}"))
    }
}
