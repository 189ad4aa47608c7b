use clap::Parser;
use std::path::PathBuf;

use logoproc::{RecolorStrategy, Variant};

pub const DEFAULT_SOURCE_DIR: &str = "mocks/Orizon";
pub const DEFAULT_OUTPUT_DIR: &str = "public/logos";

#[derive(Parser)]
#[command(name = "logoproc", version, about = "Logo background removal and recolor CLI")]
pub struct CliArgs {
    /// Pipeline generation (legacy or fixed, default fixed); a JSON manifest sets its own
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// JSON manifest of jobs; defaults to the built-in list for the variant
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Directory containing the source images (manifest mode) [default: mocks/Orizon]
    #[arg(long)]
    pub source_dir: Option<PathBuf>,

    /// Directory receiving the processed PNGs (manifest mode) [default: public/logos]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Input image (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output PNG (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Treat the input as a multi-size reference sheet and extract the largest icon
    #[arg(long, default_value_t = false)]
    pub sheet: bool,

    /// Remap orange tones to the target color
    #[arg(long, default_value_t = false)]
    pub recolor: bool,

    /// Skip background removal
    #[arg(long, default_value_t = false)]
    pub keep_background: bool,

    /// JSON processing preset; CLI overrides below still apply
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Recolor strategy (distance or tone); defaults per variant
    #[arg(long, value_enum)]
    pub strategy: Option<RecolorStrategy>,

    /// Channels above this value count as light background
    #[arg(long)]
    pub light_threshold: Option<u8>,

    /// Channels below this value count as dark background
    #[arg(long)]
    pub dark_threshold: Option<u8>,

    /// Max RGB distance from the source color for the distance strategy
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Source color as #RRGGBB
    #[arg(long)]
    pub from_color: Option<String>,

    /// Target color as #RRGGBB
    #[arg(long)]
    pub to_color: Option<String>,

    /// Stop at the first failing job instead of continuing (manifest mode)
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,

    /// Write a JSON run report to this path (manifest mode)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
