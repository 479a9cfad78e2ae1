use anyhow::{bail, Context};
use fswc_bayer_rs::image_pipeline::{ConversionConfig, RawToRgbPipeline, SampleDepth, TileOrder};
use fswc_bayer_rs::logger;

use tracing::{error, info};

const USAGE: &str = "usage: fswc_bayer_rs <input.raw> <output.rgb> <width> <height> [bggr|gbrg|grbg|rggb|bayer] [8|10]";

fn main() -> anyhow::Result<()> {
    logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 4 || args.len() > 6 {
        bail!(USAGE);
    }

    let width: usize = args[2].parse().with_context(|| format!("invalid width '{}'", args[2]))?;
    let height: usize = args[3].parse().with_context(|| format!("invalid height '{}'", args[3]))?;
    let tile_order: TileOrder = match args.get(4) {
        Some(s) => s.parse()?,
        None => TileOrder::default(),
    };
    let sample_depth: SampleDepth = match args.get(5) {
        Some(s) => s.parse()?,
        None => SampleDepth::default(),
    };

    let config = ConversionConfig::builder()
        .tile_order(tile_order)
        .sample_depth(sample_depth)
        .build();
    let pipeline = RawToRgbPipeline::new(width, height, config);

    info!("Raw to RGB pipeline initialized");
    info!("Frame: {}x{} {}", width, height, pipeline.config().sample_depth);
    info!("Tile order: {}", pipeline.config().tile_order);

    match pipeline.convert_file(&args[0], &args[1]) {
        Ok(timings) => {
            timings.log_summary();
            info!("Conversion successful!");
            Ok(())
        }
        Err(e) => {
            error!("Conversion failed: {}", e);
            Err(e).with_context(|| format!("converting {}", args[0]))
        }
    }
}
