//! Classify image files from the command line and print one JSON line per file.
//!
//! ```bash
//! cargo run --bin classify_image -- shopper.jpg product-front.png product-back.png
//! ```

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tryon_vision::{
    read_image, ClassificationResult, ClassifierConfig, DecodeConfig, OrientationClassifier,
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("tryon_vision=info"))
        .context("invalid log filter")?;

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(env_filter)
            .init();
    }

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        bail!("usage: classify_image <image>...");
    }

    let classifier = OrientationClassifier::new(ClassifierConfig::from_env());
    let decode_config = DecodeConfig::from_env();
    info!(files = paths.len(), ?decode_config, "Classifying images");

    for path in &paths {
        let line = match read_image(path, &decode_config) {
            Ok(image) => serde_json::json!({
                "path": path,
                "width": image.width(),
                "height": image.height(),
                "result": classifier.classify(&image),
                "signals": classifier.signals(&image),
            }),
            Err(e) => {
                warn!(path = %path, error = %e, "Could not read image");
                serde_json::json!({
                    "path": path,
                    "result": ClassificationResult::unknown(),
                    "error": e.to_string(),
                })
            }
        };
        println!("{line}");
    }

    Ok(())
}
