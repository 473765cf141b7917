//! Quadgen - builds a uniform quadtree and prints its outline and DOT graph.
//!
//! Pipe the DOT section into Graphviz to render it: `quadgen | dot -Tpng -o quadtree.png`
//! (with `[output] outline = false` in the config).

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is reserved for the tree output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    info!("Quadgen v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = quadtree::Config::load(config_path.as_deref())?;
    let region = config.region()?;
    info!("  Region: {} {}x{}", region, region.width(), region.height());
    info!("  Min size: {}", config.subdivision.min_size);

    let mut tree = quadtree::QuadTree::with_min_size(region, config.subdivision.min_size);
    let outcome = tree.subdivide();
    info!("Subdivision finished: {:?}", outcome);

    let mut out = io::stdout().lock();
    if config.output.outline {
        writeln!(out, "--- QuadTree Structure ---")?;
        write!(out, "{}", tree.outline())?;
        writeln!(out, "--------------------------")?;
    }
    if config.output.dot {
        if config.output.outline {
            writeln!(out, "--- QuadTree DOT Code (Graphviz) ---")?;
            write!(out, "{}", tree.dot())?;
            writeln!(out, "------------------------------------")?;
        } else {
            write!(out, "{}", tree.dot())?;
        }
    }
    out.flush()?;

    Ok(())
}
