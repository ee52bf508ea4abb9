use quakemap::{pipeline, HtmlRenderer, HttpFeed, QuakeMapConfig};

/// File the page is written to, relative to the working directory
const OUTPUT_FILE: &str = "index.html";

/// Fetches the live feed once and writes the interactive map page
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = QuakeMapConfig::default();
    let feed = HttpFeed::new(&config.feed)?;

    let composition = pipeline::run(&feed, &config).await?;
    log::info!(
        "{} earthquakes on the map, {} skipped",
        composition.markers,
        composition.skipped
    );

    HtmlRenderer::new()
        .with_title("Earthquakes: Past Week")
        .write_to(&composition.map, OUTPUT_FILE)?;

    println!("Map written to {OUTPUT_FILE}");
    Ok(())
}
