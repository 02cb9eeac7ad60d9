//! Generate static files

use anyhow::Result;

use crate::content::ContentLoader;
use crate::generator::Generator;
use crate::Site;

/// Generate the site, returning the number of posts written
pub fn run(site: &Site) -> Result<usize> {
    let start = std::time::Instant::now();
    let config = &site.config;

    tracing::debug!("Site base directory: {:?}", site.base_dir);
    tracing::info!("Processing markdown files from: {:?}", config.content_dir);
    tracing::info!("Generating HTML files to: {:?}", config.output_dir);

    let loader = ContentLoader::new(config);
    let posts = loader.load_posts()?;
    tracing::info!("Loaded {} posts", posts.len());

    let generator = Generator::new(config)?;
    generator.generate(&posts)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(posts.len())
}
