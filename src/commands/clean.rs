//! Clean generated files

use anyhow::Result;
use std::fs;

use crate::content::ContentLoader;
use crate::generator::ASSETS_DIR;
use crate::Site;

/// Remove the pages, assets and index produced by `generate`.
///
/// Only pages whose name matches a current source file are removed, so other
/// files in the output directory are left alone. Returns the number of paths
/// deleted.
pub fn run(site: &Site) -> Result<usize> {
    let config = &site.config;
    tracing::info!("Cleaning generated files for site at {:?}", site.base_dir);
    let loader = ContentLoader::new(config);
    let mut removed = 0;

    for source in loader.find_sources()? {
        let Some(stem) = source.file_stem() else {
            continue;
        };
        let page = config
            .output_dir
            .join(format!("{}.html", stem.to_string_lossy()));
        if page.is_file() {
            fs::remove_file(&page)?;
            tracing::debug!("Deleted: {:?}", page);
            removed += 1;
        }
    }

    let assets = config.output_dir.join(ASSETS_DIR);
    if assets.is_dir() {
        fs::remove_dir_all(&assets)?;
        tracing::info!("Deleted: {:?}", assets);
        removed += 1;
    }

    let index = config.index_path();
    if index.is_file() {
        fs::remove_file(&index)?;
        tracing::info!("Deleted: {:?}", index);
        removed += 1;
    }

    Ok(removed)
}
