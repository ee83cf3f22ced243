//! Generate static files

use anyhow::Result;
use notify::Watcher;
use std::path::PathBuf;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::generator::{Generator, RenderReport};
use crate::Site;

/// Generate the static site
pub fn run(site: &Site) -> Result<RenderReport> {
    run_with_options(site, false)
}

/// Generate, failing in strict mode when any page had a broken reference
pub fn run_with_options(site: &Site, strict: bool) -> Result<RenderReport> {
    let start = std::time::Instant::now();

    let document = site.load_content()?;
    tracing::info!(
        "Loaded content for {} ({} posts, {} FAQ entries)",
        document.agent.name,
        document.blog.posts.len(),
        document.faq.anchors().count()
    );

    let report = Generator::new(site, &document).generate()?;

    if strict && !report.is_clean() {
        anyhow::bail!(
            "{} page(s) rendered with broken references",
            report.failures.len()
        );
    }

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(report)
}

/// Files whose changes require a rebuild
pub fn watched_paths(site: &Site) -> Vec<PathBuf> {
    let mut paths = vec![site.config_path()];
    paths.extend(site.copy_path());
    if site.static_dir.exists() {
        paths.push(site.static_dir.clone());
    }
    paths
}

/// Watch for file changes and regenerate
pub async fn watch(site: &Site, strict: bool) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    for path in watched_paths(site) {
        let mode = if path.is_dir() {
            notify::RecursiveMode::Recursive
        } else {
            notify::RecursiveMode::NonRecursive
        };
        watcher.watch(&path, mode)?;
        tracing::debug!("Watching: {:?}", path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut last_rebuild = std::time::Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, regenerating...");
                    // The config may have changed, so reopen the site
                    let result = Site::new(&site.base_dir)
                        .and_then(|site| run_with_options(&site, strict));
                    if let Err(e) = result {
                        tracing::error!("Generation failed: {:#}", e);
                    }
                    last_rebuild = std::time::Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}
