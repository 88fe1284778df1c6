//! Operation: crawl a registry and snapshot the reachable dependency universe.

use std::path::Path;
use std::sync::Arc;

use hull_core::manifest::Manifest;
use hull_registry::registry::Registry;
use hull_registry::transport::{HttpRegistry, RegistryTransport};
use hull_resolver::crawler;
use hull_util::progress::{spinner, status, status_info, status_warn};

/// Crawl the registry outward from the manifest's direct dependencies and
/// write the resulting closure to `out_path`.
pub async fn gen_closure(
    manifest_path: &Path,
    out_path: &Path,
    registry_url: &str,
    verbose: bool,
) -> miette::Result<()> {
    let manifest = Manifest::from_path(manifest_path)?;
    let registry = Registry::new(registry_url);
    let transport: Arc<dyn RegistryTransport> = Arc::new(HttpRegistry::new(registry)?);

    let sp = spinner(&format!(
        "Crawling registry from {} direct dependencies...",
        manifest.dependencies.len()
    ));
    let closure = crawler::build_closure(transport, &manifest).await;
    sp.finish_and_clear();

    if verbose {
        for (name, records) in closure.iter() {
            if records.is_empty() {
                status_warn("Empty", name);
            } else {
                status_info("Fetched", &format!("{name} ({} versions)", records.len()));
            }
        }
    }

    closure.write_to(out_path)?;
    status(
        "Crawled",
        &format!(
            "{} packages, {} versions -> {}",
            closure.package_count(),
            closure.version_count(),
            out_path.display()
        ),
    );
    Ok(())
}
