//! Concurrent registry crawler: discovers the transitive dependency universe
//! reachable from a manifest and snapshots every package's version listing.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use hull_core::closure::Closure;
use hull_core::manifest::Manifest;
use hull_core::package::VersionRecord;
use hull_registry::transport::RegistryTransport;

const MAX_CONCURRENT_FETCHES: usize = 8;

/// Crawl every package reachable from the manifest's dependencies and
/// collect their full version listings into a closure.
///
/// Fetch failures are not fatal: the package keeps a present-but-empty entry
/// (terminal, resolution treats it as having no installable version) and the
/// crawl moves on. Against an unchanging registry the result is identical
/// across runs.
pub async fn build_closure(transport: Arc<dyn RegistryTransport>, manifest: &Manifest) -> Closure {
    Crawler::new(transport).run(manifest).await
}

/// Shared crawl state, cheap to clone into spawned tasks.
#[derive(Clone)]
struct Crawler {
    transport: Arc<dyn RegistryTransport>,
    fetch_slots: Arc<Semaphore>,
    /// A key appears here the moment a package is claimed, before its fetch
    /// completes; presence of the key is what stops every other branch from
    /// fetching the same name.
    packages: Arc<Mutex<BTreeMap<String, Vec<VersionRecord>>>>,
}

impl Crawler {
    fn new(transport: Arc<dyn RegistryTransport>) -> Self {
        Self {
            transport,
            fetch_slots: Arc::new(Semaphore::new(MAX_CONCURRENT_FETCHES)),
            packages: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    async fn run(self, manifest: &Manifest) -> Closure {
        let mut roots = JoinSet::new();
        for name in manifest.dependencies.keys() {
            roots.spawn(self.clone().crawl(name.clone()));
        }
        while roots.join_next().await.is_some() {}

        let packages = std::mem::take(&mut *self.packages.lock().expect("crawl state poisoned"));
        Closure::from_packages(packages)
    }

    /// Crawl one package: claim it, fetch its version listing, then fan out
    /// into every dependency name the listing mentions. Settles only after
    /// everything it transitively triggered has settled.
    fn crawl(self, name: String) -> BoxFuture<'static, ()> {
        async move {
            if !self.claim(&name) {
                return;
            }

            debug!(package = %name, "fetching version listing");
            let records = {
                let _permit = self.fetch_slots.acquire().await;
                match self.transport.fetch_versions(&name).await {
                    Ok(records) => records,
                    Err(err) => {
                        warn!(package = %name, error = %err, "fetch failed, recording empty version list");
                        Vec::new()
                    }
                }
            };

            let next: BTreeSet<String> = records
                .iter()
                .flat_map(|record| record.dependencies.keys().cloned())
                .collect();
            self.fill(&name, records);

            let mut children = JoinSet::new();
            for dep in next {
                if !self.discovered(&dep) {
                    children.spawn(self.clone().crawl(dep));
                }
            }
            while children.join_next().await.is_some() {}
        }
        .boxed()
    }

    /// Atomically claim a package name. Inserting the empty entry and testing
    /// for prior presence happen under one lock, so exactly one task wins.
    fn claim(&self, name: &str) -> bool {
        let mut packages = self.packages.lock().expect("crawl state poisoned");
        match packages.entry(name.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(Vec::new());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    fn discovered(&self, name: &str) -> bool {
        self.packages
            .lock()
            .expect("crawl state poisoned")
            .contains_key(name)
    }

    fn fill(&self, name: &str, records: Vec<VersionRecord>) {
        if let Some(slot) = self
            .packages
            .lock()
            .expect("crawl state poisoned")
            .get_mut(name)
        {
            *slot = records;
        }
    }
}
