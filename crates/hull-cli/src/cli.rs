//! CLI argument definitions for hull.
//!
//! Uses `clap` derive macros to define the full command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use hull_registry::registry::NPM_REGISTRY_URL;

#[derive(Parser, Debug)]
#[command(
    name = "hull",
    version,
    about = "A closure-based dependency resolver for npm-style registries",
    long_about = "Hull crawls an npm-style registry into a local closure file, then resolves \
                  package.json manifests against it with either a greedy first-fit installer \
                  or an exhaustive backtracking solver."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Crawl the registry and snapshot the dependency closure of a manifest
    GenClosure {
        /// Path to the manifest (defaults to the nearest package.json)
        manifest: Option<PathBuf>,
        /// Output path for the closure
        #[arg(short, long, default_value = "closure.json")]
        output: PathBuf,
        /// Registry base URL
        #[arg(long, env = "HULL_REGISTRY", default_value = NPM_REGISTRY_URL)]
        registry: String,
    },

    /// List the closure versions of a package that satisfy a range
    ListVersions {
        /// Path to the closure file
        closure: PathBuf,
        /// Package name
        package: String,
        /// Version range (e.g. ^1.2.0)
        range: String,
    },

    /// Resolve greedily, reusing installed versions (never backtracks)
    NaiveResolve {
        /// Path to the manifest
        manifest: PathBuf,
        /// Path to the closure file
        closure: PathBuf,
        /// Output path for the installation plan
        #[arg(short, long, default_value = "plan.json")]
        output: PathBuf,
    },

    /// Resolve with backtracking to one version per package
    Resolve {
        /// Path to the manifest
        manifest: PathBuf,
        /// Path to the closure file
        closure: PathBuf,
        /// Output path for the installation plan
        #[arg(short, long, default_value = "plan.json")]
        output: PathBuf,
    },

    /// Print an installation plan as a dependency tree
    Tree {
        /// Path to the plan file
        plan: PathBuf,
        /// Maximum tree depth to display
        #[arg(long)]
        depth: Option<usize>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
