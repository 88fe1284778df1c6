//! Operation: display an installation plan as a dependency tree.

use std::path::Path;

use hull_core::plan::InstallationPlan;
use hull_resolver::graph::PlanGraph;

/// Render the plan at `plan_path` as a forest of `name@version` trees.
pub fn tree(plan_path: &Path, depth: Option<usize>) -> miette::Result<()> {
    let plan = InstallationPlan::from_path(plan_path)?;
    if plan.is_empty() {
        println!("No dependencies.");
        return Ok(());
    }

    let graph = PlanGraph::from_plan(&plan);
    print!("{}", graph.print_tree(depth));
    Ok(())
}
