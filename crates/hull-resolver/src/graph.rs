//! Plan graph construction and tree rendering.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Dfs, EdgeRef};
use petgraph::Direction;
use semver::Version;

use hull_core::plan::InstallationPlan;

/// One installed version in a rendered plan.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlanNode {
    pub name: String,
    pub version: Version,
}

impl fmt::Display for PlanNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// A resolved installation plan as a graph, backed by petgraph.
///
/// Every installed version is a node; coexisting versions of one package are
/// distinct nodes. Each dependency edge points at the installed version that
/// requirement resolves to under the reuse rule: the first installed version,
/// in installation order, satisfying it.
pub struct PlanGraph {
    graph: DiGraph<PlanNode, ()>,
    /// Lookup from `(name, version)` to node index, sorted for stable output.
    index: BTreeMap<(String, Version), NodeIndex>,
}

impl PlanGraph {
    pub fn from_plan(plan: &InstallationPlan) -> Self {
        let mut graph = DiGraph::new();
        let mut index = BTreeMap::new();

        for (name, entries) in plan.iter() {
            for entry in entries {
                let idx = graph.add_node(PlanNode {
                    name: name.to_string(),
                    version: entry.version.clone(),
                });
                index.insert((name.to_string(), entry.version.clone()), idx);
            }
        }

        for (name, entries) in plan.iter() {
            for entry in entries {
                let Some(&from) = index.get(&(name.to_string(), entry.version.clone())) else {
                    continue;
                };
                for (dep_name, dep_req) in &entry.dependencies {
                    // Requirements the plan does not cover (the root package,
                    // for one) draw no edge.
                    let Some(target) = plan.entry_satisfying(dep_name, dep_req) else {
                        continue;
                    };
                    let Some(&to) = index.get(&(dep_name.to_string(), target.version.clone()))
                    else {
                        continue;
                    };
                    graph.add_edge(from, to, ());
                }
            }
        }

        Self { graph, index }
    }

    /// Get the node data for an index.
    pub fn node(&self, idx: NodeIndex) -> &PlanNode {
        &self.graph[idx]
    }

    /// Tree roots: nodes nothing depends on, in `name@version` order, plus
    /// one representative per component that is pure cycle and so has no
    /// in-degree-zero member. Every node is reachable from some root.
    pub fn roots(&self) -> Vec<NodeIndex> {
        let mut roots: Vec<NodeIndex> = self
            .index
            .values()
            .copied()
            .filter(|&idx| {
                self.graph
                    .edges_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .collect();

        let mut covered = HashSet::new();
        for &root in &roots {
            let mut dfs = Dfs::new(&self.graph, root);
            while let Some(idx) = dfs.next(&self.graph) {
                covered.insert(idx);
            }
        }
        for &idx in self.index.values() {
            if covered.insert(idx) {
                roots.push(idx);
                let mut dfs = Dfs::new(&self.graph, idx);
                while let Some(reached) = dfs.next(&self.graph) {
                    covered.insert(reached);
                }
            }
        }
        roots
    }

    /// Direct dependencies of a node, in dependency name order.
    pub fn dependencies_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut deps: Vec<NodeIndex> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| e.target())
            .collect();
        // petgraph walks outgoing edges newest-first; flip back to insertion
        // order, which is the order the dependency map was iterated in.
        deps.reverse();
        deps
    }

    /// Print the plan as a forest, one tree per root.
    pub fn print_tree(&self, max_depth: Option<usize>) -> String {
        let mut output = String::new();
        let mut visited = HashSet::new();

        for root in self.roots() {
            output.push_str(&format!("{}\n", self.graph[root]));
            visited.insert(root);

            let children = self.dependencies_of(root);
            let count = children.len();
            for (i, child) in children.iter().enumerate() {
                let is_last = i == count - 1;
                self.print_subtree(&mut output, *child, "", is_last, 1, max_depth, &mut visited);
            }

            visited.remove(&root);
        }

        output
    }

    #[allow(clippy::too_many_arguments)]
    fn print_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        depth: usize,
        max_depth: Option<usize>,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let node = &self.graph[idx];
        output.push_str(&format!("{prefix}{connector}{node}\n"));

        if let Some(max) = max_depth {
            if depth >= max {
                return;
            }
        }

        if !visited.insert(idx) {
            return;
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let children = self.dependencies_of(idx);
        let count = children.len();
        for (i, child) in children.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_subtree(
                output,
                *child,
                &child_prefix,
                is_last,
                depth + 1,
                max_depth,
                visited,
            );
        }

        visited.remove(&idx);
    }

    /// Number of installed versions in the graph.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull_core::package::VersionRecord;
    use hull_core::plan::InstalledEntry;

    fn rec(version: &str, deps: &[(&str, &str)]) -> VersionRecord {
        VersionRecord::with_dependencies(
            Version::parse(version).unwrap(),
            deps.iter()
                .map(|(name, req)| (name.to_string(), req.to_string()))
                .collect(),
        )
    }

    fn plan(fixture: &[(&str, VersionRecord)]) -> InstallationPlan {
        let mut plan = InstallationPlan::new();
        for (name, record) in fixture {
            plan.push(name, InstalledEntry::bare(record));
        }
        plan
    }

    #[test]
    fn edges_point_at_the_first_satisfying_version() {
        let plan = plan(&[
            ("a", rec("1.0.0", &[])),
            ("a", rec("2.0.0", &[])),
            ("b", rec("1.0.0", &[("a", "^1.0.0")])),
            ("c", rec("1.0.0", &[("a", "^2.0.0")])),
        ]);
        let graph = PlanGraph::from_plan(&plan);
        assert_eq!(graph.len(), 4);

        let roots = graph.roots();
        let b = roots
            .iter()
            .copied()
            .find(|&idx| graph.node(idx).name == "b")
            .unwrap();
        let c = roots
            .iter()
            .copied()
            .find(|&idx| graph.node(idx).name == "c")
            .unwrap();

        let b_deps = graph.dependencies_of(b);
        assert_eq!(graph.node(b_deps[0]).version, Version::new(1, 0, 0));
        let c_deps = graph.dependencies_of(c);
        assert_eq!(graph.node(c_deps[0]).version, Version::new(2, 0, 0));
    }

    #[test]
    fn tree_printing() {
        let plan = plan(&[
            ("a", rec("1.0.0", &[("b", "^1.0.0"), ("c", "^1.0.0")])),
            ("b", rec("1.0.0", &[("c", "^1.0.0")])),
            ("c", rec("1.0.0", &[])),
        ]);
        let tree = PlanGraph::from_plan(&plan).print_tree(None);

        assert!(tree.contains("a@1.0.0"));
        assert!(tree.contains("├── b@1.0.0"));
        assert!(tree.contains("│   └── c@1.0.0"));
        assert!(tree.contains("└── c@1.0.0"));
    }

    #[test]
    fn depth_limit_truncates() {
        let plan = plan(&[
            ("a", rec("1.0.0", &[("b", "^1.0.0")])),
            ("b", rec("1.0.0", &[("c", "^1.0.0")])),
            ("c", rec("1.0.0", &[])),
        ]);
        let graph = PlanGraph::from_plan(&plan);

        let shallow = graph.print_tree(Some(1));
        assert!(shallow.contains("b@1.0.0"));
        assert!(!shallow.contains("c@1.0.0"));

        let full = graph.print_tree(None);
        assert!(full.contains("c@1.0.0"));
    }

    #[test]
    fn cycle_prints_without_hanging() {
        let plan = plan(&[
            ("a", rec("1.0.0", &[("b", "^1.0.0")])),
            ("b", rec("1.0.0", &[("a", "^1.0.0")])),
        ]);
        let tree = PlanGraph::from_plan(&plan).print_tree(None);

        // No in-degree-zero node exists; the cycle still renders once.
        assert!(tree.contains("a@1.0.0"));
        assert!(tree.contains("b@1.0.0"));
        assert!(tree.contains("└── "));
    }

    #[test]
    fn coexisting_versions_are_distinct_trees() {
        let plan = plan(&[("a", rec("1.0.0", &[])), ("a", rec("2.0.0", &[]))]);
        let graph = PlanGraph::from_plan(&plan);

        assert_eq!(graph.roots().len(), 2);
        let tree = graph.print_tree(None);
        assert!(tree.contains("a@1.0.0\n"));
        assert!(tree.contains("a@2.0.0\n"));
    }

    #[test]
    fn requirements_on_uninstalled_packages_draw_no_edge() {
        // A backtracking plan omits the root; edges onto it just vanish.
        let plan = plan(&[("b", rec("1.0.0", &[("app", "^1.0.0")]))]);
        let graph = PlanGraph::from_plan(&plan);

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.print_tree(None), "b@1.0.0\n");
    }
}
