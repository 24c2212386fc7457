use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};
use graph_sim::fixtures;
use graph_sim::{
    DijkstraRun, KruskalRun, PrimRun, ShortestPaths, SpanningTree, TreeEdge, TreeKind,
    WeightedGraph,
};
use serde::Serialize;
use sort::SortAlgorithm;
use tracing::info;

use crate::config::Command;
use crate::narrate::Narrator;

pub fn run<W: Write>(command: Command, narrator: &mut Narrator<W>) -> Result<()> {
    match command {
        Command::Dijkstra { source, graph } => {
            let graph = graph.load(fixtures::dijkstra_example)?;
            dijkstra(&graph, &source, narrator)
        }
        Command::Prim { start, graph } => {
            let graph = graph.load(fixtures::mst_example)?;
            prim(&graph, start.as_deref(), narrator)
        }
        Command::Kruskal { maximum, graph } => {
            let graph = graph.load(fixtures::mst_example)?;
            let kind = if maximum {
                TreeKind::Maximum
            } else {
                TreeKind::Minimum
            };
            kruskal(&graph, kind, narrator)
        }
        Command::Sort { algorithm, values } => sort_values(algorithm, values, narrator),
    }
}

fn dijkstra<W: Write>(graph: &WeightedGraph, source: &str, narrator: &mut Narrator<W>) -> Result<()> {
    let mut run = DijkstraRun::new(graph, source)
        .with_context(|| format!("starting Dijkstra from `{source}`"))?;
    let steps = narrator.play(run.by_ref())?;
    let paths = run.finish();
    info!(steps, source, "dijkstra narrated");
    narrator.result(&RouteTable::new(graph, &paths))
}

fn prim<W: Write>(graph: &WeightedGraph, start: Option<&str>, narrator: &mut Narrator<W>) -> Result<()> {
    let mut run = PrimRun::new(graph, start).context("starting Prim")?;
    let steps = narrator.play(run.by_ref())?;
    let tree = run.finish();
    info!(steps, "prim narrated");
    narrator.result(&TreeSummary::new("prim", TreeKind::Minimum, graph, tree))
}

fn kruskal<W: Write>(graph: &WeightedGraph, kind: TreeKind, narrator: &mut Narrator<W>) -> Result<()> {
    let mut run = KruskalRun::new(graph, kind).context("starting Kruskal")?;
    let steps = narrator.play(run.by_ref())?;
    let tree = run.finish();
    info!(steps, %kind, "kruskal narrated");
    narrator.result(&TreeSummary::new("kruskal", kind, graph, tree))
}

fn sort_values<W: Write>(
    algorithm: SortAlgorithm,
    mut values: Vec<i64>,
    narrator: &mut Narrator<W>,
) -> Result<()> {
    let name = sort::algorithm_name(algorithm);
    sort::sort_i64(algorithm, &mut values).with_context(|| format!("running {name}"))?;
    info!(algorithm = name, len = values.len(), "sorted");
    narrator.result(&SortOutcome {
        algorithm: name,
        stable: sort::is_stable(algorithm),
        sorted: values,
    })
}

#[derive(Debug, Serialize)]
struct Route<'g> {
    node: &'g str,
    distance: Option<u128>,
    path: Option<Vec<&'g str>>,
}

#[derive(Debug, Serialize)]
struct RouteTable<'g> {
    source: &'g str,
    routes: Vec<Route<'g>>,
}

impl<'g> RouteTable<'g> {
    fn new(graph: &'g WeightedGraph, paths: &ShortestPaths<'g>) -> Self {
        let routes = graph
            .names()
            .map(|node| Route {
                node,
                distance: paths.distance(node),
                path: paths.path_to(node),
            })
            .collect();
        Self {
            source: paths.source(),
            routes,
        }
    }
}

impl fmt::Display for RouteTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shortest routes from {}:", self.source)?;
        for route in &self.routes {
            match (&route.path, route.distance) {
                (Some(path), Some(distance)) => write!(
                    f,
                    "\n  {}: {} (distance {distance})",
                    route.node,
                    path.join(" -> ")
                )?,
                _ => write!(f, "\n  {}: unreachable", route.node)?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct TreeSummary<'g> {
    algorithm: &'static str,
    kind: TreeKind,
    edges: Vec<TreeEdge<'g>>,
    total_weight: u128,
    spanning: bool,
}

impl<'g> TreeSummary<'g> {
    fn new(
        algorithm: &'static str,
        kind: TreeKind,
        graph: &WeightedGraph,
        tree: SpanningTree<'g>,
    ) -> Self {
        let spanning = tree.spans(graph.node_count());
        Self {
            algorithm,
            kind,
            total_weight: tree.total_weight,
            edges: tree.edges,
            spanning,
        }
    }
}

impl fmt::Display for TreeSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = if self.spanning { "tree" } else { "forest" };
        write!(f, "{} spanning {shape} ({}):", capitalize(&self.kind.to_string()), self.algorithm)?;
        for edge in &self.edges {
            write!(f, "\n  {edge}")?;
        }
        write!(f, "\nTotal weight: {}", self.total_weight)?;
        if !self.spanning {
            write!(f, "\nGraph is disconnected; not every node is covered.")?;
        }
        Ok(())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Serialize)]
struct SortOutcome {
    algorithm: &'static str,
    stable: bool,
    sorted: Vec<i64>,
}

impl fmt::Display for SortOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.algorithm, self.sorted)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;
    use serde_json::Value;

    use super::*;
    use crate::config::CliArgs;

    fn run_to_string(argv: &[&str]) -> Result<String> {
        let args = CliArgs::try_parse_from(argv)?;
        let mut narrator = Narrator::new(Vec::new(), args.format, Duration::ZERO);
        run(args.command, &mut narrator)?;
        Ok(String::from_utf8(narrator.into_inner())?)
    }

    #[test]
    fn dijkstra_text_lists_routes() {
        let out = run_to_string(&["sim", "dijkstra", "--source", "A"]).unwrap();
        assert!(out.starts_with("--- Step 1 ---"));
        assert!(out.contains("Shortest routes from A:"));
        assert!(out.contains("  B: A -> D -> B (distance 3)"));
        assert!(out.contains("  C: A -> D -> E -> C (distance 7)"));
    }

    #[test]
    fn json_mode_writes_one_object_per_line() {
        let out = run_to_string(&["sim", "--format", "json", "prim", "--start", "A"]).unwrap();
        let lines: Vec<Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines[0]["event"]["kind"], "started");
        assert_eq!(lines[0]["step"], 1);
        let last = lines.last().unwrap();
        assert_eq!(last["result"]["total_weight"], 37);
        assert_eq!(last["result"]["spanning"], true);
        assert_eq!(last["result"]["edges"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn kruskal_maximum_summary() {
        let out = run_to_string(&["sim", "kruskal", "--maximum"]).unwrap();
        assert!(out.starts_with("--- Step 1 ---\nSorted edges: [D - F (weight 14), "));
        assert!(out.contains("Maximum spanning tree (kruskal):"));
        assert!(out.ends_with("Total weight: 71\n"));
    }

    #[test]
    fn sort_reports_sorted_values_and_domain_errors() {
        let out = run_to_string(&["sim", "sort", "-a", "heap", "5", "-2", "9", "0"]).unwrap();
        assert_eq!(out, "heap_sort: [-2, 0, 5, 9]\n");

        let err = run_to_string(&["sim", "sort", "-a", "counting", "3", "-1"]).unwrap_err();
        assert!(format!("{err:#}").contains("counting_sort"));
    }

    #[test]
    fn unknown_source_is_an_error() {
        let err = run_to_string(&["sim", "dijkstra", "-s", "Q"]).unwrap_err();
        assert!(format!("{err:#}").contains("`Q`"));
    }
}
