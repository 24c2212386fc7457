//! Command-line configuration. Flags win over environment variables, which win
//! over the built-in defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use graph_sim::WeightedGraph;
use sort::SortAlgorithm;

#[derive(Parser, Debug)]
#[command(name = "sim")]
#[command(about = "Walk through graph algorithms one step at a time, or run a classic sort")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// How snapshots and results are written to stdout
    #[arg(long, short = 'f', value_enum, default_value = "text", env = "SIM_FORMAT", global = true)]
    pub format: OutputFormat,

    /// Pause between steps, in milliseconds
    #[arg(long, default_value_t = 0, env = "SIM_PAUSE_MS", global = true)]
    pub pause_ms: u64,

    /// Log filter, e.g. `debug` or `graph_sim=trace`
    #[arg(long, default_value = "warn", env = "RUST_LOG", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Shortest paths from a source node
    Dijkstra {
        /// Source node
        #[arg(long, short, default_value = "A")]
        source: String,

        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Minimum spanning tree grown from a start node
    Prim {
        /// Start node (defaults to the first node of the graph)
        #[arg(long)]
        start: Option<String>,

        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Minimum or maximum spanning tree from the sorted edge list
    Kruskal {
        /// Build the maximum spanning tree instead
        #[arg(long)]
        maximum: bool,

        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Sort integers with one of the collection's algorithms
    Sort {
        /// Algorithm name, e.g. `heap_sort` or `heap`
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: SortAlgorithm,

        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// JSON graph document: {"A": {"B": 4}, "B": {"A": 4}}
    #[arg(long, short)]
    pub graph: Option<PathBuf>,
}

impl GraphArgs {
    /// Reads the graph file, or builds `fallback` when no file was given.
    pub fn load(
        &self,
        fallback: fn() -> graph_sim::Result<WeightedGraph>,
    ) -> Result<WeightedGraph> {
        let Some(path) = &self.graph else {
            return fallback().context("building built-in example graph");
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading graph file {}", path.display()))?;
        WeightedGraph::from_json(&text)
            .with_context(|| format!("parsing graph file {}", path.display()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable narration
    Text,
    /// One JSON object per line, for external renderers
    Json,
}

fn parse_algorithm(name: &str) -> std::result::Result<SortAlgorithm, String> {
    sort::algorithm_from_name(name).ok_or_else(|| {
        let known: Vec<&str> = sort::all_algorithms()
            .iter()
            .map(|&a| sort::algorithm_name(a))
            .collect();
        format!("unknown algorithm `{name}`; expected one of {}", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_graph_subcommands() {
        let args = CliArgs::try_parse_from(["sim", "kruskal", "--maximum", "-f", "json"]).unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert!(matches!(args.command, Command::Kruskal { maximum: true, .. }));

        let args = CliArgs::try_parse_from(["sim", "dijkstra", "--source", "C", "--pause-ms", "5"])
            .unwrap();
        assert_eq!(args.pause_ms, 5);
        assert!(matches!(args.command, Command::Dijkstra { ref source, .. } if source == "C"));
    }

    #[test]
    fn parses_sort_values_including_negatives() {
        let args =
            CliArgs::try_parse_from(["sim", "sort", "--algorithm", "quick", "3", "-1", "2"]).unwrap();
        match args.command {
            Command::Sort { algorithm, values } => {
                assert_eq!(algorithm, SortAlgorithm::QuickSort);
                assert_eq!(values, [3, -1, 2]);
            }
            other => panic!("unexpected command {other:?}"),
        }

        assert!(CliArgs::try_parse_from(["sim", "sort", "-a", "bogo", "1"]).is_err());
    }

    #[test]
    fn missing_graph_file_is_reported_with_path() {
        let args = GraphArgs {
            graph: Some(PathBuf::from("/definitely/not/here.json")),
        };
        let err = args.load(graph_sim::fixtures::mst_example).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }
}
