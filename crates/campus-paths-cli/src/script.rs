//! Interpreter for the graph scripting language.
//!
//! Each non-blank line is a command followed by whitespace-separated
//! arguments. Blank lines and lines starting with `#` are echoed unchanged.
//!
//! | Command                | Output                                          |
//! |------------------------|-------------------------------------------------|
//! | `CreateGraph g`        | `created graph g`                               |
//! | `AddNode g n`          | `added node n to g`                             |
//! | `AddEdge g a b w`      | `added edge w from a to b in g`                 |
//! | `ListNodes g`          | `g contains: n1 n2 ...`                         |
//! | `ListChildren g n`     | `the children of n in g are: c(w) ...`          |
//! | `FindPath g a b`       | `path from a to b:` then one line per segment   |
//!
//! Weights are printed with three decimals. A command that fails prints
//! `Exception: <error>` and the script continues.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use campus_paths_lib::{shortest_path, Distance, LabeledGraph};
use thiserror::Error;
use tracing::debug;

type ScriptGraph = LabeledGraph<String, Distance>;

/// Failure of a single script command.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Bad arguments to {command}: [{}]", .arguments.join(", "))]
    BadArguments {
        command: String,
        arguments: Vec<String>,
    },

    #[error("unknown graph {0}")]
    UnknownGraph(String),

    #[error("invalid edge weight {0}")]
    InvalidWeight(String),

    #[error(transparent)]
    Graph(#[from] campus_paths_lib::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Executes script commands against a set of named graphs, writing the
/// transcript to `out`.
pub struct ScriptRunner<W> {
    graphs: BTreeMap<String, ScriptGraph>,
    out: W,
}

impl<W: Write> ScriptRunner<W> {
    pub fn new(out: W) -> Self {
        Self {
            graphs: BTreeMap::new(),
            out,
        }
    }

    /// Run every line of `input`. Only I/O failures abort the run.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            self.execute_line(&line?)?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Execute a single script line.
    pub fn execute_line(&mut self, line: &str) -> io::Result<()> {
        if line.trim().is_empty() || line.starts_with('#') {
            return writeln!(self.out, "{line}");
        }

        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return Ok(());
        };
        let arguments: Vec<&str> = tokens.collect();
        debug!(command, args = arguments.len(), "executing script command");

        match self.dispatch(command, &arguments) {
            Ok(()) => Ok(()),
            Err(ScriptError::Io(err)) => Err(err),
            Err(err) => writeln!(self.out, "Exception: {err}"),
        }
    }

    /// Consume the runner and return the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn dispatch(&mut self, command: &str, arguments: &[&str]) -> Result<(), ScriptError> {
        match command {
            "CreateGraph" => {
                let [graph] = expect_args::<1>(command, arguments)?;
                self.create_graph(graph)
            }
            "AddNode" => {
                let [graph, node] = expect_args::<2>(command, arguments)?;
                self.add_node(graph, node)
            }
            "AddEdge" => {
                let [graph, from, to, weight] = expect_args::<4>(command, arguments)?;
                self.add_edge(graph, from, to, weight)
            }
            "ListNodes" => {
                let [graph] = expect_args::<1>(command, arguments)?;
                self.list_nodes(graph)
            }
            "ListChildren" => {
                let [graph, node] = expect_args::<2>(command, arguments)?;
                self.list_children(graph, node)
            }
            "FindPath" => {
                let [graph, from, to] = expect_args::<3>(command, arguments)?;
                self.find_path(graph, from, to)
            }
            other => Ok(writeln!(self.out, "Unrecognized command: {other}")?),
        }
    }

    fn create_graph(&mut self, name: &str) -> Result<(), ScriptError> {
        self.graphs.insert(name.to_string(), ScriptGraph::new());
        writeln!(self.out, "created graph {name}")?;
        Ok(())
    }

    fn add_node(&mut self, graph_name: &str, node: &str) -> Result<(), ScriptError> {
        self.graph_mut(graph_name)?.add_node(node.to_string());
        writeln!(self.out, "added node {node} to {graph_name}")?;
        Ok(())
    }

    fn add_edge(
        &mut self,
        graph_name: &str,
        from: &str,
        to: &str,
        weight: &str,
    ) -> Result<(), ScriptError> {
        let value: f64 = weight
            .parse()
            .map_err(|_| ScriptError::InvalidWeight(weight.to_string()))?;
        let label = Distance::new(value)?;
        self.graph_mut(graph_name)?
            .add_edge(from.to_string(), to.to_string(), label)?;
        writeln!(
            self.out,
            "added edge {value:.3} from {from} to {to} in {graph_name}"
        )?;
        Ok(())
    }

    fn list_nodes(&mut self, graph_name: &str) -> Result<(), ScriptError> {
        let graph = self.graph(graph_name)?;
        let mut line = format!("{graph_name} contains:");
        for node in graph.nodes() {
            line.push(' ');
            line.push_str(node);
        }
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn list_children(&mut self, graph_name: &str, node: &str) -> Result<(), ScriptError> {
        let children = self.graph(graph_name)?.children(&node.to_string())?;
        let mut line = format!("the children of {node} in {graph_name} are:");
        for (child, weight) in children {
            line.push_str(&format!(" {child}({weight})"));
        }
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn find_path(&mut self, graph_name: &str, from: &str, to: &str) -> Result<(), ScriptError> {
        let graph = self.graph(graph_name)?;
        let start = from.to_string();
        let end = to.to_string();

        let missing: Vec<&str> = [(&start, from), (&end, to)]
            .into_iter()
            .filter(|(node, _)| !graph.contains(node))
            .map(|(_, name)| name)
            .collect();
        if !missing.is_empty() {
            let mut lines = String::new();
            for name in missing {
                lines.push_str(&format!("unknown node {name}\n"));
            }
            write!(self.out, "{lines}")?;
            return Ok(());
        }

        let mut transcript = format!("path from {from} to {to}:\n");
        match shortest_path(graph, &start, &end) {
            None => transcript.push_str("no path found\n"),
            Some(path) => {
                for segment in &path {
                    transcript.push_str(&format!(
                        "{} to {} with weight {:.3}\n",
                        segment.start(),
                        segment.end(),
                        segment.cost()
                    ));
                }
                transcript.push_str(&format!("total cost: {:.3}\n", path.cost()));
            }
        }
        write!(self.out, "{transcript}")?;
        Ok(())
    }

    fn graph(&self, name: &str) -> Result<&ScriptGraph, ScriptError> {
        self.graphs
            .get(name)
            .ok_or_else(|| ScriptError::UnknownGraph(name.to_string()))
    }

    fn graph_mut(&mut self, name: &str) -> Result<&mut ScriptGraph, ScriptError> {
        self.graphs
            .get_mut(name)
            .ok_or_else(|| ScriptError::UnknownGraph(name.to_string()))
    }
}

fn expect_args<'a, const N: usize>(
    command: &str,
    arguments: &[&'a str],
) -> Result<[&'a str; N], ScriptError> {
    <[&str; N]>::try_from(arguments).map_err(|_| ScriptError::BadArguments {
        command: command.to_string(),
        arguments: arguments.iter().map(|arg| arg.to_string()).collect(),
    })
}
