//! `degrees` - how many friendships separate two people.
//!
//! Reads a friendship list (one `A B` pair per line), builds an undirected
//! graph from it, and prints the degrees of separation between the two
//! names given on the command line (`-1` when they are not related).

mod error;
mod input;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use degrees_core::{bfs_neighborhood, degrees_of_separation, shortest_path, Graph};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Degrees of separation between two people in a friendship list
#[derive(Parser, Debug)]
#[command(name = "degrees")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Person to start from
    from: String,

    /// Person to reach
    to: String,

    /// Friendship list, one `A B` pair per line
    #[arg(short, long, default_value = "input.txt", env = "DEGREES_INPUT")]
    input: PathBuf,

    /// Also print one shortest chain of friends
    #[arg(long)]
    path: bool,

    /// Also list everyone within HOPS friendships of FROM
    #[arg(long, value_name = "HOPS", conflicts_with = "path")]
    within: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only results
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let graph = build_graph(&args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report(&graph, &args, &mut out)?;
    out.flush()?;
    Ok(())
}

fn build_graph(args: &Args) -> anyhow::Result<Graph<String>> {
    let start = Instant::now();

    let friendships = input::load_file(&args.input)
        .with_context(|| format!("failed to load friendship list {}", args.input.display()))?;

    let mut graph = Graph::new();
    let loaded = graph.load_pairs(friendships.pairs);

    tracing::info!(
        pairs = loaded,
        skipped = friendships.skipped,
        vertices = graph.vertex_count(),
        arcs = graph.edge_count(),
        load_time_ms = start.elapsed().as_secs_f64() * 1000.0,
        "friendship graph loaded"
    );

    Ok(graph)
}

fn report<W: Write>(graph: &Graph<String>, args: &Args, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", degrees_of_separation(graph, &args.from, &args.to))?;

    if args.path {
        match shortest_path(graph, &args.from, &args.to) {
            Some(chain) => writeln!(out, "{}", chain.join(" -> "))?,
            None => writeln!(out, "no path")?,
        }
    }

    if let Some(hops) = args.within {
        let mut reached = bfs_neighborhood(graph, &args.from, hops).neighbors;
        reached.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.vertex.cmp(&b.vertex)));
        for n in reached {
            writeln!(out, "{} {}", n.vertex, n.distance)?;
        }
    }

    Ok(())
}
