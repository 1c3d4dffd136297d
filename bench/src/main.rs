use std::time::Instant;

use clap::{Parser, ValueEnum};
use degrees_core::{bfs_neighborhood, degree_centrality, degrees_of_separation, Graph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Benchmark degrees-of-separation queries on synthetic friendship graphs
#[derive(Parser, Debug)]
#[command(name = "degrees-bench")]
#[command(about, long_about = None)]
struct Args {
    /// Graph shape to generate
    #[arg(value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Number of people in each generated graph
    #[arg(short, long, default_value_t = 1_000_000)]
    people: u64,

    /// Random separation queries to time per graph
    #[arg(short, long, default_value_t = 20)]
    queries: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Run every generator (default)
    All,
    /// Watts-Strogatz ring lattice + shortcuts
    Smallworld,
    /// Erdos-Renyi uniform random friendships
    Random,
    /// Two dense cliques joined by a thin bridge
    Barbell,
    /// One long line of friends (worst-case depth)
    Chain,
}

type Generator = fn(u64) -> Graph<u64>;

fn main() {
    let args = Args::parse();

    println!("degrees-bench");
    println!("=============");
    println!();

    let generators: Vec<(&str, Generator)> = match args.mode {
        Mode::Smallworld => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        Mode::Random => vec![("Erdos-Renyi random", gen_random)],
        Mode::Barbell => vec![("Barbell (clique-bridge-clique)", gen_barbell)],
        Mode::Chain => vec![("Chain", gen_chain)],
        Mode::All => vec![
            ("Small-world (Watts-Strogatz)", gen_small_world as Generator),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (clique-bridge-clique)", gen_barbell),
            ("Chain", gen_chain),
        ],
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, args.people.max(2), args.queries);
    }
}

fn run_benchmark(name: &str, generator: Generator, people: u64, queries: usize) {
    println!("--- {} ---", name);
    println!("Target: {} people", people);

    let t = Instant::now();
    let graph = generator(people);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s - {} people, {} arcs, ~{:.0}MB",
        gen_time.as_secs_f64(),
        graph.vertex_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    // Reachability from person 0, layer by layer
    println!();
    println!("{:>8} {:>12} {:>10}", "depth", "reached", "time");
    println!("{:->8} {:->12} {:->10}", "", "", "");
    for depth in [1, 2, 3, 6, 10] {
        let t = Instant::now();
        let result = bfs_neighborhood(&graph, &0, depth);
        let elapsed = t.elapsed();
        println!(
            "{:>8} {:>12} {:>8.1}ms",
            depth,
            result.neighbors.len(),
            elapsed.as_secs_f64() * 1000.0
        );
        if result.nodes_visited >= graph.vertex_count() {
            println!("{:>8} (everyone reached)", "");
            break;
        }
    }

    // Best-connected people
    println!();
    let t = Instant::now();
    let top = degree_centrality(&graph, 5);
    let elapsed = t.elapsed();
    println!("{:>12} {:>10}", "person", "friends");
    println!("{:->12} {:->10}", "", "");
    for d in &top {
        println!("{:>12} {:>10}", d.vertex, d.degree);
    }
    println!("Ranked in {:.1}ms", elapsed.as_secs_f64() * 1000.0);

    // Worst case: first to last person
    let far = people - 1;
    println!();
    let t = Instant::now();
    let degrees = degrees_of_separation(&graph, &0, &far);
    println!(
        "Separation 0 -> {}: {} in {:.1}ms",
        far,
        degrees,
        t.elapsed().as_secs_f64() * 1000.0
    );

    if queries > 0 {
        let mut rng = StdRng::seed_from_u64(7);
        let mut total_ms = 0.0;
        let mut unrelated = 0;
        let mut longest = 0;
        for _ in 0..queries {
            let a = rng.gen_range(0..people);
            let b = rng.gen_range(0..people);
            let t = Instant::now();
            let d = degrees_of_separation(&graph, &a, &b);
            total_ms += t.elapsed().as_secs_f64() * 1000.0;
            if d < 0 {
                unrelated += 1;
            }
            longest = longest.max(d);
        }
        println!(
            "{} random queries: avg {:.2}ms, longest {}, unrelated {}",
            queries,
            total_ms / queries as f64,
            longest,
            unrelated
        );
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators - O(n + friendships), single-threaded, deterministic
// ---------------------------------------------------------------------------

fn with_people(people: u64) -> Graph<u64> {
    let mut graph = Graph::with_capacity(people as usize);
    for i in 0..people {
        graph.add_vertex(i);
    }
    graph
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
///
/// Each person befriends K neighbors on the ring; each friendship is
/// rewired to a random person with probability p. High clustering, short
/// separations.
fn gen_small_world(people: u64) -> Graph<u64> {
    let k = 5u64;
    let p = 0.05f64;
    let mut graph = with_people(people);
    let mut rng = StdRng::seed_from_u64(67890);

    for i in 0..people {
        for j in 1..=k {
            let mut friend = (i + j) % people;
            if rng.gen_bool(p) {
                friend = rng.gen_range(0..people);
            }
            if friend != i {
                graph.connect_both(&i, &friend);
            }
        }
    }

    graph
}

/// Erdos-Renyi: uniform random friendships, ~5 per person on average.
fn gen_random(people: u64) -> Graph<u64> {
    let mut graph = with_people(people);
    let mut rng = StdRng::seed_from_u64(54321);

    for _ in 0..people * 5 / 2 {
        let a = rng.gen_range(0..people);
        let b = rng.gen_range(0..people);
        if a != b {
            graph.connect_both(&a, &b);
        }
    }

    graph
}

/// Barbell: two dense cliques bridged by a single path.
///
/// Cliques are capped in size so the edge count stays linear; everyone else
/// forms the bridge. Separation across the bridge is long.
fn gen_barbell(people: u64) -> Graph<u64> {
    let clique = (people / 4).clamp(1, 200);
    let mut graph = with_people(people);

    let left = 0..clique;
    let right = (people - clique)..people;
    for r in [left, right] {
        for a in r.clone() {
            for b in (a + 1)..r.end {
                graph.connect_both(&a, &b);
            }
        }
    }
    for i in (clique - 1)..(people - clique) {
        graph.connect_both(&i, &(i + 1));
    }

    graph
}

/// Chain: person i befriends person i + 1.
fn gen_chain(people: u64) -> Graph<u64> {
    let mut graph = with_people(people);
    for i in 0..people - 1 {
        graph.connect_both(&i, &(i + 1));
    }
    graph
}
