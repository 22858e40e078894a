use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "indexgraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Criterion benchmarks and summarize them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Also compile with the `tracing` feature enabled
        #[arg(long, default_value_t = false)]
        tracing: bool,
    },
}

const BENCHES: &[&str] = &[
    "disjoint_set_benchmark",
    "indexed_heap_benchmark",
    "graph_benchmark",
];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            tracing,
        } => {
            if !report_only {
                run_benchmarks(quick, tracing)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, tracing: bool) -> Result<()> {
    println!("Running benchmarks...");

    for bench in BENCHES {
        println!("\n>>> Benchmark: {}", bench);
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.arg("bench").arg("--bench").arg(bench);
        if tracing {
            cmd.arg("--features").arg("tracing");
        }

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench {}", bench))?;

        if !status.success() {
            eprintln!("Warning: Benchmark {} failed", bench);
        } else {
            println!("Finished {} in {:.2?}", bench, start.elapsed());
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let mut results: BTreeMap<String, f64> = BTreeMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | Mean time | Iterations/s |")?;
    writeln!(file, "|---|---|---|")?;

    for (workload, time_ns) in &results {
        let per_sec = 1e9 / time_ns;
        let rate = if per_sec > 1_000_000.0 {
            format!("{:.2}M", per_sec / 1_000_000.0)
        } else if per_sec > 1_000.0 {
            format!("{:.2}K", per_sec / 1_000.0)
        } else {
            format!("{:.0}", per_sec)
        };
        writeln!(file, "| {} | {} | {} |", workload, format_time(*time_ns), rate)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_time(time_ns: f64) -> String {
    if time_ns > 1e6 {
        format!("{:.2} ms", time_ns / 1e6)
    } else if time_ns > 1e3 {
        format!("{:.2} µs", time_ns / 1e3)
    } else {
        format!("{:.0} ns", time_ns)
    }
}

fn collect_results(dir: &Path, results: &mut BTreeMap<String, f64>) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        // Structure: .../<workload>/new/estimates.json
        let Some(run_dir) = path.parent() else { continue };
        if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(workload_dir) = run_dir.parent() else { continue };

        // Workload name: the benchmark.json id is the most faithful.
        let workload = fs::read_to_string(workload_dir.join("new/benchmark.json"))
            .ok()
            .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok())
            .and_then(|json| json.get("full_id").and_then(|id| id.as_str()).map(str::to_owned))
            .or_else(|| {
                workload_dir
                    .file_name()
                    .and_then(|s| s.to_str())
                    .map(str::to_owned)
            });
        let Some(workload) = workload else { continue };

        if let Ok(content) = fs::read_to_string(&path) {
            if let Ok(json) = serde_json::from_str::<serde_json::Value>(&content) {
                if let Some(mean) = json.get("mean").and_then(|m| m.get("point_estimate")) {
                    let time_ns = mean.as_f64().unwrap_or(0.0);
                    if time_ns > 0.0 {
                        results.insert(workload, time_ns);
                    }
                }
            }
        }
    }
}
