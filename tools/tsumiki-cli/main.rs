use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use tsumiki::prelude::*;

/// A capability-checked compiler from semantic plans to block trees
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the semantic plan JSON file
    plan_path: Option<String>,
    /// Path to the normalized block catalog JSON file
    catalog_path: Option<String>,

    /// Write the block tree JSON to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Pretty-print the block tree JSON
    #[arg(short, long)]
    pretty: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive(cli.pretty);
    } else {
        run_non_interactive(cli);
    }
}

fn run_compilation(plan_path: String, catalog_path: String, output: Option<String>, pretty: bool) {
    let total_start = Instant::now();

    // --- 1. Catalog Loading and Capability Analysis ---
    let load_start = Instant::now();
    let validator = CapabilityValidator::new(&catalog_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog: {}", e)));
    println!("Catalog capabilities: {}", validator.capabilities());

    let plan = SemanticPlan::from_file(&plan_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load plan: {}", e)));
    let load_duration = load_start.elapsed();

    // --- 2. Validation ---
    let validate_start = Instant::now();
    match validator.validate(&plan) {
        Verdict::Ok => println!("Capability validation passed"),
        Verdict::Error { reason } => {
            exit_with_error(&format!("Capability validation failed: {}", reason))
        }
    }
    let validate_duration = validate_start.elapsed();

    // --- 3. Compilation ---
    let compile_start = Instant::now();
    let compiled = SemanticCompiler::new().compile(&plan);
    let compile_duration = compile_start.elapsed();

    for diagnostic in &compiled.diagnostics {
        eprintln!("warning: {}", diagnostic);
    }

    if let Err(e) = compiled.root.check_integrity() {
        exit_with_error(&format!("Compiled tree failed integrity check: {}", e));
    }

    println!(
        "Compilation successful: {} top-level statement(s), {} diagnostic(s)",
        compiled.root.chain_len(),
        compiled.diagnostics.len()
    );

    // --- 4. Output ---
    let json = if pretty {
        serde_json::to_string_pretty(&compiled.root)
    } else {
        serde_json::to_string(&compiled.root)
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize block tree: {}", e)));

    match &output {
        Some(path) => {
            fs::write(path, &json)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to write '{}': {}", path, e)));
            println!("Wrote block tree to '{}'", path);
        }
        None => println!("{}", json),
    }

    let total_duration = total_start.elapsed();
    println!("\n--- Performance Summary ---");
    println!("File Loading:  {:?}", load_duration);
    println!("Validation:    {:?}", validate_duration);
    println!("Compilation:   {:?}", compile_duration);
    println!("---------------------------");
    println!("Total:         {:?}", total_duration);
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let plan_path = cli
        .plan_path
        .unwrap_or_else(|| exit_with_error("Plan path is required in non-interactive mode."));
    let catalog_path = cli
        .catalog_path
        .unwrap_or_else(|| exit_with_error("Catalog path is required in non-interactive mode."));

    run_compilation(plan_path, catalog_path, cli.output, cli.pretty);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(pretty: bool) {
    println!("--- Tsumiki Interactive Mode ---");

    let plan_path = prompt_for_input("Enter plan path", Some("data/plan.json"));
    let catalog_path = prompt_for_input(
        "Enter block catalog path",
        Some("data/normalized_blocks.json"),
    );
    let output_str = prompt_for_input("Enter output path (optional)", None);

    let output = if output_str.is_empty() {
        None
    } else {
        Some(output_str)
    };

    run_compilation(plan_path, catalog_path, output, pretty);
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
