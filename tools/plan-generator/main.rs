use clap::Parser;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::fs;
use std::path::Path;
use tsumiki::catalog::{BlockCatalog, BlockDescriptor};
use tsumiki::plan::{PlanActions, SemanticPlan};

/// A CLI tool to generate sample plans and catalogs for the tsumiki compiler
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The directory to write the generated JSON files to
    #[arg(short, long, default_value = "generated")]
    output_dir: String,

    /// The number of plans to generate
    #[arg(short, long, default_value_t = 5)]
    count: usize,

    /// Also write a catalog covering every capability the plans need
    #[arg(long)]
    with_catalog: bool,
}

const SUBJECTS: &[&str] = &[
    "math", "physics", "chemistry", "history", "reading", "writing",
];
const OUTCOMES: &[(&str, &str)] = &[
    ("admitted", "rejected"),
    ("passed", "failed"),
    ("qualified", "not qualified"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    fs::create_dir_all(&cli.output_dir)?;
    println!("Generating {} plan(s) in '{}'...", cli.count, cli.output_dir);

    for index in 0..cli.count {
        let plan = generate_plan(&mut rng);
        let path = Path::new(&cli.output_dir).join(format!("plan_{:02}.json", index));
        fs::write(&path, serde_json::to_string_pretty(&plan)?)?;
        println!("-> Wrote '{}'", path.display());
    }

    if cli.with_catalog {
        let catalog = default_catalog();
        let path = Path::new(&cli.output_dir).join("normalized_blocks.json");
        fs::write(&path, serde_json::to_string_pretty(&catalog)?)?;
        println!("-> Wrote '{}'", path.display());
    }

    println!("Done.");
    Ok(())
}

/// Generates one threshold-style word-problem plan: read some subject
/// scores, total them, branch on a pass mark.
fn generate_plan(rng: &mut ThreadRng) -> SemanticPlan {
    let input_count = rng.random_range(1..=3);
    let inputs: Vec<String> = SUBJECTS
        .iter()
        .take(input_count)
        .map(|s| s.to_string())
        .collect();

    let derived = if inputs.len() > 1 {
        vec![format!("total = {}", inputs.join(" + "))]
    } else {
        vec![format!("total = {} * {}", inputs[0], rng.random_range(2..5))]
    };

    let threshold = rng.random_range(2..8) * 25;
    let (then_word, else_word) = OUTCOMES[rng.random_range(0..OUTCOMES.len())];

    SemanticPlan {
        inputs,
        derived,
        condition: Some(format!("total >= {}", threshold)),
        actions: PlanActions {
            then: vec![format!("print {}", then_word)],
            else_: vec![format!("print {}", else_word)],
        },
        error: None,
    }
}

/// A catalog broad enough to validate every generated plan.
fn default_catalog() -> BlockCatalog {
    BlockCatalog::new(vec![
        BlockDescriptor::new("essentials_var_set"),
        BlockDescriptor::new("essentials_var_get"),
        BlockDescriptor::new("essentials_safe_input"),
        BlockDescriptor::new("essentials_num_arithmetic"),
        BlockDescriptor::new("essentials_num_literal"),
        BlockDescriptor::new("essentials_compare"),
        BlockDescriptor::new("essentials_logic_and"),
        BlockDescriptor::new("essentials_logic_or"),
        BlockDescriptor::new("control_if_truthy"),
        BlockDescriptor::new("text_print").with_sample("print(min(a, b))"),
        BlockDescriptor::new("text_literal"),
    ])
}
