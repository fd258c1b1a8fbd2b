use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use cairo_claim::claim::executable_program_digest;
use cairo_claim::{
    hex_to_felt, CheckerConfig, ExecutableDocument, FeltRadix, FeltValue, ProgramHashCheck,
    ProofDocument,
};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cairo-claim", version, about = "Check what a Cairo proof claims")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the program digest of an executable
    Hash {
        #[arg(long, short = 'e', value_name = "FILE")]
        executable: PathBuf,
    },
    /// Compare the program claimed by a proof with an executable
    Check {
        #[arg(long, short = 'p', value_name = "FILE")]
        proof: PathBuf,
        #[arg(long, short = 'e', value_name = "FILE")]
        executable: PathBuf,
    },
    /// Print the outputs claimed by a proof
    Outputs(OutputsArgs),
    /// Print the canonical field element of a hex word
    Felt {
        #[arg(allow_hyphen_values = true)]
        word: String,
        #[arg(long, help = "print as hex instead of decimal")]
        hex: bool,
    },
}

#[derive(Args)]
struct OutputsArgs {
    #[arg(long, short = 'p', value_name = "FILE")]
    proof: PathBuf,
    #[arg(long, value_name = "FILE", help = "JSON checker configuration")]
    config: Option<PathBuf>,
    #[arg(long, help = "reduce out-of-range outputs modulo the field prime")]
    reduce: bool,
    #[arg(long, help = "print as hex instead of decimal")]
    hex: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn read_document(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading document");
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn load_executable(path: &Path) -> Result<ExecutableDocument> {
    ExecutableDocument::from_json(&read_document(path)?)
        .with_context(|| format!("parsing executable {}", path.display()))
}

fn load_proof(path: &Path) -> Result<ProofDocument> {
    ProofDocument::from_json(&read_document(path)?)
        .with_context(|| format!("parsing proof {}", path.display()))
}

fn hash(executable: &Path) -> Result<ExitCode> {
    let executable = load_executable(executable)?;
    let digest = executable_program_digest(executable.bytecode())?;
    println!("{digest}");
    Ok(ExitCode::SUCCESS)
}

fn check(proof: &Path, executable: &Path) -> Result<ExitCode> {
    let proof = load_proof(proof)?;
    let executable = load_executable(executable)?;

    let result = proof.check_program(&executable)?;
    if let Some((claimed, supplied)) = result.digests() {
        println!("claimed:    {claimed}");
        println!("executable: {supplied}");
    }
    println!("{result}");

    Ok(match result {
        ProgramHashCheck::Mismatch { .. } => ExitCode::FAILURE,
        ProgramHashCheck::Match { .. } | ProgramHashCheck::NoClaim => ExitCode::SUCCESS,
    })
}

fn outputs(args: &OutputsArgs) -> Result<ExitCode> {
    let mut config = match &args.config {
        Some(path) => CheckerConfig::load(path)?,
        None => CheckerConfig::default(),
    };
    if args.reduce {
        config.reduce_outputs = true;
    }
    if args.hex {
        config.output_radix = FeltRadix::Hex;
    }

    let proof = load_proof(&args.proof)?;
    let outputs = proof.claimed_outputs(config.reduce_outputs)?;
    if outputs.is_empty() {
        println!("no outputs claimed");
    }
    for (index, output) in outputs.iter().enumerate() {
        if !output.is_valid {
            warn!(index, "output is not a canonical field element");
        }
        println!("[{index}]: {}", output.render(config.output_radix));
    }
    Ok(ExitCode::SUCCESS)
}

fn felt(word: &str, hex: bool) -> Result<ExitCode> {
    let felt = FeltValue::from_magnitude(hex_to_felt(word)?, false);
    let radix = if hex { FeltRadix::Hex } else { FeltRadix::Decimal };
    println!("{}", felt.render(radix));
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Hash { executable } => hash(&executable),
        Commands::Check { proof, executable } => check(&proof, &executable),
        Commands::Outputs(args) => outputs(&args),
        Commands::Felt { word, hex } => felt(&word, hex),
    }
}
