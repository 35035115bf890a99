use clap::Parser;

/// Enforce a maximum JVM bytecode level across a project's dependency closure
#[derive(Parser, Debug)]
#[command(name = "bytecode-guard")]
#[command(version)]
#[command(
    about = "Fail the build when a dependency ships class files above the supported JVM bytecode level",
    long_about = None
)]
pub struct Args {
    /// Path to the dependency resolution manifest (JSON)
    #[arg(short, long)]
    pub manifest: Option<String>,

    /// Root of the local artifact repository (defaults to ~/.m2/repository)
    #[arg(short, long)]
    pub repository: Option<String>,

    /// Maximum supported class-file major version (51 = Java 7, 52 = Java 8, 53 = Java 9)
    #[arg(short = 'l', long)]
    pub max_bytecode_level: Option<u16>,

    /// Scan test-scope dependencies instead of pruning them
    #[arg(long)]
    pub include_scope_test: bool,

    /// Scan provided-scope dependencies instead of pruning them
    #[arg(long)]
    pub include_scope_provided: bool,

    /// Path to a configuration file (defaults to ./bytecode-guard.toml when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print debug diagnostics while scanning
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
