use clap::Parser;

/// Boolean expression analyzer: truth table, Karnaugh map, sum of products.
///
/// Operators: `y` (AND), `v` (OR), `~` (NOT), `-->` (implication),
/// `<-->` (biconditional). Example: "(P y Q) v (~S <--> T)".
#[derive(Debug, Parser)]
#[command(name = "kmap", version, about)]
struct Cli {
    /// The boolean expression to analyze.
    expression: String,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        if cli.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Warn
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let report = kmap_rs::report::analyze(&cli.expression)?;
    print!("{}", report);

    Ok(())
}
