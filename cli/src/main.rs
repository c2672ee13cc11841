mod error_formatter;
mod formatter;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use formatter::{Formatter, OutputFormat, RunReport};
use springboard::algorithms::duplicates::remove_adjacent_duplicates_bounce;
use springboard::algorithms::factorial::{factorial_bounce, factorial_cps};
use springboard::algorithms::numbering::depth_first_numbers_bounce;
use springboard::algorithms::search::{binary_search_bounce, linear_search_bounce};
use springboard::algorithms::tree_size::{tree_size_bounce, TreeSizeStrategy};
use springboard::{Continuation, Driver, DriverLimits, NextList, SliceView, Tree};
use tracing::debug;

#[derive(Parser)]
#[command(name = "springboard")]
#[command(about = "Run deep recursive algorithms on a trampoline.")]
#[command(
    long_about = "Springboard runs recursive algorithms one thunk at a time, so recursion depth never touches the native stack.\nEach command runs one worked algorithm through the driver and prints its result, optionally with driver statistics."
)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    driver: DriverArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DriverArgs {
    /// Abort after forcing this many thunks
    #[arg(long, global = true)]
    max_steps: Option<u64>,
    /// Abort a run that takes longer than this many milliseconds
    #[arg(long = "timeout-ms", global = true)]
    timeout_ms: Option<u64>,
    /// Print driver statistics (thunks forced, elapsed time)
    #[arg(long, global = true)]
    stats: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
}

impl DriverArgs {
    fn driver(&self) -> Driver {
        let mut limits = DriverLimits::new();
        if let Some(max_steps) = self.max_steps {
            limits = limits.with_max_steps(max_steps);
        }
        if let Some(timeout_ms) = self.timeout_ms {
            limits = limits.with_max_evaluation_time_ms(timeout_ms);
        }
        Driver::with_limits(limits)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute n! with arbitrary precision
    ///
    /// Uses the accumulator version by default, or the continuation-passing
    /// version with --cps.
    Factorial {
        /// The number to take the factorial of
        n: u64,
        /// Use the continuation-passing version
        #[arg(long)]
        cps: bool,
    },
    /// Search for a value in a list
    ///
    /// Linear search walks a linked list; --binary searches a sorted list
    /// by halving an index window.
    #[command(allow_negative_numbers = true)]
    Search {
        /// Value to look for
        needle: i64,
        /// Values to search in
        values: Vec<i64>,
        /// Use binary search (values must be sorted)
        #[arg(long)]
        binary: bool,
    },
    /// Count the nodes of a generated binary tree
    TreeSize {
        #[command(flatten)]
        shape: ShapeArgs,
        /// Where the right-subtree call is resolved: asymmetric or fully-thunked
        #[arg(long, default_value = "fully-thunked")]
        strategy: TreeSizeStrategy,
    },
    /// Remove adjacent duplicates from a list
    #[command(allow_negative_numbers = true)]
    Dedup {
        /// Values to deduplicate
        values: Vec<i64>,
    },
    /// Number the leaves of a balanced tree depth-first
    Number {
        /// Number of levels of the balanced tree
        #[arg(long)]
        levels: u32,
    },
}

/// Each right turn of an asymmetric size computation nests a driver run on the
/// native stack
const MAX_ASYMMETRIC_RIGHT_SPINE: usize = 1_000;

#[derive(Args)]
#[group(required = true, multiple = false)]
struct ShapeArgs {
    /// Perfectly balanced tree with this many levels
    #[arg(long)]
    levels: Option<u32>,
    /// Spine of this many internal nodes descending to the left
    #[arg(long)]
    left_spine: Option<usize>,
    /// Spine of this many internal nodes descending to the right
    #[arg(long)]
    right_spine: Option<usize>,
}

impl ShapeArgs {
    fn build(&self) -> Result<(Tree<String>, String)> {
        match (self.levels, self.left_spine, self.right_spine) {
            (Some(levels), _, _) => Ok((
                Tree::balanced(levels)?,
                format!("balanced tree, {} levels", levels),
            )),
            (_, Some(n), _) => Ok((Tree::left_spine(n), format!("left spine, {} nodes", n))),
            (_, _, Some(n)) => Ok((Tree::right_spine(n), format!("right spine, {} nodes", n))),
            (None, None, None) => bail!("one of --levels, --left-spine or --right-spine is required"),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let driver = cli.driver.driver();
    let result = match &cli.command {
        Commands::Factorial { n, cps } => factorial_command(&driver, *n, *cps),
        Commands::Search {
            needle,
            values,
            binary,
        } => search_command(&driver, *needle, values, *binary),
        Commands::TreeSize { shape, strategy } => tree_size_command(&driver, shape, *strategy),
        Commands::Dedup { values } => dedup_command(&driver, values),
        Commands::Number { levels } => number_command(&driver, *levels),
    };

    match result {
        Ok(report) => {
            let formatter = Formatter::default();
            match formatter.format_report(&report, cli.driver.format, cli.driver.stats) {
                Ok(output) => print!("{}", output),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            if let Some(spring_err) = e.downcast_ref::<springboard::SpringError>() {
                eprintln!("{}", error_formatter::format_error(spring_err));
            } else {
                eprintln!("Error: {}", e);
            }
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "springboard=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn factorial_command(driver: &Driver, n: u64, cps: bool) -> Result<RunReport> {
    let (value, stats) = if cps {
        driver.run_with_stats(factorial_cps(n, Continuation::identity()))?
    } else {
        driver.run_with_stats(factorial_bounce(n))?
    };
    debug!(n, cps, steps = stats.steps, "factorial finished");

    let algorithm = if cps { "factorial (cps)" } else { "factorial" };
    Ok(RunReport::new(algorithm, format!("{}! = {}", n, value), stats))
}

fn search_command(driver: &Driver, needle: i64, values: &[i64], binary: bool) -> Result<RunReport> {
    let (found, stats) = if binary {
        if !values.windows(2).all(|pair| pair[0] <= pair[1]) {
            return Err(springboard::SpringError::invalid_input(
                "binary search needs the values in ascending order",
            )
            .into());
        }
        driver.run_with_stats(binary_search_bounce(values, &needle))?
    } else {
        let list: NextList<i64> = values.iter().copied().collect();
        driver.run_with_stats(linear_search_bounce(list, &needle))?
    };

    let algorithm = if binary {
        "binary search"
    } else {
        "linear search"
    };
    let verdict = if found { "found" } else { "not found" };
    Ok(RunReport::new(
        algorithm,
        format!("{} {}", needle, verdict),
        stats,
    ))
}

fn tree_size_command(
    driver: &Driver,
    shape: &ShapeArgs,
    strategy: TreeSizeStrategy,
) -> Result<RunReport> {
    if let (TreeSizeStrategy::Asymmetric, Some(n)) = (strategy, shape.right_spine) {
        if n > MAX_ASYMMETRIC_RIGHT_SPINE {
            return Err(springboard::SpringError::invalid_input(format!(
                "a right spine of {} nodes is too deep for the asymmetric strategy (at most {}), use --strategy fully-thunked",
                n, MAX_ASYMMETRIC_RIGHT_SPINE
            ))
            .into());
        }
    }

    let (tree, description) = shape.build()?;
    let (size, stats) = driver.run_with_stats(tree_size_bounce(&tree, strategy, driver))?;
    let size = size?;

    Ok(RunReport::new(
        format!("tree size ({})", strategy),
        format!("{}: {} nodes", description, size),
        stats,
    ))
}

fn dedup_command(driver: &Driver, values: &[i64]) -> Result<RunReport> {
    let (kept, stats) =
        driver.run_with_stats(remove_adjacent_duplicates_bounce(SliceView::new(values)))?;
    let rendered: Vec<String> = kept.iter().map(|v| v.to_string()).collect();

    Ok(RunReport::new(
        "remove adjacent duplicates",
        format!("[{}]", rendered.join(", ")),
        stats,
    ))
}

fn number_command(driver: &Driver, levels: u32) -> Result<RunReport> {
    let tree = Tree::balanced(levels)?;
    let ((numbered, table), stats) = driver.run_with_stats(depth_first_numbers_bounce(&tree))?;
    let root = numbered.value();

    let mut leaves: Vec<(&String, &usize)> = table.iter().collect();
    leaves.sort_by_key(|(_, number)| **number);

    let mut report = RunReport::new(
        "depth-first numbering",
        format!(
            "root {} covers leaves {}..={}",
            root.value, root.range.low, root.range.high
        ),
        stats,
    );
    for (leaf, number) in leaves {
        report.add_detail(leaf.clone(), number.to_string());
    }
    Ok(report)
}
