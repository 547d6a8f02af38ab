use std::cmp::Ordering;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use functional_core::filtering::{all, Predicate};
use functional_core::io::path_filtering::{by_name, by_regex, by_type};
use functional_core::io::path_ordering::{by_path_lexicographically, by_path_numerically};
use functional_core::io::{find_paths, find_paths_recursively, format_tree};
use functional_core::iterables::take;
use functional_core::ordering::Comparator;
use functional_core::permutations::permutations;
use functional_core::seq::{iterable, Sequence};
use functional_core::strings::join;
use functional_core::timing::timed;
use functional_core::watching::{parse_kinds, watch_directories_with};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "functional-core")]
#[command(version, about = "Lazy sequence combinators, driven from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the permutations of the given items in lexicographic order
    Permutations {
        items: Vec<String>,
        /// Stop after this many permutations
        #[arg(short, long)]
        limit: Option<isize>,
    },
    /// Print the tree below a directory
    Tree {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// List the paths below a directory
    Find {
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Glob the file name has to match
        #[arg(long)]
        name: Option<String>,
        /// Regular expression the whole path has to match
        #[arg(long)]
        regex: Option<String>,
        /// Only list files (f) or directories (d)
        #[arg(long = "type")]
        kind: Option<String>,
        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
        /// Sort numbers in paths by value
        #[arg(short, long)]
        numeric: bool,
    },
    /// Print file-system events in the given directories until interrupted
    Watch {
        #[arg(required = true)]
        directories: Vec<PathBuf>,
        /// Event types to report: create, delete or modify
        #[arg(short, long, value_delimiter = ',')]
        events: Vec<String>,
    },
}

type PathPredicate = Box<dyn FnMut(&PathBuf) -> bool>;

fn boxed(mut predicate: impl Predicate<PathBuf> + 'static) -> PathPredicate {
    Box::new(move |path: &PathBuf| predicate.test(path))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Permutations { items, limit } => {
            let orderings = permutations(items);
            let printed = match limit {
                Some(limit) => print_all(take(limit, &orderings)),
                None => print_all(&orderings),
            };
            info!(printed, "done");
        },
        Commands::Tree { path } => {
            let tree = format_tree(&path).with_context(|| format!("reading {}", path.display()))?;
            print!("{tree}");
        },
        Commands::Find { path, name, regex, kind, recursive, numeric } => {
            let mut filters: Vec<PathPredicate> = Vec::new();
            if let Some(name) = name {
                filters.push(boxed(by_name(&name)?));
            }
            if let Some(regex) = regex {
                filters.push(boxed(by_regex(&regex)?));
            }
            if let Some(kind) = kind {
                filters.push(boxed(by_type(&kind)?));
            }
            let comparator: Box<dyn FnMut(&PathBuf, &PathBuf) -> Ordering> = if numeric {
                let mut comparator = by_path_numerically();
                Box::new(move |a: &PathBuf, b: &PathBuf| comparator.compare(a, b))
            } else {
                let mut comparator = by_path_lexicographically();
                Box::new(move |a: &PathBuf, b: &PathBuf| comparator.compare(a, b))
            };

            let found = timed("find", || {
                if recursive {
                    find_paths_recursively(&path, all(filters), comparator)
                } else {
                    find_paths(&path, all(filters), comparator)
                }
            })?;
            for path in found {
                println!("{}", path.display());
            }
        },
        Commands::Watch { directories, events } => {
            let kinds = parse_kinds(&events)?;
            watch_directories_with(&kinds, &directories, |event, _| {
                println!("{} {} {}", event.kind, event.directory.display(), event.path.display());
            })?;
        },
    }

    Ok(())
}

fn print_all<S>(seq: S) -> usize
where
    S: Sequence<Item = Vec<String>>,
{
    let mut count = 0;
    for permutation in seq.iter() {
        println!("{}", join(" ", iterable(permutation)));
        count += 1;
    }
    count
}
