use std::fmt::{self, Display};
use std::fs::File;
use std::hash::Hash;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use argitertools::{
    argmax, argmin, argminmax, argrank, argsequal, argsort_ordered, positions_of, try_args_match,
    ArgError, ArgsMatch, MatchMode, SortOrder,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "argitertools",
    about = "Pick indices instead of elements from line-oriented input"
)]
struct Cli {
    /// Input file with one value per line (defaults to stdin).
    #[arg(long, global = true)]
    input: Option<PathBuf>,
    /// How each line is interpreted.
    #[arg(long, value_enum, default_value_t = ValueKind::Int, global = true)]
    kind: ValueKind,
    /// Log at debug level unless RUST_LOG overrides it.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Index of the first maximum.
    Max,
    /// Index of the first minimum.
    Min,
    /// Indices of the first minimum and first maximum.
    Minmax,
    /// Indices in stable sorted order.
    Sort {
        /// Largest value first.
        #[arg(long)]
        descending: bool,
    },
    /// Sorted position of every value.
    Rank,
    /// Indices holding the given value.
    Where {
        /// Value to look for, parsed like the input lines.
        #[arg(long)]
        equals: String,
    },
    /// Indices grouped by equal values.
    Group {
        /// Only print values that occur more than once.
        #[arg(long)]
        duplicates_only: bool,
    },
    /// Indices grouped by a mapping relation between values.
    Match {
        /// Mapping applied to every value.
        #[arg(long, value_enum)]
        mapper: Mapper,
        /// Print every distinct value, not only matched ones.
        #[arg(long)]
        all: bool,
        /// Print the groups as a JSON object.
        #[cfg(feature = "serde")]
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ValueKind {
    /// Signed 64-bit integers.
    Int,
    /// Raw text lines.
    Text,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mapper {
    /// Flip the sign (integers only).
    Negate,
    /// Map every value onto itself.
    Identity,
    /// Lowercase the text.
    Lowercase,
    /// Uppercase the text.
    Uppercase,
    /// Reverse the characters of the text.
    Reverse,
}

/// Mapping applied by the `match` subcommand; may reject a value.
type MapFn<T> = fn(&T) -> std::result::Result<T, &'static str>;

/// Values the CLI knows how to read from a line.
trait LineValue: Ord + Hash + Clone + Display {
    fn parse_line(line: &str, line_no: usize) -> Result<Self>;

    fn mapper(mapper: Mapper) -> Result<MapFn<Self>>;
}

impl LineValue for i64 {
    fn parse_line(line: &str, line_no: usize) -> Result<Self> {
        line.trim()
            .parse()
            .with_context(|| format!("invalid integer '{}' on line {}", line.trim(), line_no))
    }

    fn mapper(mapper: Mapper) -> Result<MapFn<Self>> {
        match mapper {
            Mapper::Negate => Ok(|v| v.checked_neg().ok_or("negation overflows i64")),
            Mapper::Identity => Ok(|v| Ok(*v)),
            other => bail!("mapper {:?} only applies to --kind text", other),
        }
    }
}

impl LineValue for String {
    fn parse_line(line: &str, _line_no: usize) -> Result<Self> {
        Ok(line.to_string())
    }

    fn mapper(mapper: Mapper) -> Result<MapFn<Self>> {
        match mapper {
            Mapper::Identity => Ok(|v| Ok(v.clone())),
            Mapper::Lowercase => Ok(|v| Ok(v.to_lowercase())),
            Mapper::Uppercase => Ok(|v| Ok(v.to_uppercase())),
            Mapper::Reverse => Ok(|v| Ok(v.chars().rev().collect())),
            Mapper::Negate => Err(anyhow!("mapper negate only applies to --kind int")),
        }
    }
}

/// Parsed input: non-blank values plus the line index each came from.
#[derive(Debug)]
struct Input<T> {
    values: Vec<T>,
    lines: Vec<usize>,
}

impl<T: LineValue> Input<T> {
    fn read(reader: impl BufRead) -> Result<Self> {
        let mut values = Vec::new();
        let mut lines = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("failed to read line {}", idx + 1))?;
            if line.trim().is_empty() {
                continue;
            }
            values.push(T::parse_line(&line, idx + 1)?);
            lines.push(idx);
        }

        debug!(values = values.len(), lines = lines.len(), "read input");
        Ok(Self { values, lines })
    }

    fn line(&self, idx: usize) -> usize {
        self.lines[idx]
    }

    fn lines_of(&self, indices: &[usize]) -> IndexList {
        IndexList(indices.iter().map(|&idx| self.line(idx)).collect())
    }
}

struct IndexList(Vec<usize>);

impl Display for IndexList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (pos, idx) in self.0.iter().enumerate() {
            if pos > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", idx)?;
        }
        write!(f, "]")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| {
            format!("failed to open input file {}", path.display())
        })?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    match cli.kind {
        ValueKind::Int => run(Input::<i64>::read(reader)?, cli.command),
        ValueKind::Text => run(Input::<String>::read(reader)?, cli.command),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run<T: LineValue>(input: Input<T>, command: Commands) -> Result<()> {
    info!(command = ?command, values = input.values.len(), "running");

    match command {
        Commands::Max => {
            let idx = argmax(&input.values)?;
            println!("{}", input.line(idx));
        }
        Commands::Min => {
            let idx = argmin(&input.values)?;
            println!("{}", input.line(idx));
        }
        Commands::Minmax => {
            let (min, max) = argminmax(&input.values)?;
            println!("min={}\tmax={}", input.line(min), input.line(max));
        }
        Commands::Sort { descending } => {
            let order = if descending {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            };
            let sorted = argsort_ordered(&input.values, order);
            for idx in sorted {
                println!("{}\t{}", input.line(idx), input.values[idx]);
            }
        }
        Commands::Rank => {
            let ranks = argrank(&input.values);
            for (idx, rank) in ranks.into_iter().enumerate() {
                println!("{}\t{}", input.line(idx), rank);
            }
        }
        Commands::Where { equals } => {
            let needle = T::parse_line(&equals, 0).context("invalid --equals value")?;
            let hits = positions_of(&input.values, &needle);
            println!("{}", input.lines_of(&hits));
        }
        Commands::Group { duplicates_only } => {
            let groups = argsequal(&input.values);
            for (value, indices) in groups.iter() {
                if duplicates_only && indices.len() < 2 {
                    continue;
                }
                println!("{}\t{}", value, input.lines_of(indices));
            }
        }
        #[cfg(feature = "serde")]
        Commands::Match { mapper, all, json } => run_match(&input, mapper, all, json)?,
        #[cfg(not(feature = "serde"))]
        Commands::Match { mapper, all } => run_match(&input, mapper, all, false)?,
    }

    Ok(())
}

/// Run the mapper over the input, naming the offending line on failure.
fn build_matches<T: LineValue>(input: &Input<T>, mapper: Mapper, all: bool) -> Result<ArgsMatch<T>> {
    let map = T::mapper(mapper)?;
    let mode = MatchMode::from_only_matches(!all);
    try_args_match(input.values.iter().cloned(), map, mode).map_err(|err| match err {
        ArgError::Mapper { index, message } => anyhow!(
            "mapper {:?} failed on line {}: {}",
            mapper,
            input.line(index) + 1,
            message
        ),
        other => other.into(),
    })
}

fn run_match<T: LineValue>(input: &Input<T>, mapper: Mapper, all: bool, json: bool) -> Result<()> {
    let matches = build_matches(input, mapper, all)?;

    if json {
        return serialize::print_json(input, &matches);
    }

    if matches.is_empty() {
        println!("No matches found.");
        return Ok(());
    }

    for (value, group) in matches.iter() {
        let args_match = match group.args_match {
            Some(indices) => input.lines_of(indices).to_string(),
            None => "-".to_string(),
        };
        println!(
            "{}\targsequal={}\targsmatch={}",
            value,
            input.lines_of(group.args_equal),
            args_match
        );
    }

    Ok(())
}

#[cfg(feature = "serde")]
mod serialize {
    use anyhow::Result;
    use argitertools::ArgsMatch;
    use serde::{Serialize, Serializer};

    use super::{Input, LineValue};

    #[derive(Serialize)]
    struct Entry {
        argsequal: Vec<usize>,
        argsmatch: Option<Vec<usize>>,
    }

    /// Entries serialized as a JSON object in publication order.
    struct Ordered(Vec<(String, Entry)>);

    impl Serialize for Ordered {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_map(self.0.iter().map(|(key, entry)| (key, entry)))
        }
    }

    /// Print the groups keyed by value, with indices translated to line indices.
    pub(super) fn print_json<T: LineValue>(input: &Input<T>, matches: &ArgsMatch<T>) -> Result<()> {
        let entries = matches
            .iter()
            .map(|(value, group)| {
                let entry = Entry {
                    argsequal: input.lines_of(group.args_equal).0,
                    argsmatch: group.args_match.map(|indices| input.lines_of(indices).0),
                };
                (value.to_string(), entry)
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&Ordered(entries))?);
        Ok(())
    }
}

#[cfg(not(feature = "serde"))]
mod serialize {
    use anyhow::{bail, Result};
    use argitertools::ArgsMatch;

    use super::{Input, LineValue};

    pub(super) fn print_json<T: LineValue>(_input: &Input<T>, _matches: &ArgsMatch<T>) -> Result<()> {
        bail!("JSON output requires the `serde` feature")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_ints(text: &str) -> Result<Input<i64>> {
        Input::read(Cursor::new(text))
    }

    #[test]
    fn test_blank_lines_keep_line_indices() {
        let input = read_ints("3\n\n-3\n").unwrap();
        assert_eq!(input.values, vec![3, -3]);
        assert_eq!(input.lines, vec![0, 2]);
        assert_eq!(input.lines_of(&[1, 0]).to_string(), "[2, 0]");
    }

    #[test]
    fn test_parse_error_names_the_line() {
        let err = read_ints("1\n\nx\n").unwrap_err();
        assert!(format!("{:#}", err).contains("line 3"), "{:#}", err);

        let err = read_ints("oops\n").unwrap_err();
        assert!(format!("{:#}", err).contains("line 1"), "{:#}", err);
    }

    #[test]
    fn test_mapper_rejects_wrong_kind() {
        for mapper in [Mapper::Lowercase, Mapper::Uppercase, Mapper::Reverse] {
            assert!(<i64 as LineValue>::mapper(mapper).is_err());
        }
        assert!(<String as LineValue>::mapper(Mapper::Negate).is_err());
        assert!(<String as LineValue>::mapper(Mapper::Reverse).is_ok());
    }

    #[test]
    fn test_negate_matches_on_line_indices() {
        let input = read_ints("3\n\n-3\n").unwrap();
        let matches = build_matches(&input, Mapper::Negate, false).unwrap();

        let group = matches.get(&3i64).unwrap();
        assert_eq!(input.lines_of(group.args_equal).to_string(), "[0]");
        assert_eq!(
            group.args_match.map(|m| input.lines_of(m).to_string()),
            Some("[2]".to_string())
        );
    }

    #[test]
    fn test_negate_overflow_is_reported_not_wrapped() {
        // i64::MIN has no positive counterpart
        let input = read_ints("5\n\n-9223372036854775808\n").unwrap();
        let err = build_matches(&input, Mapper::Negate, true).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("line 3"), "{}", message);
        assert!(message.contains("overflows"), "{}", message);
    }
}
