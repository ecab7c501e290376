//! Partial order commands

use std::io::{self, Write};

use clap::{Subcommand, ValueEnum};
use lvd_poset::{
    divides, DotStyle, PartialOrder, PartiallyOrderedSet, RankDir, RelationshipEvaluator,
};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::{CliError, CliResult};
use crate::output::{self, OutputFormat};

/// Poset subcommands
#[derive(Subcommand)]
pub enum PosetCommands {
    /// Build the divisibility order over 1..=MAX
    Divides {
        /// Largest value
        #[arg(short, long, default_value = "12")]
        max: u64,
        /// Insert only these values, in this order (each within 1..=MAX)
        #[arg(short, long, value_delimiter = ',')]
        insert: Vec<u64>,
        /// Rank direction for DOT output
        #[arg(long, value_enum, default_value = "bt")]
        rankdir: Rank,
    },
}

/// DOT rank direction
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Rank {
    Tb,
    Bt,
    Lr,
    Rl,
}

impl From<Rank> for RankDir {
    fn from(r: Rank) -> Self {
        match r {
            Rank::Tb => RankDir::TB,
            Rank::Bt => RankDir::BT,
            Rank::Lr => RankDir::LR,
            Rank::Rl => RankDir::RL,
        }
    }
}

#[derive(Tabled, Serialize)]
struct EdgeRow {
    lower: u64,
    upper: u64,
}

#[derive(Serialize)]
struct Diagram {
    nodes: Vec<u64>,
    edges: Vec<(u64, u64)>,
}

/// Execute poset command
pub fn execute(command: PosetCommands, format: OutputFormat) -> CliResult<()> {
    match command {
        PosetCommands::Divides {
            max,
            insert,
            rankdir,
        } => {
            let values = divisibility_values(max, insert)?;
            debug!(count = values.len(), max, "building divisibility poset");
            let mut poset = PartiallyOrderedSet::new(divides as fn(&u64, &u64) -> PartialOrder);
            poset.extend(values);
            let style = DotStyle {
                rankdir: rankdir.into(),
                ..DotStyle::default()
            };
            print_poset(&poset, format, &style)
        }
    }
}

fn divisibility_values(max: u64, insert: Vec<u64>) -> CliResult<Vec<u64>> {
    if max == 0 {
        return Err(CliError::InvalidArgument("--max must be at least 1".into()));
    }
    if insert.is_empty() {
        return Ok((1..=max).collect());
    }
    if let Some(v) = insert.iter().find(|v| **v == 0 || **v > max) {
        return Err(CliError::InvalidArgument(format!(
            "value {v} is outside 1..={max}"
        )));
    }
    Ok(insert)
}

fn print_poset<R>(
    poset: &PartiallyOrderedSet<u64, R>,
    format: OutputFormat,
    style: &DotStyle,
) -> CliResult<()>
where
    R: RelationshipEvaluator<u64>,
{
    let mut edges: Vec<(u64, u64)> = poset.edges().into_iter().map(|(a, b)| (*a, *b)).collect();
    edges.sort_unstable();
    match format {
        OutputFormat::Table => {
            let rows: Vec<EdgeRow> = edges
                .iter()
                .map(|&(lower, upper)| EdgeRow { lower, upper })
                .collect();
            output::print_table(rows);
            println!("{} nodes, {} edges", poset.size(), edges.len());
            Ok(())
        }
        OutputFormat::Json => output::print_json(&Diagram {
            nodes: poset.iter().copied().collect(),
            edges,
        }),
        OutputFormat::Dot => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            poset.print_dot_graph_styled(&mut out, "divides", style)?;
            out.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_default_to_the_full_range() {
        assert_eq!(divisibility_values(4, vec![]).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(divisibility_values(12, vec![6, 2]).unwrap(), vec![6, 2]);
    }

    #[test]
    fn values_outside_the_range_are_rejected() {
        assert!(matches!(
            divisibility_values(0, vec![]),
            Err(CliError::InvalidArgument(_))
        ));
        let err = divisibility_values(10, vec![3, 11]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument: value 11 is outside 1..=10");
    }
}
