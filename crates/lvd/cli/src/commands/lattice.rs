//! Float lattice commands

use std::io::{self, Write};

use clap::Subcommand;
use lvd_classes::float::{DynValue, FloatClass, OpKind, Rule, RuleTable};
use lvd_log::{AnsiColor, Log, LogConfig};
use lvd_poset::{PartialOrder, PartiallyOrderedSet};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliResult;
use crate::output::{self, unsupported, OutputFormat};

/// Lattice subcommands
#[derive(Subcommand)]
pub enum LatticeCommands {
    /// Print the operator result table
    Rules {
        /// Only this operator (add, sub, mul, div or its symbol)
        #[arg(long)]
        op: Option<OpKind>,
    },

    /// Evaluate `LHS OP RHS` with checked operands and result
    Eval {
        /// Class of the left operand
        lhs_class: FloatClass,
        /// Left operand
        #[arg(allow_hyphen_values = true)]
        lhs: f64,
        /// Operator (add, sub, mul, div or its symbol)
        #[arg(allow_hyphen_values = true)]
        op: OpKind,
        /// Class of the right operand
        rhs_class: FloatClass,
        /// Right operand
        #[arg(allow_hyphen_values = true)]
        rhs: f64,
    },

    /// Negate a checked value
    Neg {
        class: FloatClass,
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },

    /// List classes with their supertypes
    Classes,
}

#[derive(Tabled)]
struct RuleRow {
    lhs: FloatClass,
    op: &'static str,
    rhs: FloatClass,
    result: FloatClass,
}

impl From<Rule> for RuleRow {
    fn from(r: Rule) -> Self {
        RuleRow {
            lhs: r.lhs,
            op: r.op.symbol(),
            rhs: r.rhs,
            result: r.output,
        }
    }
}

#[derive(Serialize)]
struct Evaluation {
    op: OpKind,
    lhs: DynValue,
    rhs: DynValue,
    result: DynValue,
}

#[derive(Serialize)]
struct ClassEntry {
    name: FloatClass,
    supertypes: Vec<FloatClass>,
}

/// Execute lattice command
pub fn execute(
    command: LatticeCommands,
    format: OutputFormat,
    log_config: &LogConfig,
) -> CliResult<()> {
    let table = RuleTable::standard();
    match command {
        LatticeCommands::Rules { op } => {
            let ops = op.map_or(OpKind::ALL.to_vec(), |op| vec![op]);
            let rules: Vec<Rule> = ops.into_iter().flat_map(|op| table.rules_for(op)).collect();
            match format {
                OutputFormat::Table => {
                    output::print_table(rules.into_iter().map(RuleRow::from).collect::<Vec<_>>());
                    Ok(())
                }
                OutputFormat::Json => output::print_json(&rules),
                OutputFormat::Dot => Err(unsupported(format, "the rule table")),
            }
        }

        LatticeCommands::Eval {
            lhs_class,
            lhs,
            op,
            rhs_class,
            rhs,
        } => {
            let lhs = DynValue::new(lhs_class, lhs)?;
            let rhs = DynValue::new(rhs_class, rhs)?;
            let result = table.eval(op, lhs, rhs)?;
            debug!(%op, %lhs, %rhs, %result, "evaluated from the command line");
            match format {
                OutputFormat::Table => {
                    println!("{lhs} {op} {rhs} = {result}");
                    Ok(())
                }
                OutputFormat::Json => output::print_json(&Evaluation {
                    op,
                    lhs,
                    rhs,
                    result,
                }),
                OutputFormat::Dot => Err(unsupported(format, "an evaluation")),
            }
        }

        LatticeCommands::Neg { class, value } => {
            let operand = DynValue::new(class, value)?;
            let result = table.eval_neg(operand)?;
            match format {
                OutputFormat::Table => {
                    println!("-{operand} = {result}");
                    Ok(())
                }
                OutputFormat::Json => output::print_json(&result),
                OutputFormat::Dot => Err(unsupported(format, "a negation")),
            }
        }

        LatticeCommands::Classes => match format {
            OutputFormat::Table => {
                let stdout = io::stdout();
                let mut log = Log::new(stdout.lock(), log_config.clone());
                print_classes(&mut log)?;
                log.flush()?;
                Ok(())
            }
            OutputFormat::Json => {
                let entries: Vec<ClassEntry> = FloatClass::ALL
                    .into_iter()
                    .map(|c| ClassEntry {
                        name: c,
                        supertypes: c.supertypes(),
                    })
                    .collect();
                output::print_json(&entries)
            }
            OutputFormat::Dot => {
                let mut poset = PartiallyOrderedSet::new(subclass_order);
                poset.extend(FloatClass::ALL);
                let stdout = io::stdout();
                let mut out = stdout.lock();
                poset.print_dot_graph(&mut out, "float_lattice")?;
                out.flush()?;
                Ok(())
            }
        },
    }
}

fn print_classes<W: Write>(log: &mut Log<W>) -> io::Result<()> {
    for class in FloatClass::ALL {
        log.colored_line(AnsiColor::Cyan, class)?;
        let supers = class.supertypes();
        let mut inner = log.indent();
        if supers.is_empty() {
            inner.line("(top)")?;
        } else {
            let names: Vec<&str> = supers.iter().map(|c| c.name()).collect();
            inner.line(format!("< {}", names.join(", ")))?;
        }
    }
    Ok(())
}

/// Subclass inclusion between float classes.
fn subclass_order(a: &FloatClass, b: &FloatClass) -> PartialOrder {
    if a == b {
        PartialOrder::Equal
    } else if a.is_subclass_of(*b) {
        PartialOrder::LessThan
    } else if b.is_subclass_of(*a) {
        PartialOrder::GreaterThan
    } else {
        PartialOrder::Incomparable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lvd_poset::verify_partial_order;

    #[test]
    fn subclass_inclusion_is_a_partial_order() {
        verify_partial_order(&FloatClass::ALL, subclass_order).unwrap();
    }

    #[test]
    fn lattice_diagram_has_a_single_top() {
        let mut poset = PartiallyOrderedSet::new(subclass_order);
        poset.extend(FloatClass::ALL);
        assert_eq!(poset.size(), FloatClass::ALL.len());
        assert_eq!(poset.leaf_nodes(), vec![&FloatClass::NaNExtReal]);
        assert_eq!(poset.parents_of(&FloatClass::One), vec![&FloatClass::Pos]);
    }

    #[test]
    fn class_listing() {
        let mut log = Log::new(Vec::new(), LogConfig::plain());
        print_classes(&mut log).unwrap();
        let text = String::from_utf8(log.into_inner()).unwrap();
        assert!(text.starts_with("NaNExtReal\n  (top)\n"), "{text}");
        assert!(text.contains("Pos\n  < "));
    }
}
