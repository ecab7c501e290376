//! Runtime dispatch over the float result table.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::class::FloatClass;
use super::model::OpKind;
use super::rules::{Rule, NEG_RULES, RULES};
use crate::error::EvalError;

/// A float tagged with a runtime class. Construction checks the value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DynValue {
    class: FloatClass,
    value: f64,
}

impl DynValue {
    pub fn new(class: FloatClass, value: f64) -> Result<Self, EvalError> {
        if class.is_valid(value) {
            Ok(DynValue { class, value })
        } else {
            Err(EvalError::Invalid { class, value })
        }
    }

    pub fn class(&self) -> FloatClass {
        self.class
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for DynValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.class, self.value)
    }
}

impl<'de> Deserialize<'de> for DynValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            class: FloatClass,
            value: f64,
        }
        let raw = Raw::deserialize(deserializer)?;
        DynValue::new(raw.class, raw.value).map_err(serde::de::Error::custom)
    }
}

/// Result table keyed by `(op, lhs, rhs)`.
#[derive(Clone, Debug)]
pub struct RuleTable {
    binary: BTreeMap<(OpKind, FloatClass, FloatClass), FloatClass>,
    neg: BTreeMap<FloatClass, FloatClass>,
}

impl RuleTable {
    /// The table registered for the type-level classes.
    pub fn standard() -> Self {
        Self::from_rules(RULES, NEG_RULES)
    }

    pub fn from_rules(rules: &[Rule], neg: &[(FloatClass, FloatClass)]) -> Self {
        RuleTable {
            binary: rules
                .iter()
                .map(|r| ((r.op, r.lhs, r.rhs), r.output))
                .collect(),
            neg: neg.iter().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.binary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binary.is_empty()
    }

    pub fn result(&self, op: OpKind, lhs: FloatClass, rhs: FloatClass) -> Option<FloatClass> {
        self.binary.get(&(op, lhs, rhs)).copied()
    }

    pub fn neg_result(&self, class: FloatClass) -> Option<FloatClass> {
        self.neg.get(&class).copied()
    }

    /// Rows for one operator, ordered by operand classes.
    pub fn rules_for(&self, op: OpKind) -> impl Iterator<Item = Rule> + '_ {
        self.binary
            .range((op, FloatClass::NaNExtReal, FloatClass::NaNExtReal)..)
            .take_while(move |((o, _, _), _)| *o == op)
            .map(|(&(op, lhs, rhs), &output)| Rule {
                op,
                lhs,
                rhs,
                output,
            })
    }

    /// Evaluate `lhs op rhs` and check the result against the table.
    pub fn eval(&self, op: OpKind, lhs: DynValue, rhs: DynValue) -> Result<DynValue, EvalError> {
        let class = self.result(op, lhs.class, rhs.class).ok_or(EvalError::NoRule {
            op,
            lhs: lhs.class,
            rhs: rhs.class,
        })?;
        let value = op.apply(lhs.value, rhs.value);
        if !class.is_valid(value) {
            warn!(%op, lhs = %lhs, rhs = %rhs, %class, value, "result outside its rule class");
            return Err(EvalError::Unsound {
                op,
                lhs: lhs.class,
                rhs: rhs.class,
                class,
                value,
            });
        }
        debug!(%op, lhs = %lhs, rhs = %rhs, %class, value, "evaluated");
        Ok(DynValue { class, value })
    }

    pub fn eval_neg(&self, operand: DynValue) -> Result<DynValue, EvalError> {
        let class = self
            .neg_result(operand.class)
            .ok_or(EvalError::NoNegRule(operand.class))?;
        DynValue::new(class, -operand.value)
    }
}

/// Evaluate `lhs op rhs` against the standard table.
pub fn eval(op: OpKind, lhs: DynValue, rhs: DynValue) -> Result<DynValue, EvalError> {
    RuleTable::standard().eval(op, lhs, rhs)
}
