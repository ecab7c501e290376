use crate::float::{FloatClass, OpKind};

/// Errors from runtime float-class evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("unknown float class `{0}`")]
    UnknownClass(String),

    #[error("unknown operator `{0}` (expected one of + - * /)")]
    UnknownOp(String),

    #[error("is_valid returned false for semantic type {class}: {value}")]
    Invalid { class: FloatClass, value: f64 },

    #[error("no rule for {lhs} {op} {rhs}")]
    NoRule {
        op: OpKind,
        lhs: FloatClass,
        rhs: FloatClass,
    },

    #[error("no negation rule for {0}")]
    NoNegRule(FloatClass),

    #[error("{lhs} {op} {rhs} produced {value}, which is not in {class}")]
    Unsound {
        op: OpKind,
        lhs: FloatClass,
        rhs: FloatClass,
        class: FloatClass,
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = EvalError::Invalid {
            class: FloatClass::Pos,
            value: -2.0,
        };
        assert_eq!(e.to_string(), "is_valid returned false for semantic type Pos: -2");
        let e = EvalError::NoRule {
            op: OpKind::Div,
            lhs: FloatClass::Inf,
            rhs: FloatClass::Zero,
        };
        assert_eq!(e.to_string(), "no rule for Inf / Zero");
    }
}
