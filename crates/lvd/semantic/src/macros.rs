/// Register result classes for binary operators.
///
/// ```ignore
/// binary_rules! {
///     symmetric op::Add {
///         Pos, Zero => Pos;
///     }
///     ordered op::Div as CastAndAssert {
///         Zero, Zero => NaN;
///     }
/// }
/// ```
///
/// `ordered` registers `L op R` only; `symmetric` registers both `L op R`
/// and `R op L`. An optional `as <ResultPolicy variant>` overrides the
/// default result policy of the output class.
#[macro_export]
macro_rules! binary_rules {
    () => {};

    (ordered $op:path as $policy:ident { $($lhs:ty, $rhs:ty => $out:ty;)* } $($rest:tt)*) => {
        $( $crate::binary_rules!(@rule [$op] [$policy] $lhs, $rhs => $out); )*
        $crate::binary_rules!($($rest)*);
    };

    (ordered $op:path { $($lhs:ty, $rhs:ty => $out:ty;)* } $($rest:tt)*) => {
        $( $crate::binary_rules!(@rule [$op] [] $lhs, $rhs => $out); )*
        $crate::binary_rules!($($rest)*);
    };

    (symmetric $op:path as $policy:ident { $($lhs:ty, $rhs:ty => $out:ty;)* } $($rest:tt)*) => {
        $(
            $crate::binary_rules!(@rule [$op] [$policy] $lhs, $rhs => $out);
            $crate::binary_rules!(@rule [$op] [$policy] $rhs, $lhs => $out);
        )*
        $crate::binary_rules!($($rest)*);
    };

    (symmetric $op:path { $($lhs:ty, $rhs:ty => $out:ty;)* } $($rest:tt)*) => {
        $(
            $crate::binary_rules!(@rule [$op] [] $lhs, $rhs => $out);
            $crate::binary_rules!(@rule [$op] [] $rhs, $lhs => $out);
        )*
        $crate::binary_rules!($($rest)*);
    };

    (@rule [$op:path] [] $lhs:ty, $rhs:ty => $out:ty) => {
        impl $crate::BinaryRule<$op, $rhs> for $lhs {
            type Output = $out;
        }
    };

    (@rule [$op:path] [$policy:ident] $lhs:ty, $rhs:ty => $out:ty) => {
        impl $crate::BinaryRule<$op, $rhs> for $lhs {
            type Output = $out;
            const RESULT_POLICY: $crate::ResultPolicy = $crate::ResultPolicy::$policy;
        }
    };
}

/// Declare subtype edges: `Sub => [Super, ...]`.
///
/// Only the listed edges are declared; list every transitive supertype.
#[macro_export]
macro_rules! subtype_edges {
    ($($sub:ty => [$($sup:ty),* $(,)?];)*) => {
        $($(
            impl $crate::SubtypeOf<$sup> for $sub {}
        )*)*
    };
}

/// Reject a boundary whose policy is `Prohibit`. Evaluated after
/// monomorphization, so the error points at the offending use.
macro_rules! require_permitted {
    ($policy:expr, $boundary:literal) => {
        const {
            assert!(
                $policy.is_permitted(),
                concat!($boundary, " is prohibited for this semantic class")
            )
        }
    };
}

pub(crate) use require_permitted;
