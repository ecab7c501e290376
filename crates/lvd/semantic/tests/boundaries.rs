//! End-to-end behaviour of `SV` boundaries through the public API only.
//!
//! Uses a small string lattice: `Word` (non-empty, no whitespace) is a
//! subtype of `Text` (non-empty).

use lvd_semantic::{
    binary_rules, op, subtype_edges, Base, Boundary, CheckPolicy, Concrete, SemanticClass,
    Validates, ValidationError, Wrapped, SV,
};

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

enum Text {}
enum Word {}
enum Label {}

impl SemanticClass for Text {
    const NAME: &'static str = "Text";
    type Kind = Wrapped;
}

impl Validates<String> for Text {
    fn is_valid(cv: &String) -> bool {
        !cv.is_empty()
    }
}

impl SemanticClass for Word {
    const NAME: &'static str = "Word";
    type Kind = Wrapped;
}

impl Validates<String> for Word {
    fn is_valid(cv: &String) -> bool {
        !cv.is_empty() && !cv.chars().any(char::is_whitespace)
    }
}

/// Same predicate as `Text`, but assignment from a raw string is trusted.
impl SemanticClass for Label {
    const NAME: &'static str = "Label";
    type Kind = Wrapped;
    const ASSIGN_MOVE_CV: CheckPolicy = CheckPolicy::NoCheck;
}

impl Validates<String> for Label {
    fn is_valid(cv: &String) -> bool {
        !cv.is_empty()
    }
}

subtype_edges! {
    Word => [Text];
}

/// A non-zero port number.
enum Port {}

impl SemanticClass for Port {
    const NAME: &'static str = "Port";
    type Kind = Wrapped;
}

impl Validates<u16> for Port {
    fn is_valid(cv: &u16) -> bool {
        *cv != 0
    }
}

binary_rules! {
    ordered op::Add {
        Port, Concrete<u16> => Port;
    }
    ordered op::Sub {
        Port, Port => Base;
        Port, Concrete<u16> => Port;
    }
}

fn text(s: &str) -> SV<Text, String> {
    SV::new(s.to_owned()).unwrap()
}

fn word(s: &str) -> SV<Word, String> {
    SV::new(s.to_owned()).unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn empty_string_is_rejected_with_type_and_boundary() {
    let err = SV::<Text, String>::new(String::new()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::Invalid {
            type_name: "Text",
            boundary: Boundary::CtorMoveCv,
        }
    );
    assert_eq!(
        err.to_string(),
        "is_valid returned false for semantic type Text at ctor_move_cv"
    );
}

#[test]
fn words_upcast_to_text() {
    let w = word("hello");
    let t: SV<Text, String> = SV::from_sub(&w).unwrap();
    assert_eq!(t.cv(), "hello");
    assert_eq!(w.as_super::<Text>().cv(), "hello");
    let moved = w.upcast::<Text>().unwrap();
    assert_eq!(moved, t);
}

#[test]
fn operator_results_follow_the_registered_rules() {
    let base = SV::<Port, u16>::new(8000).unwrap();
    let next: SV<Port, u16> = (base + 80_u16).unwrap();
    assert_eq!(*next.cv(), 8080);
    let gap: u16 = (next - base).unwrap();
    assert_eq!(gap, 80);
    assert_eq!(text("a b").to_string(), "a b");
}

#[test]
fn operator_results_are_checked() {
    let p = SV::<Port, u16>::new(5).unwrap();
    let down: SV<Port, u16> = (p - 4_u16).unwrap();
    assert_eq!(*down.cv(), 1);
    let err = (p - 5_u16).unwrap_err();
    assert_eq!(
        err,
        ValidationError::Invalid {
            type_name: "Port",
            boundary: Boundary::Sub,
        }
    );
}

#[test]
fn in_place_push_is_checked_and_atomic() {
    let mut w = word("abc");
    let err = w.try_add_assign(" def").unwrap_err();
    assert_eq!(err.boundary(), Boundary::AddEq);
    assert_eq!(w.cv(), "abc");
    w.try_add_assign("def").unwrap();
    assert_eq!(w.cv(), "abcdef");
}

#[test]
fn no_check_assignment_can_store_an_invalid_value() {
    let mut l = SV::<Label, String>::new("tag".into()).unwrap();
    l.assign_cv(String::new()).unwrap();
    assert!(!l.is_valid());
    assert!(l.check(CheckPolicy::VerifyOrThrow).is_err());
}

#[test]
fn mutator_round_trip() {
    let mut w = word("ab");
    {
        let mut m = w.mutator();
        m.push(' ');
        assert!(m.finish().is_err());
    }
    assert_eq!(w.cv(), "ab");
    let mut m = w.mutator();
    m.push('c');
    m.finish().unwrap();
    assert_eq!(w.cv(), "abc");
}

#[test]
fn serde_round_trip_revalidates() {
    let w = word("token");
    let json = serde_json::to_string(&w).unwrap();
    let back: SV<Word, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, w);
    assert!(serde_json::from_str::<SV<Word, String>>("\"two words\"").is_err());
}

#[test]
fn debug_and_type_string() {
    assert_eq!(format!("{:?}", word("x")), "Word(\"x\")");
    assert_eq!(
        SV::<Word, String>::type_string(),
        "SV<Word, alloc::string::String>"
    );
}
