//! Table tests for `structval::validate` over derived records.

use std::any::Any;
use std::collections::HashMap;

use pretty_assertions::assert_eq;
use rstest::rstest;
use structval::{Error, Record, Violation, validate};

fn violation_count(result: Result<(), Error>) -> usize {
    match result {
        Ok(()) => 0,
        Err(Error::Invalid(errors)) => errors.len(),
        Err(err) => panic!("expected field violations, got {err}"),
    }
}

// ============================================================================
// NON-RECORD INPUTS
// ============================================================================

#[test]
fn interface_is_not_a_struct() {
    let value: Box<dyn Any> = Box::new(());
    assert_eq!(validate(&value), Err(Error::NotStruct));
}

#[test]
fn map_is_not_a_struct() {
    assert_eq!(validate(&HashMap::<String, String>::new()), Err(Error::NotStruct));
}

#[test]
fn string_is_not_a_struct() {
    assert_eq!(validate("some string"), Err(Error::NotStruct));
    assert_eq!(
        validate("some string").unwrap_err().to_string(),
        "wrong argument given, should be a struct"
    );
}

// ============================================================================
// STRUCTURE
// ============================================================================

#[derive(Record)]
struct NoFields {}

#[derive(Record, Default)]
#[allow(dead_code)]
struct Untagged {
    f1: String,
    f2: String,
}

#[derive(Record, Default)]
#[allow(dead_code)]
struct UntaggedFloats {
    f1: f32,
    f2: f32,
}

#[derive(Record, Default)]
#[allow(dead_code)]
struct Unexported {
    #[validate("len:10")]
    foo: String,
}

#[derive(Record, Default)]
struct BadSyntax {
    #[validate("len:abcdef")]
    pub foo: String,
}

#[derive(Record, Default)]
struct Float {
    #[validate("len:10")]
    pub f: f64,
}

#[test]
fn empty_and_untagged_structs_are_valid() {
    assert_eq!(validate(&NoFields {}), Ok(()));
    assert_eq!(validate(&Untagged::default()), Ok(()));
    assert_eq!(validate(&UntaggedFloats::default()), Ok(()));
}

#[rstest]
#[case::unexported(validate(&Unexported::default()), "validation for unexported field is not allowed")]
#[case::invalid_syntax(validate(&BadSyntax::default()), "invalid validator syntax")]
#[case::unsupported_type(validate(&Float::default()), "field of type f64 can not be validated")]
fn single_structural_violation(#[case] result: Result<(), Error>, #[case] expected: &str) {
    let err = result.unwrap_err();
    assert_eq!(err.violations().map(|v| v.len()), Some(1));
    assert_eq!(err.to_string(), expected);
}

#[test]
fn unexported_sentinel_is_matchable() {
    let err = validate(&Unexported::default()).unwrap_err();
    assert!(err.violations().unwrap().iter().all(|v| *v == Violation::Unexported));
}

// ============================================================================
// SCALARS
// ============================================================================

#[derive(Record)]
struct Tagged {
    #[validate("len:20")]
    pub len: String,
    #[validate("len:0")]
    pub len_z: String,
    #[validate("in:20,25,30")]
    pub in_int: i32,
    #[validate("in:-20,-25,-30")]
    pub in_neg: i32,
    #[validate("in:foo,bar")]
    pub in_str: String,
    #[validate("min:10")]
    pub min_int: i32,
    #[validate("min:-10")]
    pub min_int_neg: i32,
    #[validate("min:10")]
    pub min_str: String,
    #[validate("min:-1")]
    pub min_str_neg: String,
    #[validate("max:20")]
    pub max_int: i32,
    #[validate("max:-2")]
    pub max_int_neg: i32,
    #[validate("max:20")]
    pub max_str: String,
}

#[test]
fn tagged_scalars_are_valid() {
    let record = Tagged {
        len: "abcdefghjklmopqrstvu".into(),
        len_z: String::new(),
        in_int: 25,
        in_neg: -25,
        in_str: "bar".into(),
        min_int: 15,
        min_int_neg: -9,
        min_str: "abcdefghjkl".into(),
        min_str_neg: "abc".into(),
        max_int: 16,
        max_int_neg: -3,
        max_str: "abcdefghjklmopqrst".into(),
    };
    assert_eq!(validate(&record), Ok(()));
}

#[derive(Record)]
struct WrongLength {
    #[validate("len:24")]
    pub lower: String,
    #[validate("len:5")]
    pub higher: String,
    #[validate("len:3")]
    pub zero: String,
    #[validate("len:%12")]
    pub bad_spec: String,
    #[validate("len:-6")]
    pub negative: String,
}

#[derive(Record)]
struct WrongIn {
    #[validate("in:ab,cd")]
    pub in_a: String,
    #[validate("in:aa,bb,cd,ee")]
    pub in_b: String,
    #[validate("in:-1,-3,5,7")]
    pub in_c: i32,
    #[validate("in:5-")]
    pub in_d: i32,
    #[validate("in:")]
    pub in_empty: String,
}

#[derive(Record)]
struct WrongMin {
    #[validate("min:12")]
    pub min_a: String,
    #[validate("min:-12")]
    pub min_b: i32,
    #[validate("min:5-")]
    pub min_c: i32,
    #[validate("min:")]
    pub min_d: i32,
    #[validate("min:")]
    pub min_e: String,
}

#[derive(Record)]
struct WrongMax {
    #[validate("max:2")]
    pub max_a: String,
    #[validate("max:-7")]
    pub max_b: String,
    #[validate("max:-12")]
    pub max_c: i32,
    #[validate("max:5-")]
    pub max_d: i32,
    #[validate("max:")]
    pub max_e: i32,
    #[validate("max:")]
    pub max_f: String,
}

#[derive(Record)]
struct MinMaxInt {
    #[validate("min:12; max: 15")]
    pub min_max: i32,
}

#[derive(Record)]
struct MinMaxStr {
    #[validate("min:12; max:15")]
    pub min_max: String,
}

#[rstest]
#[case::wrong_length(
    validate(&WrongLength {
        lower: "abcdef".into(),
        higher: "abcdef".into(),
        zero: String::new(),
        bad_spec: "abc".into(),
        negative: "abcd".into(),
    }),
    5
)]
#[case::wrong_in(
    validate(&WrongIn {
        in_a: "ef".into(),
        in_b: "ab".into(),
        in_c: 2,
        in_d: 12,
        in_empty: String::new(),
    }),
    5
)]
#[case::wrong_min(
    validate(&WrongMin {
        min_a: "ef".into(),
        min_b: -22,
        min_c: 12,
        min_d: 11,
        min_e: "abc".into(),
    }),
    5
)]
#[case::wrong_max(
    validate(&WrongMax {
        max_a: "efgh".into(),
        max_b: "ab".into(),
        max_c: 22,
        max_d: 12,
        max_e: 11,
        max_f: "abc".into(),
    }),
    6
)]
#[case::multiple_constraints_valid(validate(&MinMaxInt { min_max: 13 }), 0)]
#[case::multiple_constraints_invalid(validate(&MinMaxStr { min_max: "spkjishu".into() }), 1)]
fn scalar_violation_counts(#[case] result: Result<(), Error>, #[case] expected: usize) {
    assert_eq!(violation_count(result), expected);
}

#[test]
fn scalar_messages() {
    let err = validate(&WrongIn {
        in_a: "ef".into(),
        in_b: "aa".into(),
        in_c: 2,
        in_d: 5,
        in_empty: "x".into(),
    })
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "field 'in_a' of type string is not valid: has constraint ('in': ab,cd), but got value = ef;\n\
         field 'in_c' of type int is not valid: has constraint ('in': -1,-3,5,7), but got value = 2;\n\
         invalid validator syntax;\n\
         invalid validator syntax"
    );
}

// ============================================================================
// SEQUENCES
// ============================================================================

#[derive(Record)]
struct TaggedSlices {
    #[validate("len:5")]
    pub len: Vec<String>,
    #[validate("len:0")]
    pub len_z: Vec<String>,
    #[validate("in:20,25,30")]
    pub in_int: Vec<i32>,
    #[validate("in:-20,-25,-30")]
    pub in_neg: Vec<i32>,
    #[validate("in:foo,bar")]
    pub in_str: Vec<String>,
    #[validate("min:10")]
    pub min_int: Vec<i32>,
    #[validate("min:-10")]
    pub min_int_neg: Vec<i32>,
    #[validate("min:4")]
    pub min_str: Vec<String>,
    #[validate("min:-1")]
    pub min_str_neg: Vec<String>,
    #[validate("max:20")]
    pub max_int: Vec<i32>,
    #[validate("max:-2")]
    pub max_int_neg: Vec<i32>,
    #[validate("max:20")]
    pub max_str: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn tagged_slices_are_valid() {
    let record = TaggedSlices {
        len: strings(&["abcde", "12345", "yvtro", "bussy"]),
        len_z: strings(&["", ""]),
        in_int: vec![25, 20, 25],
        in_neg: vec![-25, -30, -20, -20],
        in_str: strings(&["bar", "foo", "foo"]),
        min_int: vec![25, 20, 11, 33, 100],
        min_int_neg: vec![0, 2, -5, -2],
        min_str: strings(&["abcde", "1234", "yvt3134rro", "bussy30"]),
        min_str_neg: strings(&["abc", "", "dkjsfh"]),
        max_int: vec![-25, -20, 11, -33, 13],
        max_int_neg: vec![-25, -20, -11, -33, -100],
        max_str: strings(&["abcde12345678990", "1234", "yvt3134rro", "bussy330"]),
    };
    assert_eq!(validate(&record), Ok(()));
}

#[derive(Record)]
struct SlicesWrongLength {
    #[validate("len:24")]
    pub lower: Vec<String>,
    #[validate("len:5")]
    pub higher: Vec<String>,
    #[validate("len:3")]
    pub zero: Vec<String>,
    #[validate("len:%12")]
    pub bad_spec: Vec<String>,
    #[validate("len:-6")]
    pub negative: Vec<String>,
}

#[derive(Record)]
struct SlicesWrongIn {
    #[validate("in:ab,cd")]
    pub in_a: Vec<String>,
    #[validate("in:aa,bb,cd,ee")]
    pub in_b: Vec<String>,
    #[validate("in:-1,-3,5,7")]
    pub in_c: Vec<i32>,
    #[validate("in:5-")]
    pub in_d: Vec<i32>,
    #[validate("in:")]
    pub in_empty: Vec<String>,
}

#[derive(Record)]
struct SlicesWrongMin {
    #[validate("min:12")]
    pub min_a: Vec<String>,
    #[validate("min:-12")]
    pub min_b: Vec<i32>,
    #[validate("min:5-")]
    pub min_c: Vec<i32>,
    #[validate("min:")]
    pub min_d: Vec<i32>,
    #[validate("min:")]
    pub min_e: Vec<String>,
}

#[derive(Record)]
struct SlicesWrongMax {
    #[validate("max:2")]
    pub max_a: Vec<String>,
    #[validate("max:-7")]
    pub max_b: Vec<String>,
    #[validate("max:-12")]
    pub max_c: Vec<i32>,
    #[validate("max:5-")]
    pub max_d: Vec<i32>,
    #[validate("max:")]
    pub max_e: Vec<i32>,
    #[validate("max:")]
    pub max_f: Vec<String>,
}

#[rstest]
#[case::wrong_length(
    validate(&SlicesWrongLength {
        lower: strings(&["abcdef", "dwayne", "1234567890qwertyuiopasdf"]),
        higher: strings(&["abcdef", "rock", "o", "kanye"]),
        zero: strings(&["", "abs", "b2b"]),
        bad_spec: strings(&["abc", "kj"]),
        negative: strings(&["abcd"]),
    }),
    8
)]
#[case::wrong_in(
    validate(&SlicesWrongIn {
        in_a: strings(&["ef", "ab", "cd", "hh"]),
        in_b: strings(&["ab", "aa", "ye"]),
        in_c: vec![2, -3, 7, 7, -2],
        in_d: vec![12, 1, 1, 1, 1, 1, 12],
        in_empty: strings(&[""]),
    }),
    8
)]
#[case::wrong_min(
    validate(&SlicesWrongMin {
        min_a: strings(&["ef", "jesus and judas", "human"]),
        min_b: vec![-22, -38, -11],
        min_c: vec![12, 17, 1],
        min_d: vec![11, 13, 12],
        min_e: strings(&["abc"]),
    }),
    7
)]
#[case::wrong_max(
    validate(&SlicesWrongMax {
        max_a: strings(&["efgh", "17", "777"]),
        max_b: strings(&["ab", ""]),
        max_c: vec![22, 11, -33, -11],
        max_d: vec![12, 12],
        max_e: vec![11, 11, 11],
        max_f: strings(&["abc"]),
    }),
    10
)]
fn sequence_violation_counts(#[case] result: Result<(), Error>, #[case] expected: usize) {
    assert_eq!(violation_count(result), expected);
}

#[test]
fn sequence_messages_use_slice_kind() {
    let err = validate(&SlicesWrongMin {
        min_a: strings(&["ef", "jesus and judas"]),
        min_b: vec![-22],
        min_c: vec![],
        min_d: vec![],
        min_e: vec![],
    })
    .unwrap_err();
    let messages: Vec<String> = err
        .violations()
        .unwrap()
        .iter()
        .filter(|v| v.is_constraint())
        .map(ToString::to_string)
        .collect();

    assert_eq!(
        messages,
        [
            "field 'min_a' of type slice is not valid: has constraint ('min': 12), but got value = 2",
            "field 'min_b' of type slice is not valid: has constraint ('min': -12), but got value = -22",
        ]
    );
}

#[test]
fn empty_sequences_are_valid() {
    let record = SlicesWrongIn {
        in_a: Vec::new(),
        in_b: Vec::new(),
        in_c: Vec::new(),
        in_d: Vec::new(),
        in_empty: Vec::new(),
    };
    // Tag syntax is still checked for empty sequences.
    assert_eq!(violation_count(validate(&record)), 2);
}
