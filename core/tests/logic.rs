use std::collections::{BTreeSet, HashMap};
use std::hash::{BuildHasher, RandomState};

use serde_json::json;
use trinary::{strictly, value, weakly, Compare, Operator, Trinary, Value};

type BoolOp = fn(bool, bool) -> bool;
type TrinaryOp = fn(Trinary, Trinary) -> Trinary;

fn ops() -> [(&'static str, BoolOp, TrinaryOp); 9] {
    [
        ("==", |a, b| a == b, |p, q| p.equals(q)),
        ("!=", |a, b| a != b, |p, q| p.not_equals(q)),
        ("&", |a, b| a & b, |p, q| p & q),
        ("|", |a, b| a | b, |p, q| p | q),
        ("^", |a, b| a ^ b, |p, q| p ^ q),
        (">", |a, b| a > b, |p, q| p.greater_than(q)),
        (">=", |a, b| a >= b, |p, q| p.greater_equal(q)),
        ("<", |a, b| a < b, |p, q| p.less_than(q)),
        ("<=", |a, b| a <= b, |p, q| p.less_equal(q)),
    ]
}

fn to_set(t: Trinary) -> BTreeSet<bool> {
    match t {
        Trinary::True => BTreeSet::from([true]),
        Trinary::False => BTreeSet::from([false]),
        Trinary::Unknown => BTreeSet::from([true, false]),
    }
}

fn from_set(set: &BTreeSet<bool>) -> Trinary {
    match (set.contains(&true), set.contains(&false)) {
        (true, false) => Trinary::True,
        (false, true) => Trinary::False,
        (true, true) => Trinary::Unknown,
        (false, false) => panic!("empty image"),
    }
}

/// The logic is isomorphic to non-empty sets of bools.
#[test]
fn isomorphic_to_sets_of_bools() {
    for (symbol, bool_op, trinary_op) in ops() {
        for p in Trinary::ALL {
            for q in Trinary::ALL {
                let expected: BTreeSet<bool> = to_set(p)
                    .iter()
                    .flat_map(|&a| to_set(q).into_iter().map(move |b| bool_op(a, b)))
                    .collect();
                assert_eq!(trinary_op(p, q), from_set(&expected), "{p} {symbol} {q}");
            }
        }
    }
}

#[test]
fn operator_dispatch_matches_direct_calls() {
    for (symbol, _, trinary_op) in ops() {
        let op: Operator = symbol.parse().unwrap();
        for p in Trinary::ALL {
            for q in Trinary::ALL {
                assert_eq!(op.apply(p, q), trinary_op(p, q), "{p} {symbol} {q}");
                assert_eq!(
                    Value::from(p).apply(op, &Value::from(q)).unwrap(),
                    trinary_op(p, q),
                    "{p} {symbol} {q}"
                );
            }
        }
    }
}

#[test]
fn invert() {
    assert_eq!(!Trinary::Unknown, Trinary::Unknown);
    assert_eq!(!!Trinary::True, Trinary::True);
    assert_eq!(!!Trinary::False, Trinary::False);
}

#[test]
fn hash() {
    let keys = [Trinary::True, Trinary::False, Trinary::Unknown];
    let map: HashMap<Trinary, String> = keys.iter().map(|k| (*k, format!("{k:?}"))).collect();
    for k in keys {
        assert_eq!(map[&k], format!("{k:?}"));
    }
    assert!(std::any::type_name::<Trinary>().ends_with("Trinary"));
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn values_are_send_and_sync() {
    assert_send_sync::<Trinary>();
    assert_send_sync::<Operator>();
    assert_send_sync::<Value>();
    assert_send_sync::<trinary::TruthTable>();
}

#[test]
fn str() {
    assert_eq!(Trinary::Unknown.to_string(), "Unknown");
    assert_eq!(format!("{:?}", Trinary::Unknown), "Unknown");
}

#[test]
fn every_unknown_is_the_same_value() {
    let state = RandomState::new();
    let unknowns = [
        Trinary::Unknown,
        Trinary::from(None),
        "Unknown".parse().unwrap(),
        Trinary::True ^ Trinary::Unknown,
        Operator::Eq.apply(Trinary::Unknown, Trinary::Unknown),
        serde_json::from_str("null").unwrap(),
    ];
    for u in unknowns {
        assert_eq!(u, Trinary::Unknown);
        assert_eq!(state.hash_one(u), state.hash_one(Trinary::Unknown));
    }
}

#[test]
fn is_logic_value() {
    for t in [Trinary::True, Trinary::False, Trinary::Unknown] {
        assert!(Value::from(t).is_logic());
    }
}

#[test]
fn not_is_logic_value() {
    for val in [json!(""), json!(0), json!(0.0), json!([]), json!({})] {
        assert!(!Value::from(val).is_logic());
    }
}

#[test]
fn op_not_implemented() {
    let unknown = Value::from(Trinary::Unknown);
    let none = Value::from(json!(null));
    for op in Operator::ALL.into_iter().filter(|op| op.is_restricted()) {
        assert!(matches!(
            none.apply(op, &unknown),
            Err(value::Error::UnsupportedOperand { .. })
        ));
        assert!(matches!(
            unknown.apply(op, &none),
            Err(value::Error::UnsupportedOperand { .. })
        ));
    }
}

#[test]
fn bool_raises() {
    assert!(bool::try_from(Trinary::Unknown).is_err());
    assert_eq!(bool::try_from(Trinary::True), Ok(true));
    assert_eq!(bool::try_from(Trinary::False), Ok(false));
}

#[test]
fn strictly_and_weakly_known() {
    let values = [
        Value::from(true),
        Value::from(false),
        Value::from(json!([])),
        Value::from(json!([0])),
    ];
    for val in values {
        let b = val.to_bool().unwrap();
        assert_eq!(strictly(&val), b, "{val}");
        assert_eq!(weakly(&val), b, "{val}");
    }
}

#[test]
fn strictly_and_weakly() {
    assert!(!strictly(&Trinary::Unknown));
    assert!(weakly(&Trinary::Unknown));
}
