//! End-to-end tests for hydrating writes.
//!
//! Each test assigns through the public API and reads the result back with
//! `resolve`, checking the graph shape where hydration is involved.

use pretty_assertions::assert_eq;
use rich_keypath::{
    assign, classify, is_mutable, resolve, AccessorConfig, Error, KeyPathAccessor, NodeKind,
    PadPolicy, Record, Value,
};

// ============================================================================
// 1. Hydration
// ============================================================================

#[test]
fn test_hydrate_from_empty_dictionary() {
    let mut root = Value::map();
    assign(&mut root, "a.b[0]", Value::from(5)).unwrap();

    let expected = Value::from(vec![("a", Value::from(vec![("b", Value::from(vec![5]))]))]);
    assert_eq!(root, expected);
    assert_eq!(resolve(&root, "a.b[0]").unwrap(), &Value::Int(5));
}

#[test]
fn test_hydrate_nested_sequences() {
    let mut root = Value::map();
    assign(&mut root, "grid[1][2]", Value::from("x")).unwrap();

    assert_eq!(
        resolve(&root, "grid").unwrap(),
        &Value::List(vec![
            Value::Null,
            Value::List(vec![Value::Null, Value::Null, Value::from("x")]),
        ])
    );
}

#[test]
fn test_existing_siblings_survive() {
    let mut root = Value::from(vec![("a", Value::from(vec![("keep", 1)]))]);
    assign(&mut root, "a.added", Value::from(2)).unwrap();
    assert_eq!(resolve(&root, "a.keep").unwrap(), &Value::Int(1));
    assert_eq!(resolve(&root, "a.added").unwrap(), &Value::Int(2));
}

#[test]
fn test_null_intermediate_is_replaced() {
    let mut root = Value::from(vec![("a", Value::Null)]);
    assign(&mut root, "a.b", Value::from(1)).unwrap();
    assert_eq!(classify(resolve(&root, "a").unwrap()), NodeKind::Dictionary);
}

#[test]
fn test_assign_is_idempotent() {
    let mut once = Value::map();
    assign(&mut once, "users[2].tags[0]", Value::from("x")).unwrap();

    let mut twice = Value::map();
    assign(&mut twice, "users[2].tags[0]", Value::from("x")).unwrap();
    assign(&mut twice, "users[2].tags[0]", Value::from("x")).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_overwrite_terminal_value() {
    let mut root = Value::map();
    assign(&mut root, "a.b", Value::from(1)).unwrap();
    assign(&mut root, "a.b", Value::from(vec![1, 2])).unwrap();
    assert_eq!(resolve(&root, "a.b[1]").unwrap(), &Value::Int(2));
}

// ============================================================================
// 2. Records
// ============================================================================

#[test]
fn test_open_record_gains_properties() {
    let mut root = Value::from(Record::new("User"));
    assign(&mut root, "profile.bio", Value::from("hi")).unwrap();
    assert_eq!(resolve(&root, "profile.bio").unwrap(), &Value::from("hi"));
    assert_eq!(classify(&root), NodeKind::Unknown);
}

#[test]
fn test_sealed_record_refuses() {
    let mut root = Value::from(Record::new("Frozen").sealed());
    assert!(!is_mutable(&root));

    let err = assign(&mut root, "x.y", Value::from(1)).unwrap_err();
    match err {
        Error::ImmutableTarget { path, kind } => {
            assert_eq!(path, "x");
            assert_eq!(kind, NodeKind::Unknown);
        }
        other => panic!("expected ImmutableTarget, got {other:?}"),
    }
    assert_eq!(root, Value::from(Record::new("Frozen").sealed()));
}

#[test]
fn test_sealed_record_keeps_open_child() {
    let sealed = Record::new("Doc").with_property("meta", Value::map()).sealed();
    let mut root = Value::from(vec![("r", Value::from(sealed))]);
    assign(&mut root, "r.meta.tag", Value::from("x")).unwrap();

    let r = resolve(&root, "r").unwrap();
    assert_eq!(classify(r), NodeKind::Unknown);
    assert!(!is_mutable(r));
    assert_eq!(resolve(&root, "r.meta.tag").unwrap(), &Value::from("x"));
}

// ============================================================================
// 3. Refusals
// ============================================================================

#[test]
fn test_cannot_descend_into_primitive() {
    let mut root = Value::from(vec![("a", "leaf")]);
    let err = assign(&mut root, "a.b", Value::from(1)).unwrap_err();
    assert!(matches!(err, Error::ImmutableTarget { kind: NodeKind::Primitive, .. }));
    assert_eq!(err.to_string(), "Cannot write 'a.b': Primitive container refuses mutation");
}

#[test]
fn test_root_tuple_is_not_growable() {
    let mut root = Value::Tuple(vec![Value::Int(1)]);
    assert!(!is_mutable(&root));
    assert!(matches!(
        assign(&mut root, "[1]", Value::from(2)),
        Err(Error::ImmutableTarget { kind: NodeKind::Array, .. })
    ));
    assert_eq!(root, Value::Tuple(vec![Value::Int(1)]));
}

#[test]
fn test_write_through_tuple_into_mutable_child() {
    let mut root = Value::from(vec![("t", Value::Tuple(vec![Value::map()]))]);
    assign(&mut root, "t[0].name", Value::from("inner")).unwrap();
    assert_eq!(resolve(&root, "t[0].name").unwrap(), &Value::from("inner"));
}

#[test]
fn test_malformed_path_is_never_applied() {
    let mut root = Value::map();
    assert!(matches!(
        assign(&mut root, "a.b[oops]", Value::from(1)),
        Err(Error::MalformedPath { .. })
    ));
    assert_eq!(root, Value::map());
}

// ============================================================================
// 4. Padding policy
// ============================================================================

#[test]
fn test_strict_append_policy() {
    let config = AccessorConfig::default().with_pad_policy(PadPolicy::StrictAppend);
    let accessor = KeyPathAccessor::with_config(config).unwrap();

    let mut root = Value::map();
    accessor.assign(&mut root, "xs[0]", Value::from(1)).unwrap();
    accessor.assign(&mut root, "xs[1]", Value::from(2)).unwrap();
    let err = accessor.assign(&mut root, "xs[5]", Value::from(6)).unwrap_err();

    assert!(matches!(err, Error::IndexOutOfRange { index: 5, len: 2, .. }));
    assert_eq!(accessor.resolve(&root, "xs").unwrap(), &Value::from(vec![1, 2]));
}

#[test]
fn test_huge_index_is_rejected_before_padding() {
    let mut root = Value::from(vec![("xs", Value::from(vec![1]))]);
    let err = assign(&mut root, "xs[1000000000000]", Value::from(2)).unwrap_err();

    assert!(matches!(err, Error::IndexOutOfRange { index: 1_000_000_000_000, len: 1, .. }));
    assert!(err.is_not_found());
    assert_eq!(resolve(&root, "xs").unwrap(), &Value::from(vec![1]));
}

#[test]
fn test_max_pad_bound() {
    let accessor = KeyPathAccessor::with_config(AccessorConfig::default().with_max_pad(3)).unwrap();

    let mut root = Value::map();
    accessor.assign(&mut root, "xs[3]", Value::from("d")).unwrap();
    assert_eq!(accessor.resolve(&root, "xs[0]").unwrap(), &Value::Null);

    let err = accessor.assign(&mut root, "xs[8]", Value::from("i")).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 8, len: 4, .. }));
    assert_eq!(accessor.resolve(&root, "xs").unwrap().as_slice().map(<[Value]>::len), Some(4));
}

#[test]
fn test_max_pad_from_json_config() {
    let config = AccessorConfig::from_json(r#"{"max_pad": 0}"#).unwrap();
    let accessor = KeyPathAccessor::with_config(config).unwrap();

    let mut root = Value::map();
    accessor.assign(&mut root, "xs[0]", Value::from(1)).unwrap();
    assert!(accessor.assign(&mut root, "xs[2]", Value::from(3)).is_err());
    assert_eq!(accessor.resolve(&root, "xs").unwrap(), &Value::from(vec![1]));
}

// ============================================================================
// 5. Wrong-kind intermediates
// ============================================================================

#[test]
fn test_key_into_array_replaces_it() {
    let mut root = Value::from(vec![("a", Value::from(vec![1]))]);
    assign(&mut root, "a.b", Value::from(1)).unwrap();
    assert_eq!(resolve(&root, "a").unwrap(), &Value::from(vec![("b", 1)]));
}

#[test]
fn test_index_into_dictionary_replaces_it() {
    let mut root = Value::from(vec![("a", Value::map())]);
    assign(&mut root, "a[0]", Value::from("v")).unwrap();
    assert_eq!(resolve(&root, "a").unwrap(), &Value::from(vec!["v"]));
    assert!(is_mutable(resolve(&root, "a").unwrap()));
}

#[test]
fn test_tuple_becomes_mutable_copy() {
    let mut root = Value::from(vec![("t", Value::Tuple(vec![Value::Int(1)]))]);
    assign(&mut root, "t[1]", Value::from(2)).unwrap();
    assert_eq!(resolve(&root, "t").unwrap(), &Value::from(vec![1, 2]));
}

#[test]
fn test_sealed_record_under_mutable_parent_is_replaced() {
    let mut root = Value::from(vec![("r", Value::from(Record::new("Frozen").sealed()))]);
    assign(&mut root, "r.x.y", Value::from(1)).unwrap();
    assert_eq!(classify(resolve(&root, "r").unwrap()), NodeKind::Dictionary);
    assert_eq!(resolve(&root, "r.x.y").unwrap(), &Value::Int(1));
}

#[test]
fn test_replacement_deep_in_the_path() {
    let mut root = Value::from(vec![("a", Value::from(vec![("b", Value::from(vec![1, 2]))]))]);
    assign(&mut root, "a.b.c[0]", Value::from(true)).unwrap();
    assert_eq!(resolve(&root, "a.b.c[0]").unwrap(), &Value::Bool(true));
}

#[test]
fn test_primitive_intermediate_is_still_refused() {
    let mut root = Value::from(vec![("a", Value::from(vec![("b", "leaf")]))]);
    let err = assign(&mut root, "a.b.c", Value::from(1)).unwrap_err();
    assert!(matches!(err, Error::ImmutableTarget { kind: NodeKind::Primitive, .. }));
    assert_eq!(resolve(&root, "a.b").unwrap(), &Value::from("leaf"));
}

#[test]
fn test_no_replacement_without_mutable_parent() {
    let mut root = Value::from(Record::new("Frozen").with_property("xs", Value::from(vec![1])).sealed());
    let err = assign(&mut root, "xs.name", Value::from(1)).unwrap_err();
    match err {
        Error::ImmutableTarget { path, kind } => {
            assert_eq!(path, "xs");
            assert_eq!(kind, NodeKind::Unknown);
        }
        other => panic!("expected ImmutableTarget, got {other:?}"),
    }
    assert_eq!(resolve(&root, "xs").unwrap(), &Value::from(vec![1]));
}
