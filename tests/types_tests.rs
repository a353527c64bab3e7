//! Type and registry tests

use match3::types::{Type, Types};

#[test]
fn test_relaxed_equality() {
    let a = Type::new("a");
    let b = Type::new("b");

    assert!(a == Type::ANY);
    assert!(Type::ANY == a);
    assert!(Type::ANY == Type::ANY);
    assert!(Type::ANY != Type::NONE);
    assert!(Type::NONE != Type::ANY);
    assert!(Type::NONE == Type::NONE);
    assert!(a != b);
    assert!(a != Type::NONE);
    assert!(a == Type::new("a"));
}

#[test]
fn test_relaxed_equality_is_not_transitive() {
    let a = Type::new("a");
    let b = Type::new("b");
    assert!(a == Type::ANY && Type::ANY == b);
    assert!(a != b);
}

#[test]
fn test_registry_union_is_idempotent() {
    let mut types = Types::new();
    assert!(types.is_empty());

    types.add_types(["red", "green"]);
    types.add_types(["green", "blue", "red"]);
    assert_eq!(types.len(), 3);

    let names: Vec<&str> = types.iter().map(Type::name).collect();
    assert_eq!(names, vec!["red", "green", "blue"]);
}

#[test]
fn test_registry_skips_sentinels() {
    let mut types = Types::new();
    assert!(!types.add_type(Type::NONE));
    assert!(!types.add_type(Type::ANY));
    assert!(!types.add_type(Type::new("*")));
    assert!(types.add_type(Type::new("a")));
    assert!(!types.add_type(Type::new("a")));
    assert_eq!(types.len(), 1);
}

#[test]
fn test_registry_membership_is_exact() {
    let types: Types = ["a", "b"].into_iter().collect();
    assert!(types.contains(&Type::new("a")));
    assert!(!types.contains(&Type::ANY));
    assert!(!types.contains(&Type::new("c")));
}

#[test]
fn test_registry_clear() {
    let mut types: Types = ["a", "b"].into_iter().collect();
    types.clear();
    assert!(types.is_empty());
    assert_eq!(types.iter().count(), 0);
}

