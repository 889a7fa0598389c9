//! Tests for notice_state

use super::*;
use proptest::prelude::*;

#[test]
fn test_add_requires_message_or_loader() {
    let mut registry = NoticeRegistry::new();

    assert!(matches!(
        registry.add(None, false),
        Err(NoticeError::InvalidArgument(_))
    ));
    assert!(matches!(
        registry.add(Some(""), false),
        Err(NoticeError::InvalidArgument(_))
    ));
    assert!(registry.is_empty());

    assert!(registry.add(None, true).is_ok());
    assert!(registry.add(Some("x"), false).is_ok());
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_add_returns_registered_record() {
    let mut registry = NoticeRegistry::new();
    let notice = registry.add(Some("Saving"), true).unwrap();

    assert_eq!(notice.message(), Some("Saving"));
    assert!(notice.wants_loader());
    assert_eq!(registry.list(), &[notice]);
}

#[test]
fn test_empty_message_with_loader_is_absent() {
    let mut registry = NoticeRegistry::new();
    let notice = registry.add(Some(""), true).unwrap();
    assert_eq!(notice.message(), None);
}

#[test]
fn test_ids_are_unique_and_increasing() {
    let mut first = NoticeRegistry::new();
    let mut second = NoticeRegistry::new();

    let a = first.add(Some("a"), false).unwrap();
    let b = second.add(Some("b"), false).unwrap();
    let c = first.add(Some("c"), false).unwrap();

    assert!(a.id() < b.id());
    assert!(b.id() < c.id());
}

#[test]
fn test_list_keeps_insertion_order() {
    let mut registry = NoticeRegistry::new();
    registry.add(Some("A"), false).unwrap();
    registry.add(Some("B"), false).unwrap();
    registry.add(Some("C"), false).unwrap();

    let messages: Vec<_> = registry.list().iter().map(|n| n.message()).collect();
    assert_eq!(messages, vec![Some("A"), Some("B"), Some("C")]);
}

#[test]
fn test_remove_by_identity() {
    let mut registry = NoticeRegistry::new();
    let a = registry.add(Some("A"), false).unwrap();
    let b = registry.add(Some("B"), false).unwrap();

    registry.remove(&a).unwrap();

    assert_eq!(registry.list(), &[b]);
}

#[test]
fn test_remove_foreign_handle_fails_without_change() {
    let mut registry = NoticeRegistry::new();
    let mut other = NoticeRegistry::new();
    registry.add(Some("A"), false).unwrap();
    let foreign = other.add(Some("A"), false).unwrap();

    let result = registry.remove(&foreign);

    assert!(matches!(result, Err(NoticeError::InvalidArgument(_))));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_remove_twice_fails() {
    let mut registry = NoticeRegistry::new();
    let a = registry.add(Some("A"), false).unwrap();

    registry.remove(&a).unwrap();
    assert!(matches!(
        registry.remove(&a),
        Err(NoticeError::InvalidArgument(_))
    ));
}

#[test]
fn test_wants_loader_any() {
    let mut registry = NoticeRegistry::new();
    assert!(!registry.wants_loader());

    registry.add(Some("plain"), false).unwrap();
    assert!(!registry.wants_loader());

    let loading = registry.add(Some("busy"), true).unwrap();
    assert!(registry.wants_loader());

    registry.remove(&loading).unwrap();
    assert!(!registry.wants_loader());
}

#[derive(Debug, Clone)]
enum Op {
    Add(String, bool),
    Remove(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[a-z]{1,6}", any::<bool>()).prop_map(|(m, l)| Op::Add(m, l)),
        (0usize..8).prop_map(Op::Remove),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The registry always matches a plain Vec model driven by the same operations
    #[test]
    fn prop_registry_matches_model(ops in prop::collection::vec(op_strategy(), 1..30)) {
        let mut registry = NoticeRegistry::new();
        let mut model: Vec<Notice> = Vec::new();

        for op in ops {
            match op {
                Op::Add(message, loader) => {
                    let notice = registry.add(Some(message.as_str()), loader).unwrap();
                    model.push(notice);
                }
                Op::Remove(index) => {
                    if model.is_empty() {
                        continue;
                    }
                    let notice = model.remove(index % model.len());
                    registry.remove(&notice).unwrap();
                }
            }

            prop_assert_eq!(registry.list(), model.as_slice());
            prop_assert_eq!(
                registry.wants_loader(),
                model.iter().any(|n| n.wants_loader())
            );
        }
    }
}
