use super::*;
use pretty_assertions::assert_eq;

#[test]
fn counter_starts_empty() {
    let counter = TypeCounter::new();
    assert_eq!(counter.total(), 0);
    assert_eq!(counter.get(DescriptorKind::List), 0);
    assert!(counter.snapshot().is_empty());
}

#[test]
fn counter_tallies_per_kind() {
    let counter = TypeCounter::new();
    counter.type_parsed(DescriptorKind::LocalReference);
    counter.type_parsed(DescriptorKind::List);
    counter.type_parsed(DescriptorKind::LocalReference);

    assert_eq!(counter.get(DescriptorKind::LocalReference), 2);
    assert_eq!(counter.total(), 3);
    assert_eq!(
        counter.snapshot(),
        vec![(DescriptorKind::List, 1), (DescriptorKind::LocalReference, 2)]
    );
}

#[test]
fn reset_clears_counts() {
    let counter = TypeCounter::new();
    counter.type_parsed(DescriptorKind::Any);
    counter.reset();
    assert_eq!(counter.total(), 0);
}

#[test]
fn counter_is_shareable_across_threads() {
    let counter = TypeCounter::new();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    counter.type_parsed(DescriptorKind::Set);
                }
            });
        }
    });
    assert_eq!(counter.get(DescriptorKind::Set), 400);
}
