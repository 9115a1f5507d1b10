use muinstr::modules::{Function, Module, symbol::FuncId};
use mucore::partition::round_robin;

fn module_from(entries: &[(&str, bool)]) -> Module {
    Module {
        functions: entries
            .iter()
            .map(|(name, defined)| Function {
                name: name.to_string(),
                defined: *defined,
                blocks: Vec::new(),
            })
            .collect(),
    }
}

#[test]
fn buckets_exactly_partition_the_defined_set() {
    let module = module_from(&[
        ("a", true),
        ("ext0", false),
        ("b", true),
        ("c", true),
        ("d", true),
        ("ext1", false),
        ("e", true),
        ("f", true),
        ("g", true),
    ]);

    let buckets = round_robin(&module, 3);
    assert_eq!(buckets.len(), 3);

    let mut seen = Vec::new();
    for bucket in &buckets {
        for unit in bucket {
            assert!(
                !seen.contains(&unit.id),
                "function {} assigned to more than one bucket",
                unit.id
            );
            seen.push(unit.id);
        }
    }

    let expected: Vec<FuncId> = module.defined_functions().map(|(id, _)| id).collect();
    seen.sort();
    assert_eq!(seen, expected);
}

#[test]
fn round_robin_assigns_by_discovery_order() {
    let module = module_from(&[
        ("a", true),
        ("b", true),
        ("c", true),
        ("d", true),
        ("e", true),
    ]);

    let buckets = round_robin(&module, 2);
    let first: Vec<_> = buckets[0].iter().map(|u| u.function.name.as_str()).collect();
    let second: Vec<_> = buckets[1].iter().map(|u| u.function.name.as_str()).collect();

    assert_eq!(first, vec!["a", "c", "e"]);
    assert_eq!(second, vec!["b", "d"]);
}

#[test]
fn single_bucket_preserves_discovery_order() {
    let module = module_from(&[("a", true), ("skip", false), ("b", true), ("c", true)]);

    let buckets = round_robin(&module, 1);
    assert_eq!(buckets.len(), 1);

    let names: Vec<_> = buckets[0].iter().map(|u| u.function.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn excess_buckets_stay_empty() {
    let module = module_from(&[("a", true), ("b", true)]);

    let buckets = round_robin(&module, 5);
    assert_eq!(buckets.len(), 5);
    assert_eq!(buckets[0].len(), 1);
    assert_eq!(buckets[1].len(), 1);
    for bucket in &buckets[2..] {
        assert!(bucket.is_empty());
    }
}

#[test]
fn zero_requested_buckets_clamp_to_one() {
    let module = module_from(&[("a", true)]);

    let buckets = round_robin(&module, 0);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].len(), 1);
}

#[test]
fn repartitioning_identical_input_is_deterministic() {
    let module = module_from(&[
        ("a", true),
        ("b", true),
        ("x", false),
        ("c", true),
        ("d", true),
    ]);

    let first: Vec<Vec<FuncId>> = round_robin(&module, 3)
        .iter()
        .map(|bucket| bucket.iter().map(|u| u.id).collect())
        .collect();
    let second: Vec<Vec<FuncId>> = round_robin(&module, 3)
        .iter()
        .map(|bucket| bucket.iter().map(|u| u.id).collect())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn declarations_are_never_assigned() {
    let module = module_from(&[("ext0", false), ("ext1", false)]);

    let buckets = round_robin(&module, 4);
    assert!(buckets.iter().all(|bucket| bucket.is_empty()));
}
