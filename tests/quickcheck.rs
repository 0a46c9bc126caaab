use avl::Set;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use std::collections::BTreeSet;

fn shape(set: &Set<u32>) -> Vec<(u32, usize)> {
    set.traverse().map(|(value, depth)| (*value, depth)).collect()
}

#[quickcheck]
fn iteration_ascends(set: Set<u32>) -> bool {
    set.iter().zip(set.iter().skip(1)).all(|(a, b)| a < b)
}

#[quickcheck]
fn len_matches_traversal(set: Set<u32>) -> bool {
    set.len() == set.traverse().count()
}

#[quickcheck]
fn insert_makes_contains_true(mut set: Set<u32>, value: u32) -> bool {
    set.insert(value);
    set.contains(&value)
}

#[quickcheck]
fn insert_reports_prior_absence(mut set: Set<u32>, value: u32) -> bool {
    let was_absent = !set.contains(&value);
    set.insert(value) == was_absent
}

#[quickcheck]
fn reinsert_changes_nothing(mut set: Set<u32>, value: u32) -> bool {
    set.insert(value);
    let len = set.len();
    let before = shape(&set);

    !set.insert(value) && set.len() == len && shape(&set) == before
}

#[quickcheck]
fn remove_removes_only_the_value(mut set: Set<u32>, value: u32) -> bool {
    let expected: Vec<u32> = set.iter().cloned().filter(|&v| v != value).collect();
    set.remove(&value);

    !set.contains(&value) && set.iter().cloned().collect::<Vec<_>>() == expected
}

#[quickcheck]
fn remove_absent_changes_nothing(mut set: Set<u32>, value: u32) -> TestResult {
    if set.contains(&value) {
        return TestResult::discard();
    }

    let before = shape(&set);
    TestResult::from_bool(!set.remove(&value) && shape(&set) == before)
}

#[quickcheck]
fn remove_updates_len(mut set: Set<u32>, value: u32) -> bool {
    let len = set.len();

    if set.remove(&value) {
        set.len() == len - 1
    } else {
        set.len() == len
    }
}

#[quickcheck]
fn root_is_the_only_value_at_depth_zero(set: Set<u32>) -> TestResult {
    if set.is_empty() {
        return TestResult::discard();
    }

    TestResult::from_bool(set.traverse().filter(|&(_, depth)| depth == 0).count() == 1)
}

#[quickcheck]
fn into_iter_agrees_with_iter(set: Set<u32>) -> bool {
    let expected: Vec<u32> = set.iter().cloned().collect();
    set.into_iter().collect::<Vec<_>>() == expected
}

#[quickcheck]
fn size_hint_is_exact(set: Set<u32>) -> bool {
    let mut len = set.len();
    let mut it = set.iter();

    loop {
        if it.size_hint() != (len, Some(len)) {
            return false;
        }
        if it.next().is_none() {
            break;
        }
        len -= 1;
    }

    len == 0 && it.size_hint() == (0, Some(0))
}

#[quickcheck]
fn agrees_with_btreeset(values: Vec<i32>, probes: Vec<i32>) -> bool {
    let set: Set<i32> = values.iter().cloned().collect();
    let model: BTreeSet<i32> = values.iter().cloned().collect();

    set.len() == model.len()
        && set.iter().eq(model.iter())
        && probes.iter().all(|v| set.contains(v) == model.contains(v))
}
