use std::collections::HashSet;
use std::fmt::Write;

use argitertools::{args_match, argsequal, argsort, MatchMode};
use blake3::hash;

fn render(values: &[i64]) -> String {
    let mut out = String::new();

    let matches = args_match(values.iter().copied(), |v| -v, MatchMode::All);
    for (key, group) in matches.iter() {
        writeln!(out, "{key}\t{:?}\t{:?}", group.args_equal, group.args_match).unwrap();
    }

    for (key, indices) in argsequal(values.iter().copied()).iter() {
        writeln!(out, "{key}\t{indices:?}").unwrap();
    }

    writeln!(out, "{:?}", argsort(values)).unwrap();
    out
}

#[test]
fn outputs_do_not_depend_on_hash_seeds() {
    let values: Vec<i64> = (0..200).map(|i| ((i * 7919) % 61) - 30).collect();

    // Each run builds fresh hash maps with fresh random seeds
    let fingerprints: HashSet<_> = (0..5).map(|_| hash(render(&values).as_bytes())).collect();

    assert_eq!(fingerprints.len(), 1, "outputs diverged across runs");
}
