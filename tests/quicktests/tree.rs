use bstree::BinarySearchTree;

use std::collections::{BTreeSet, HashMap, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut BinarySearchTree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Remove(v) => {
                assert_eq!(tree.remove(v).ok(), set.take(v));
            }
        }
    }
}

/// A tiny reference model of BST insertion that only tracks each value's
/// depth. Children are value-to-value maps, which works because duplicate
/// inserts are no-ops and every stored value is unique.
fn reference_depths(xs: &[i8]) -> HashMap<i8, u32> {
    let mut root = None;
    let mut left: HashMap<i8, i8> = HashMap::new();
    let mut right: HashMap<i8, i8> = HashMap::new();
    let mut depth = HashMap::new();

    for &x in xs {
        let Some(mut current) = root else {
            root = Some(x);
            depth.insert(x, 0);
            continue;
        };
        loop {
            if x == current {
                break;
            }
            let children = if x > current { &mut right } else { &mut left };
            match children.get(&current) {
                Some(&next) => current = next,
                None => {
                    children.insert(current, x);
                    depth.insert(x, depth[&current] + 1);
                    break;
                }
            }
        }
    }
    depth
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    set.iter().all(|v| tree.find(v) == Some(v)) && tree.len() == set.len()
}

#[quickcheck]
fn in_order_matches_sorted_set(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.dfs_in_order().eq(set.iter())
}

#[quickcheck]
fn bfs_visits_shallower_values_first(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<i8> = xs.iter().copied().collect();
    let depths = reference_depths(&xs);

    let visited: Vec<u32> = tree.bfs().map(|v| depths[v]).collect();
    visited.len() == depths.len() && visited.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = BinarySearchTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = BinarySearchTree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree = BinarySearchTree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for remove in &removes {
        let _ = tree.remove(remove);
    }

    let added: HashSet<_> = xs.into_iter().collect();
    let removed: HashSet<_> = removes.into_iter().collect();
    let mut still_present = added.difference(&removed);

    removed.iter().all(|x| tree.find(x).is_none())
        && still_present.all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn without_never_mutates_the_original(xs: Vec<i8>, victim: i8) -> bool {
    let tree: BinarySearchTree<i8> = xs.into_iter().collect();
    let before: Vec<i8> = tree.dfs_in_order().copied().collect();

    let smaller = tree.without(&victim);
    let after: Vec<i8> = tree.dfs_in_order().copied().collect();

    before == after && smaller.find(&victim).is_none()
}
