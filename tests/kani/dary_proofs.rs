//! Proofs over symbolic weights, degrees and removal indices
//!
//! Heaps are kept tiny so every sink/swim loop unwinds within the bound.

#[cfg(kani)]
use dary_heap::{DaryHeap, Node};

/// Proof: Empty heap operations are safe
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(3)]
fn verify_empty_heap_operations() {
    let degree: usize = kani::any();
    let mut heap: DaryHeap<Node<u8, u8>> = DaryHeap::new(degree);

    assert!(heap.degree() >= 2);
    assert!(heap.is_empty());
    assert!(heap.len() == 0);
    assert!(heap.peek_node().is_none());
    assert!(heap.pop_node().is_none());
    assert!(heap.try_remove_at(0).is_err());
}

/// Proof: Peek returns the minimum of three symbolic weights
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_peek_is_minimum() {
    let degree: usize = kani::any();
    kani::assume(degree <= 4);
    let a: i8 = kani::any();
    let b: i8 = kani::any();
    let c: i8 = kani::any();

    let heap = DaryHeap::from_nodes(degree, [Node::new(0u8, a), Node::new(1, b), Node::new(2, c)]);

    let min = a.min(b).min(c);
    assert!(heap.peek_node().map(|n| n.weight) == Some(min));
    assert!(heap.is_valid());
}

/// Proof: Removing any index of a four-node heap keeps the heap property
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_remove_at_any_index() {
    let degree: usize = kani::any();
    kani::assume(degree >= 2 && degree <= 3);
    let weights: [i8; 4] = kani::any();
    let index: usize = kani::any();
    kani::assume(index < 4);

    let mut heap = DaryHeap::from_nodes(
        degree,
        weights.iter().enumerate().map(|(v, &w)| Node::new(v as u8, w)),
    );
    let expected = heap.as_slice()[index];
    let removed = heap.remove_at(index);

    assert!(removed == expected);
    assert!(heap.len() == 3);
    assert!(heap.is_valid());
}

/// Proof: Two polls come out in non-decreasing order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_poll_order() {
    let weights: [i8; 3] = kani::any();
    let mut heap = DaryHeap::heapify(3, weights.iter().map(|&w| Node::new((), w)).collect());

    let first = heap.pop_node().map(|n| n.weight);
    let second = heap.pop_node().map(|n| n.weight);
    assert!(first.is_some() && second.is_some());
    assert!(first <= second);
    assert!(heap.len() == 1);
}
