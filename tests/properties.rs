//! Model-based properties: arbitrary operation sequences checked against a
//! plain `Vec` multiset model.

use proptest::prelude::*;
use rand_queue::RandQueue;

#[derive(Debug, Clone)]
enum Op {
    Enqueue(u16),
    Dequeue,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u16>().prop_map(Op::Enqueue),
        2 => Just(Op::Dequeue),
    ]
}

proptest! {
    #[test]
    fn queue_tracks_a_multiset_model(
        seed: u64,
        ops in proptest::collection::vec(op_strategy(), 0..200),
    ) {
        let mut queue = RandQueue::with_seed(seed);
        let mut model: Vec<u16> = Vec::new();

        for op in ops {
            match op {
                Op::Enqueue(value) => {
                    queue.enqueue(value);
                    model.push(value);
                }
                Op::Dequeue => match queue.dequeue() {
                    Some(value) => {
                        let pos = model.iter().position(|&m| m == value);
                        prop_assert!(pos.is_some(), "dequeued {value} not in model");
                        model.swap_remove(pos.unwrap());
                    }
                    None => prop_assert!(model.is_empty()),
                },
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            prop_assert!(queue.capacity() >= queue.len());
        }

        let mut drained: Vec<u16> = queue.into_iter().collect();
        drained.sort_unstable();
        model.sort_unstable();
        prop_assert_eq!(drained, model);
    }

    #[test]
    fn every_iterator_is_a_permutation_of_the_contents(
        items in proptest::collection::vec(any::<u8>(), 0..100),
    ) {
        let queue: RandQueue<u8> = items.iter().copied().collect();
        let mut expected = items;
        expected.sort_unstable();

        let mut borrowed: Vec<u8> = queue.iter().copied().collect();
        borrowed.sort_unstable();
        prop_assert_eq!(&borrowed, &expected);

        let mut snapshot: Vec<u8> = queue.snapshot_iter().collect();
        snapshot.sort_unstable();
        prop_assert_eq!(&snapshot, &expected);

        let mut drained: Vec<u8> = queue.into_iter().collect();
        drained.sort_unstable();
        prop_assert_eq!(&drained, &expected);
    }

    #[test]
    fn sample_never_mutates(
        items in proptest::collection::vec(any::<u8>(), 1..50),
        draws in 1usize..50,
    ) {
        let mut queue: RandQueue<u8> = items.iter().copied().collect();
        for _ in 0..draws {
            let sampled = *queue.sample().unwrap();
            prop_assert!(items.contains(&sampled));
            prop_assert_eq!(queue.len(), items.len());
        }
    }
}
