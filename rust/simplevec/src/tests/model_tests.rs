//! Randomized comparison against `Vec` as a reference model.

use simplevec_testkit::{Op, OpScript};

use crate::{Position, SimpleVector};

fn apply(v: &mut SimpleVector<i64>, model: &mut Vec<i64>, op: &Op) {
    let capacity = v.capacity();
    let len = v.len();
    match *op {
        Op::PushBack(value) => {
            v.push_back(value);
            model.push(value);
            if len == capacity {
                assert_eq!(v.capacity(), (capacity * 2).max(1));
            } else {
                assert_eq!(v.capacity(), capacity);
            }
        }
        Op::PopBack => {
            v.pop_back();
            model.pop();
            assert_eq!(v.capacity(), capacity);
        }
        Op::Insert { index, value } => {
            let pos = v.insert(Position::new(index), value);
            model.insert(index, value);
            assert_eq!(v[pos], value);
            if len == capacity {
                assert_eq!(v.capacity(), (capacity * 2).max(1));
            } else {
                assert_eq!(v.capacity(), capacity);
            }
        }
        Op::Erase { index } => {
            let pos = v.erase(Position::new(index));
            model.remove(index);
            assert_eq!(pos.index(), index);
            assert_eq!(v.capacity(), capacity);
        }
        Op::Set { index, value } => {
            *v.at_mut(index).unwrap() = value;
            model[index] = value;
        }
        Op::Resize(n) => {
            v.resize(n);
            model.resize(n, 0);
            assert_eq!(v.capacity(), capacity.max(n));
        }
        Op::Reserve(n) => {
            v.reserve(n);
            assert_eq!(v.capacity(), capacity.max(n));
        }
        Op::Clear => {
            v.clear();
            model.clear();
            assert_eq!(v.capacity(), capacity);
        }
    }
}

#[test]
fn test_random_ops_match_vec() {
    for seed in 0..32 {
        let mut v = SimpleVector::new();
        let mut model = Vec::new();
        for op in OpScript::new(seed).take(500) {
            apply(&mut v, &mut model, &op);
            assert_eq!(v, model, "seed {seed}, after {op:?}");
            assert!(v.len() <= v.capacity());
            for i in 0..v.len() {
                assert_eq!(v[i], *v.at(i).unwrap());
            }
            assert!(v.at(v.len()).is_err());
        }
    }
}

#[test]
fn test_random_ops_ordering_matches_vec() {
    let mut rng = fastrand::Rng::with_seed(6412384656);
    for _ in 0..200 {
        let a: Vec<i64> = (0..rng.usize(0..6)).map(|_| rng.i64(0..3)).collect();
        let b: Vec<i64> = (0..rng.usize(0..6)).map(|_| rng.i64(0..3)).collect();
        let va = SimpleVector::from(a.clone());
        let vb = SimpleVector::from(b.clone());
        assert_eq!(va == vb, a == b);
        assert_eq!(va < vb, a < b);
        assert_eq!(va <= vb, a <= b);
        assert_eq!(va > vb, a > b);
        assert_eq!(va >= vb, a >= b);
        assert_eq!(va.cmp(&vb), a.cmp(&b));
    }
}
