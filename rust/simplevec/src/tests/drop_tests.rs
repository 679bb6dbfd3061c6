use simplevec_testkit::{LiveGuard, Tracked};

use crate::{Position, SimpleVector};

#[test]
fn test_growth_releases_old_storage() {
    let guard = LiveGuard::new();
    {
        let mut v = SimpleVector::new();
        for i in 0..50 {
            v.push_back(Tracked::new(i));
        }
        // 50 live elements plus 14 default slots of the 64-slot array.
        assert_eq!(guard.live(), 64);
        assert_eq!(v.capacity(), 64);
        assert_eq!(v[49].value(), 49);
    }
    guard.assert_balanced();
}

#[test]
fn test_insert_and_erase_do_not_leak() {
    let guard = LiveGuard::new();
    {
        let mut v: SimpleVector<Tracked> = (0..4).map(Tracked::new).collect();
        v.insert(Position::new(2), Tracked::new(100));
        v.insert(v.begin(), Tracked::new(200));
        v.erase(v.begin() + 3);
        v.pop_back();
        assert_eq!(
            v.iter().map(Tracked::value).collect::<Vec<_>>(),
            [200, 0, 1, 2]
        );
        assert_eq!(guard.live() as usize, v.capacity());
    }
    guard.assert_balanced();
}

#[test]
fn test_resize_and_clear_do_not_leak() {
    let guard = LiveGuard::new();
    {
        let mut v = SimpleVector::<Tracked>::with_size(3);
        v.resize(10);
        v.resize(2);
        v.resize(6);
        v.clear();
        v.reserve(20);
        assert_eq!(guard.live(), 20);
    }
    guard.assert_balanced();
}

#[test]
fn test_clone_copies_live_elements_only() {
    let guard = LiveGuard::new();
    {
        let mut src: SimpleVector<Tracked> = (0..3).map(Tracked::new).collect();
        src.reserve(8);
        let clones = guard.clones();
        let copy = src.clone();
        assert_eq!(guard.clones() - clones, 3);
        assert_eq!(copy.capacity(), 8);

        let clones = guard.clones();
        let mut dst = SimpleVector::<Tracked>::with_size(5);
        dst.clone_from(&src);
        assert_eq!(guard.clones() - clones, 3);
        assert_eq!(dst.capacity(), 3);
        assert_eq!(dst, src);
    }
    guard.assert_balanced();
}

#[test]
fn test_partially_consumed_into_iter_drops_the_rest() {
    let guard = LiveGuard::new();
    {
        let mut v: SimpleVector<Tracked> = (0..6).map(Tracked::new).collect();
        v.reserve(12);
        let mut it = v.into_iter();
        assert_eq!(it.next().map(|t| t.value()), Some(0));
        assert_eq!(guard.live(), 5);
    }
    guard.assert_balanced();
}

#[test]
fn test_swap_and_take_do_not_leak() {
    let guard = LiveGuard::new();
    {
        let mut a: SimpleVector<Tracked> = (0..3).map(Tracked::new).collect();
        let mut b = SimpleVector::<Tracked>::with_capacity(5);
        a.swap(&mut b);
        let c = std::mem::take(&mut b);
        assert!(b.is_empty());
        assert_eq!(c.len(), 3);
        assert_eq!(guard.live(), 8);
    }
    guard.assert_balanced();
}
