//! Seeded random operation scripts.
//!
//! An [`OpScript`] tracks the logical length its operations produce, so
//! every generated index is valid for a container that applied all previous
//! operations.

/// A single mutation applied to a vector under test and to its model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    PushBack(i64),
    PopBack,
    Insert { index: usize, value: i64 },
    Erase { index: usize },
    Set { index: usize, value: i64 },
    Resize(usize),
    Reserve(usize),
    Clear,
}

pub struct OpScript {
    rng: fastrand::Rng,
    len: usize,
    max_len: usize,
}

impl OpScript {
    pub fn new(seed: u64) -> OpScript {
        OpScript::with_max_len(seed, 64)
    }

    /// Creates a script whose `Resize` and `Reserve` targets stay below
    /// `max_len`.
    pub fn with_max_len(seed: u64, max_len: usize) -> OpScript {
        assert!(max_len > 0);
        OpScript {
            rng: fastrand::Rng::with_seed(seed),
            len: 0,
            max_len,
        }
    }

    /// Logical length after all operations produced so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next_op(&mut self) -> Op {
        loop {
            let value = self.rng.i64(-1000..1000);
            let op = match self.rng.u8(0..16) {
                0..=4 => Op::PushBack(value),
                5..=7 => Op::Insert {
                    index: self.rng.usize(0..=self.len),
                    value,
                },
                8 | 9 if self.len > 0 => Op::Erase {
                    index: self.rng.usize(0..self.len),
                },
                10 if self.len > 0 => Op::PopBack,
                11 | 12 if self.len > 0 => Op::Set {
                    index: self.rng.usize(0..self.len),
                    value,
                },
                13 => Op::Resize(self.rng.usize(0..self.max_len)),
                14 => Op::Reserve(self.rng.usize(0..self.max_len * 2)),
                15 if self.rng.u8(0..8) == 0 => Op::Clear,
                _ => continue,
            };
            self.apply_len(&op);
            return op;
        }
    }

    fn apply_len(&mut self, op: &Op) {
        match *op {
            Op::PushBack(_) | Op::Insert { .. } => self.len += 1,
            Op::PopBack | Op::Erase { .. } => self.len -= 1,
            Op::Resize(n) => self.len = n,
            Op::Clear => self.len = 0,
            Op::Set { .. } | Op::Reserve(_) => (),
        }
    }
}

impl Iterator for OpScript {
    type Item = Op;

    fn next(&mut self) -> Option<Op> {
        Some(self.next_op())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_is_deterministic() {
        let a: Vec<Op> = OpScript::new(42).take(200).collect();
        let b: Vec<Op> = OpScript::new(42).take(200).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_indices_are_valid() {
        let mut len = 0usize;
        let mut script = OpScript::with_max_len(7, 16);
        for _ in 0..2000 {
            let op = script.next_op();
            match op {
                Op::Insert { index, .. } => {
                    assert!(index <= len);
                    len += 1;
                }
                Op::Erase { index } => {
                    assert!(index < len);
                    len -= 1;
                }
                Op::Set { index, .. } => assert!(index < len),
                Op::PopBack => {
                    assert!(len > 0);
                    len -= 1;
                }
                Op::PushBack(_) => len += 1,
                Op::Resize(n) => {
                    assert!(n < 16);
                    len = n;
                }
                Op::Clear => len = 0,
                Op::Reserve(_) => (),
            }
            assert_eq!(len, script.len());
        }
    }
}
