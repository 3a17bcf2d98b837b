use priority_fifo::{EmptyQueue, StableQueue};
use quickcheck::{Arbitrary, Gen};
use std::cmp::Reverse;

const MAX_OPS: usize = 1000;

#[derive(Debug, Clone, Copy)]
pub enum Op {
    Push(i8),
    Pop,
}

#[derive(Clone, Debug)]
pub struct Ops(pub Vec<Op>);

impl Arbitrary for Ops {
    fn arbitrary(g: &mut Gen) -> Self {
        let n: usize = usize::arbitrary(g) % MAX_OPS;
        let mut ops = Vec::with_capacity(n);
        for _ in 0..n {
            if bool::arbitrary(g) {
                // Priorities from a small range so that ties are common.
                ops.push(Op::Push(i8::arbitrary(g) % 8));
            } else {
                ops.push(Op::Pop);
            }
        }
        Ops(ops)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut prefixes = Vec::new();

        // Bisect op history
        let mut len = self.0.len() / 2;
        while 0 < len && len < self.0.len() - 1 {
            prefixes.push(Ops(self.0[..len].to_vec()));
            len += (self.0.len() - len) / 2;
        }

        if self.0.len() > 1 {
            prefixes.push(Ops(self.0[..self.0.len() - 1].to_vec()));
        }

        Box::new(prefixes.into_iter())
    }
}

/// Replay an op sequence against a queue, recording the outcome of every pop. Pushed items are
/// numbered in push order.
pub fn replay<Q: StableQueue<usize, i8>>(ops: &Ops) -> Vec<Result<usize, EmptyQueue>> {
    let mut q = Q::new();
    let mut next_id = 0;
    let mut pops = Vec::new();
    for &op in ops.0.iter() {
        match op {
            Op::Push(p) => {
                q.push(next_id, p);
                next_id += 1;
            }
            Op::Pop => pops.push(q.pop()),
        }
    }
    pops
}

/// Brute-force reference: a flat list scanned for the max by (priority, earliest arrival).
fn model_pops(ops: &Ops) -> Vec<Result<usize, EmptyQueue>> {
    let mut entries: Vec<(i8, usize)> = Vec::new();
    let mut next_id = 0;
    let mut pops = Vec::new();
    for &op in ops.0.iter() {
        match op {
            Op::Push(p) => {
                entries.push((p, next_id));
                next_id += 1;
            }
            Op::Pop => {
                let winner = entries
                    .iter()
                    .enumerate()
                    .max_by_key(|&(i, &(p, _))| (p, Reverse(i)))
                    .map(|(i, _)| i);
                pops.push(match winner {
                    Some(i) => Ok(entries.remove(i).1),
                    None => Err(EmptyQueue),
                });
            }
        }
    }
    pops
}

pub fn qc_matches_model<Q: StableQueue<usize, i8>>(ops: Ops) -> bool {
    let got = replay::<Q>(&ops);
    let want = model_pops(&ops);
    if got != want {
        for (i, (g, w)) in got.iter().zip(want.iter()).enumerate() {
            if g != w {
                println!("pop[{}]: got {:?}, want {:?}", i, g, w);
            }
        }
        return false;
    }
    true
}
