use quickcheck::{Arbitrary, Gen};
use ranked_queue::{Comparator, ItemHandle, QueueError, RankedQueue};
use std::fmt::Debug;
use std::rc::Rc;
use std::vec::Vec;

const MAX_OPS: usize = 500;

/// One call against a queue.
///
/// Item indices and positions are raw; they are reduced modulo the queue length when the
/// operation runs, with positions allowed to fall one past either end.
#[derive(Debug, Clone, Copy)]
pub enum Op {
    Enqueue,
    Dequeue,
    Reorder(usize, usize),
    Promote(usize, usize),
    Demote(usize, usize),
    RemoveAt(usize),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        // Enqueue twice as often as anything else so queues actually grow.
        match u8::arbitrary(g) % 7 {
            0 | 1 => Op::Enqueue,
            2 => Op::Dequeue,
            3 => Op::Reorder(usize::arbitrary(g), usize::arbitrary(g)),
            4 => Op::Promote(usize::arbitrary(g), usize::arbitrary(g)),
            5 => Op::Demote(usize::arbitrary(g), usize::arbitrary(g)),
            _ => Op::RemoveAt(usize::arbitrary(g)),
        }
    }
}

#[derive(Clone)]
pub struct Ops {
    len: usize,
    ops: Rc<Vec<Op>>,
}

impl Debug for Ops {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ops")
            .field("len", &self.len)
            .field("ops", &self.ops.as_slice()[..self.len].iter())
            .finish()
    }
}

impl Arbitrary for Ops {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = usize::arbitrary(g) % MAX_OPS;
        let ops: Vec<Op> = (0..n).map(|_| Op::arbitrary(g)).collect();
        Ops {
            len: ops.len(),
            ops: Rc::new(ops),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut lens = Vec::new();

        // Bisect op history
        let mut len = self.len / 2;
        while 0 < len && len < self.len - 1 {
            lens.push(Ops {
                len,
                ops: self.ops.clone(),
            });
            len += (self.len - len) / 2;
        }

        if self.len > 1 {
            lens.push(Ops {
                len: self.len - 1,
                ops: self.ops.clone(),
            })
        }

        Box::new(lens.into_iter())
    }
}

/// Whether every handle in `model` sits at the rank its index says it should.
fn matches_model<T>(queue: &RankedQueue<T>, model: &[(usize, ItemHandle)]) -> bool {
    queue.len() == model.len()
        && model
            .iter()
            .enumerate()
            .all(|(i, &(_, h))| queue.position_of(h) == Some(i + 1))
}

/// Run `ops` against a queue and against a plain vector holding the expected rank order.
///
/// Fails as soon as the two disagree, or a call fails with an error other than the one its
/// arguments call for.
pub fn qc_model_common<C: Comparator<usize> + Default + 'static>(ops: Ops) -> bool {
    let mut queue = RankedQueue::with_comparator(C::default());
    let mut model: Vec<(usize, ItemHandle)> = Vec::new();
    let mut serial = 0;

    for &op in ops.ops.as_slice()[..ops.len].iter() {
        let len = model.len();
        match op {
            Op::Enqueue => {
                let h = queue.enqueue(serial);
                model.push((serial, h));
                serial += 1;
            }
            Op::Dequeue => match queue.dequeue() {
                Ok(item) => match model.iter().position(|&(p, _)| p == *item.payload()) {
                    Some(i) => {
                        model.remove(i);
                    }
                    None => {
                        println!("dequeued unknown item {:?}", item);
                        return false;
                    }
                },
                Err(QueueError::EmptyQueue) if len == 0 => {}
                Err(err) => {
                    println!("dequeue failed: {err}");
                    return false;
                }
            },
            Op::Reorder(i, p) | Op::Promote(i, p) | Op::Demote(i, p) => {
                if len == 0 {
                    continue;
                }
                let index = i % len;
                let current = index + 1;
                let requested = p % (len + 2);
                let (_, h) = model[index];

                let in_range = (1..=len).contains(&requested);
                let (result, allowed) = match op {
                    Op::Promote(..) => (queue.promote(h, requested), requested <= current),
                    Op::Demote(..) => (queue.demote(h, requested), requested >= current),
                    _ => (queue.reorder(h, requested).map(|_| ()), true),
                };

                match result {
                    Ok(()) if in_range && allowed => {
                        let moved = model.remove(index);
                        model.insert(requested - 1, moved);
                    }
                    Err(QueueError::InvalidPosition { .. }) if !in_range => {}
                    Err(QueueError::DirectionMismatch { .. }) if in_range && !allowed => {}
                    other => {
                        println!("{op:?} on {len} items gave {other:?}");
                        return false;
                    }
                }
            }
            Op::RemoveAt(p) => {
                let position = p % (len + 2);
                let in_range = (1..=len).contains(&position);
                match queue.remove_item_at(position) {
                    Ok(_) if in_range => {
                        model.remove(position - 1);
                    }
                    Err(QueueError::PositionOutOfRange { .. }) if !in_range => {}
                    other => {
                        println!("{op:?} on {len} items gave {:?}", other.map(|v| v.len()));
                        return false;
                    }
                }
            }
        }

        if !matches_model(&queue, &model) {
            println!("queue diverged from model after {op:?}");
            return false;
        }
    }
    true
}
