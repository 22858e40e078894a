//! A binary min-heap over the integers `[0, n)` with an element index.
//!
//! Besides the heap sequence itself the queue keeps a position index mapping
//! every element to its slot in the heap, so membership and priority lookups
//! are O(1) and an element's priority can be changed in O(log n).
//!
//! ### Performance Characteristics
//! | Operation | Complexity |
//! |-----------|------------|
//! | `insert` | \(O(\log n)\) |
//! | `insert_all` | \(O(k \log n)\) or \(O(n + k)\) via reheapify |
//! | `peek_min` | \(O(1)\) |
//! | `extract_min` | \(O(\log n)\) |
//! | `contains` / `priority` | \(O(1)\) |
//! | `change_priority` | \(O(\log n)\) |

use core::fmt;

/// Position marker for elements not currently in the heap.
const ABSENT: usize = usize::MAX;

/// A min-priority queue over a fixed universe of integer elements.
///
/// Priorities only need `PartialOrd`; incomparable values (such as `NaN`)
/// never move an entry, so they are best avoided.
#[derive(Clone)]
pub struct IndexedPriorityQueue<P> {
    /// Heap-ordered `(element, priority)` entries.
    heap: Vec<(usize, P)>,
    /// `position[e]` is the slot of `e` in `heap`, or `ABSENT`.
    position: Vec<usize>,
}

impl<P: PartialOrd + Copy> IndexedPriorityQueue<P> {
    /// Creates an empty queue accepting the elements `0..universe`.
    pub fn new(universe: usize) -> Self {
        Self {
            heap: Vec::new(),
            position: vec![ABSENT; universe],
        }
    }

    /// Returns the number of elements currently queued.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the size of the element universe.
    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    /// Returns `true` if `element` is queued.
    ///
    /// # Panics
    /// Panics if `element` is outside the universe.
    pub fn contains(&self, element: usize) -> bool {
        self.position[element] != ABSENT
    }

    /// Returns the current priority of `element`, or `None` if it is not queued.
    pub fn priority(&self, element: usize) -> Option<P> {
        match self.position[element] {
            ABSENT => None,
            slot => Some(self.heap[slot].1),
        }
    }

    /// Adds `element` with `priority`.
    ///
    /// Returns `false` and leaves the queue untouched if the element is
    /// already present.
    pub fn insert(&mut self, element: usize, priority: P) -> bool {
        if self.contains(element) {
            return false;
        }
        let slot = self.heap.len();
        self.heap.push((element, priority));
        self.position[element] = slot;
        self.sift_up(slot);
        true
    }

    /// Adds every `(element, priority)` pair whose element is not yet queued.
    ///
    /// When the batch is at least as large as the current heap the new
    /// entries are appended and the whole heap is rebuilt bottom-up;
    /// otherwise they are inserted one at a time. A pair whose element is
    /// already present (including earlier in the same batch) is skipped.
    pub fn insert_all<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (usize, P)>,
    {
        let pairs: Vec<(usize, P)> = pairs.into_iter().collect();
        if pairs.len() >= self.heap.len() {
            for (element, priority) in pairs {
                if !self.contains(element) {
                    self.position[element] = self.heap.len();
                    self.heap.push((element, priority));
                }
            }
            self.heapify();
        } else {
            for (element, priority) in pairs {
                self.insert(element, priority);
            }
        }
    }

    /// Returns the element with minimum priority without removing it.
    pub fn peek_min(&self) -> Option<usize> {
        self.heap.first().map(|&(element, _)| element)
    }

    /// Removes and returns the element with minimum priority.
    pub fn extract_min(&mut self) -> Option<usize> {
        let last = self.heap.pop()?;
        let min = if self.heap.is_empty() {
            last
        } else {
            let min = core::mem::replace(&mut self.heap[0], last);
            self.position[last.0] = 0;
            self.sift_down(0);
            min
        };
        self.position[min.0] = ABSENT;
        Some(min.0)
    }

    /// Changes the priority of a queued element.
    ///
    /// Returns `false` if the element is not queued. A lower priority sifts the
    /// entry up, a higher one sifts it down, an equal one does nothing.
    pub fn change_priority(&mut self, element: usize, priority: P) -> bool {
        let slot = self.position[element];
        if slot == ABSENT {
            return false;
        }
        let current = self.heap[slot].1;
        if priority < current {
            self.heap[slot].1 = priority;
            self.sift_up(slot);
        } else if priority > current {
            self.heap[slot].1 = priority;
            self.sift_down(slot);
        }
        true
    }

    /// Checks the heap order and the consistency of the position index.
    ///
    /// Returns `true` if every parent is no greater than its children and
    /// every queued element's recorded slot holds that element.
    pub fn validate_invariants(&self) -> bool {
        for child in 1..self.heap.len() {
            let parent = (child - 1) / 2;
            if self.heap[child].1 < self.heap[parent].1 {
                return false;
            }
        }
        let queued = self.position.iter().filter(|&&slot| slot != ABSENT).count();
        queued == self.heap.len()
            && self
                .heap
                .iter()
                .enumerate()
                .all(|(slot, &(element, _))| self.position[element] == slot)
    }

    /// Rebuilds heap order over the whole sequence, then refreshes the index.
    fn heapify(&mut self) {
        let len = self.heap.len();
        for slot in (0..len / 2).rev() {
            self.sift_down_unindexed(slot);
        }
        for (slot, &(element, _)) in self.heap.iter().enumerate() {
            self.position[element] = slot;
        }
    }

    fn sift_up(&mut self, mut node: usize) {
        let current = self.heap[node];
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.heap[parent].1 > current.1 {
                self.heap[node] = self.heap[parent];
                self.position[self.heap[node].0] = node;
                node = parent;
            } else {
                break;
            }
        }
        self.heap[node] = current;
        self.position[current.0] = node;
    }

    fn sift_down(&mut self, node: usize) {
        let slot = self.sift_down_unindexed(node);
        self.position[self.heap[slot].0] = slot;
    }

    /// Moves the entry at `node` down to its place, fixing the index of every
    /// entry it passes but not its own. Returns the final slot.
    fn sift_down_unindexed(&mut self, mut node: usize) -> usize {
        let len = self.heap.len();
        let current = self.heap[node];
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.heap[right].1 < self.heap[left].1 {
                smaller = right;
            }

            if self.heap[smaller].1 < current.1 {
                self.heap[node] = self.heap[smaller];
                self.position[self.heap[node].0] = node;
                node = smaller;
            } else {
                break;
            }
        }
        self.heap[node] = current;
        node
    }
}

impl<P: fmt::Debug> fmt::Debug for IndexedPriorityQueue<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedPriorityQueue")
            .field("len", &self.heap.len())
            .field("capacity", &self.position.len())
            .finish()
    }
}
