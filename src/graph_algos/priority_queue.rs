/// Array-backed binary min-heap
/// https://en.wikipedia.org/wiki/Binary_heap
///
/// Not stable: entries with equal priority come out in no particular order.
#[derive(Debug)]
pub struct PriorityQueue<T, P> {
    heap: Vec<HeapEntry<T, P>>,
}

#[derive(Debug)]
struct HeapEntry<T, P> {
    priority: P,
    payload: T,
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> PriorityQueue<T, P> {

    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Append at the last leaf and sift up
    pub fn insert(&mut self, payload: T, priority: P) {
        self.heap.push(HeapEntry { priority, payload });

        let mut i = self.heap.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[parent].priority < self.heap[i].priority {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    /// Remove the minimum, None when empty
    pub fn pop(&mut self) -> Option<T> {
        self.pop_entry().map(|entry| entry.payload)
    }

    /// Remove the minimum along with its priority
    pub fn pop_with_priority(&mut self) -> Option<(T, P)> {
        self.pop_entry().map(|entry| (entry.payload, entry.priority))
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.first().map(|entry| &entry.payload)
    }

    pub fn peek_priority(&self) -> Option<&P> {
        self.heap.first().map(|entry| &entry.priority)
    }

    fn pop_entry(&mut self) -> Option<HeapEntry<T, P>> {
        if self.heap.is_empty() {
            return None;
        }

        // move root to the back, remove it, then restore the heap from the top
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let entry = self.heap.pop();

        let len = self.heap.len();
        let mut current = 0;
        loop {
            let left = 2 * current + 1;
            let right = left + 1;
            if left >= len {
                break;
            }

            let mut smaller = left;
            if right < len && self.heap[right].priority < self.heap[left].priority {
                smaller = right;
            }
            if self.heap[smaller].priority > self.heap[current].priority {
                break;
            }

            self.heap.swap(current, smaller);
            current = smaller;
        }

        entry
    }
}
