//! Per-band sorting with a size-selected algorithm.

/// Bands up to this length use insertion sort.
pub const INSERTION_SORT_MAX: usize = 16;
/// Bands up to this length (and above `INSERTION_SORT_MAX`) use partition sort.
pub const PARTITION_SORT_MAX: usize = 150;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Insertion,
    Partition,
    Heap,
}

impl Algorithm {
    /// Sorts `band` with this algorithm regardless of its length.
    pub fn sort(self, mut band: Vec<u64>) -> Vec<u64> {
        match self {
            Algorithm::Insertion => {
                insertion_sort(&mut band);
                band
            }
            Algorithm::Partition => partition_sort(band),
            Algorithm::Heap => heap_sort(band),
        }
    }
}

pub fn select_algorithm(band_len: usize) -> Algorithm {
    if band_len <= INSERTION_SORT_MAX {
        Algorithm::Insertion
    } else if band_len <= PARTITION_SORT_MAX {
        Algorithm::Partition
    } else {
        Algorithm::Heap
    }
}

/// Sorts one band ascending. Consumes the band's buffer.
pub fn sort_band(band: Vec<u64>) -> Vec<u64> {
    let algorithm = select_algorithm(band.len());
    log::trace!("sorting band of {} with {:?}", band.len(), algorithm);
    algorithm.sort(band)
}

pub fn insertion_sort(data: &mut [u64]) {
    for i in 1..data.len() {
        let word = data[i];
        // Shift larger predecessors right until the insertion point.
        let mut j = i;
        while j > 0 && data[j - 1] > word {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = word;
    }
}

/// Three-way partition around the middle element, by value.
///
/// Allocates fresh `less`/`equal`/`greater` vectors at every level; this is
/// fine for the mid-sized bands it is selected for.
pub fn partition_sort(data: Vec<u64>) -> Vec<u64> {
    if data.len() <= 1 {
        return data;
    }
    let pivot = data[data.len() / 2];
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for word in data {
        match word.cmp(&pivot) {
            std::cmp::Ordering::Less => less.push(word),
            std::cmp::Ordering::Equal => equal.push(word),
            std::cmp::Ordering::Greater => greater.push(word),
        }
    }
    let mut sorted = partition_sort(less);
    sorted.append(&mut equal);
    sorted.append(&mut partition_sort(greater));
    sorted
}

/// Builds a binary min-heap in place, then pops the minimum until empty.
pub fn heap_sort(mut heap: Vec<u64>) -> Vec<u64> {
    let len = heap.len();
    for i in (0..len / 2).rev() {
        sift_down(&mut heap, i);
    }
    let mut sorted = Vec::with_capacity(len);
    while !heap.is_empty() {
        let last = heap.len() - 1;
        heap.swap(0, last);
        // `pop` cannot fail: the heap is non-empty.
        if let Some(min) = heap.pop() {
            sorted.push(min);
        }
        sift_down(&mut heap, 0);
    }
    sorted
}

fn sift_down(heap: &mut [u64], mut node: usize) {
    loop {
        let left_child = 2 * node + 1;
        let right_child = left_child + 1;
        let mut smallest = node;
        if left_child < heap.len() && heap[left_child] < heap[smallest] {
            smallest = left_child;
        }
        if right_child < heap.len() && heap[right_child] < heap[smallest] {
            smallest = right_child;
        }
        if smallest == node {
            return;
        }
        heap.swap(node, smallest);
        node = smallest;
    }
}
