// Nodes 0 and 1 are permanent sentinels so every occupied node always has two real neighbours
const HEAD_INDEX: usize = 0;
const TAIL_INDEX: usize = 1;
const TOTAL_SENTINELS: usize = 2;

#[derive(Clone,Debug)]
struct LruListNode<T> {
    data: Option<T>,
    next_index: usize,
    prev_index: usize,
}

impl<T> LruListNode<T> {
    fn sentinel(prev_index: usize, next_index: usize) -> Self {
        Self {
            data: None,
            next_index,
            prev_index,
        }
    }
}

/// Recency ordered list stored in an index addressed arena.
///
/// Handles returned by [`LruList::push`] stay valid until the node is removed,
/// after which the slot is recycled by a later push. The head of the list is
/// the most recently used node and the tail is the least recently used.
#[derive(Clone,Debug)]
pub struct LruList<T> {
    nodes: Vec<LruListNode<T>>,
    free_indices: Vec<usize>,
    total_used: usize,
}

impl<T> Default for LruList<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<T> LruList<T> {
    pub fn with_capacity(initial_capacity: usize) -> Self {
        let mut nodes = Vec::<LruListNode<T>>::with_capacity(initial_capacity + TOTAL_SENTINELS);
        nodes.push(LruListNode::sentinel(HEAD_INDEX, TAIL_INDEX));
        nodes.push(LruListNode::sentinel(HEAD_INDEX, TAIL_INDEX));
        Self {
            nodes,
            free_indices: Vec::new(),
            total_used: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.total_used
    }

    pub fn is_empty(&self) -> bool {
        self.total_used == 0
    }

    fn is_occupied(&self, index: usize) -> bool {
        index >= TOTAL_SENTINELS
            && index < self.nodes.len()
            && self.nodes[index].data.is_some()
    }

    // splice node out and join its neighbours to each other
    fn unlink(&mut self, index: usize) {
        let prev_index = self.nodes[index].prev_index;
        let next_index = self.nodes[index].next_index;
        self.nodes[prev_index].next_index = next_index;
        self.nodes[next_index].prev_index = prev_index;
    }

    fn link_after_head(&mut self, index: usize) {
        let old_head_index = self.nodes[HEAD_INDEX].next_index;
        self.nodes[index].prev_index = HEAD_INDEX;
        self.nodes[index].next_index = old_head_index;
        self.nodes[old_head_index].prev_index = index;
        self.nodes[HEAD_INDEX].next_index = index;
    }

    /// Inserts `data` as the most recently used node and returns its handle.
    pub fn push(&mut self, data: T) -> usize {
        let index = match self.free_indices.pop() {
            Some(index) => {
                self.nodes[index].data = Some(data);
                index
            },
            None => {
                let index = self.nodes.len();
                self.nodes.push(LruListNode {
                    data: Some(data),
                    next_index: index,
                    prev_index: index,
                });
                index
            },
        };
        self.link_after_head(index);
        self.total_used += 1;
        index
    }

    /// Moves the node to the head. Returns false if it was already there.
    pub fn promote(&mut self, index: usize) -> bool {
        assert!(self.is_occupied(index), "promote called on vacant lru node {}", index);
        if self.nodes[HEAD_INDEX].next_index == index {
            return false;
        }
        self.unlink(index);
        self.link_after_head(index);
        true
    }

    /// Detaches the node and releases its slot for reuse.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if !self.is_occupied(index) {
            return None;
        }
        self.unlink(index);
        let node = &mut self.nodes[index];
        node.prev_index = index;
        node.next_index = index;
        let data = node.data.take();
        self.free_indices.push(index);
        self.total_used -= 1;
        data
    }

    pub fn get_oldest(&self) -> Option<usize> {
        let index = self.nodes[TAIL_INDEX].prev_index;
        if index == HEAD_INDEX {
            return None;
        }
        Some(index)
    }

    #[cfg(test)]
    pub(crate) fn get_newest(&self) -> Option<usize> {
        let index = self.nodes[HEAD_INDEX].next_index;
        if index == TAIL_INDEX {
            return None;
        }
        Some(index)
    }

    pub fn pop_oldest(&mut self) -> Option<T> {
        let index = self.get_oldest()?;
        self.remove(index)
    }

    pub fn get_data(&self, index: usize) -> Option<&'_ T> {
        self.nodes.get(index).and_then(|node| node.data.as_ref())
    }

    pub fn get_mut_data(&mut self, index: usize) -> Option<&'_ mut T> {
        self.nodes.get_mut(index).and_then(|node| node.data.as_mut())
    }

    pub fn clear(&mut self) {
        self.nodes.truncate(TOTAL_SENTINELS);
        self.nodes[HEAD_INDEX] = LruListNode::sentinel(HEAD_INDEX, TAIL_INDEX);
        self.nodes[TAIL_INDEX] = LruListNode::sentinel(HEAD_INDEX, TAIL_INDEX);
        self.free_indices.clear();
        self.total_used = 0;
    }

    /// Walks from most recently used to least recently used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            index: self.nodes[HEAD_INDEX].next_index,
            remaining: self.total_used,
        }
    }

    #[cfg(test)]
    pub(crate) fn check_links(&self) {
        let mut forward = Vec::with_capacity(self.total_used);
        let mut index = self.nodes[HEAD_INDEX].next_index;
        while index != TAIL_INDEX {
            assert!(self.is_occupied(index), "forward walk reached vacant node {}", index);
            assert!(forward.len() < self.total_used, "forward walk is longer than list");
            forward.push(index);
            index = self.nodes[index].next_index;
        }
        let mut backward = Vec::with_capacity(self.total_used);
        let mut index = self.nodes[TAIL_INDEX].prev_index;
        while index != HEAD_INDEX {
            assert!(backward.len() < self.total_used, "backward walk is longer than list");
            backward.push(index);
            index = self.nodes[index].prev_index;
        }
        backward.reverse();
        assert_eq!(forward.len(), self.total_used);
        assert_eq!(forward, backward);
        let total_vacant = self.nodes.len() - TOTAL_SENTINELS - self.total_used;
        assert_eq!(self.free_indices.len(), total_vacant);
    }
}

pub struct Iter<'a, T> {
    list: &'a LruList<T>,
    index: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index == TAIL_INDEX {
            return None;
        }
        let node = &self.list.nodes[self.index];
        self.index = node.next_index;
        self.remaining = self.remaining.saturating_sub(1);
        node.data.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a LruList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
