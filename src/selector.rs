use std::collections::BinaryHeap;

use crate::record::ScoredRecord;

/// 预分配的上限，避免 `--top` 过大时一次性申请大量内存
const PREALLOC_LIMIT: usize = 4096;

/// 保留距离最近的 `capacity` 条记录
///
/// 内部是一个大小受限的大顶堆，堆顶为当前保留的最远记录，即下一个淘汰对象。
/// 每次 [`offer`](Self::offer) 的开销为 O(log capacity)，内存占用与输入总量无关。
#[derive(Debug, Clone)]
pub struct Selector {
    heap: BinaryHeap<ScoredRecord>,
    capacity: usize,
}

impl Selector {
    pub fn new(capacity: usize) -> Self {
        Self { heap: BinaryHeap::with_capacity(capacity.min(PREALLOC_LIMIT) + 1), capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 当前保留的记录数量，不会超过 `capacity`
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// 当前保留的最远记录
    pub fn peek_worst(&self) -> Option<&ScoredRecord> {
        self.heap.peek()
    }

    /// 插入一条记录，超出容量时淘汰最远的一条
    pub fn offer(&mut self, scored: ScoredRecord) {
        if self.capacity == 0 {
            return;
        }
        self.heap.push(scored);
        if self.heap.len() > self.capacity {
            self.heap.pop();
        }
    }

    /// 按距离从近到远返回所有保留的记录
    pub fn drain_ascending(self) -> Vec<ScoredRecord> {
        self.heap.into_sorted_vec()
    }
}

impl Extend<ScoredRecord> for Selector {
    fn extend<T: IntoIterator<Item = ScoredRecord>>(&mut self, iter: T) {
        for scored in iter {
            self.offer(scored);
        }
    }
}

/// 合并多个分片的选择结果
///
/// 每个分片各自保留最近的 `capacity` 条，对它们的并集再取一次最近的 `capacity` 条，
/// 结果与在完整输入上运行单个选择器相同。
pub fn merge(shards: impl IntoIterator<Item = Selector>, capacity: usize) -> Selector {
    let mut merged = Selector::new(capacity);
    for shard in shards {
        merged.extend(shard.drain_ascending());
    }
    merged
}
