use std::cmp::Ordering;

use crate::distance::{Point, distance};

/// 一个候选地点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// 地点 ID
    pub id: i64,
    /// 纬度
    pub latitude: f64,
    /// 经度
    pub longitude: f64,
}

impl Record {
    pub fn new(id: i64, latitude: f64, longitude: f64) -> Self {
        Self { id, latitude, longitude }
    }

    pub fn point(&self) -> Point {
        Point::new(self.latitude, self.longitude)
    }

    /// 计算到 `home` 的距离
    pub fn score(self, home: Point) -> ScoredRecord {
        ScoredRecord { distance: distance(self.point(), home), record: self }
    }
}

/// 带有到家距离的地点
///
/// 按 `(distance, id)` 全序比较，距离相同时 ID 较大者视为更远。
#[derive(Debug, Clone, Copy)]
pub struct ScoredRecord {
    pub record: Record,
    /// 到家的距离，单位为公里
    pub distance: f64,
}

impl Ord for ScoredRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.record.id.cmp(&other.record.id))
    }
}

impl PartialOrd for ScoredRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScoredRecord {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredRecord {}
