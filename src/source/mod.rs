mod file;
mod table;

pub use file::*;
pub use table::*;

use indicatif::ProgressBar;
use log::warn;

use crate::distance::Point;
use crate::error::{MalformedReason, MalformedRecord, SourceError};
use crate::record::Record;
use crate::selector::Selector;

/// 一次读取的统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// 送入选择器的记录数
    pub accepted: u64,
    /// 因格式错误被跳过的记录数
    pub skipped: u64,
}

/// 地点数据源
#[derive(Debug, Clone)]
pub enum Source {
    File(FileSource),
    Table(TableSource),
}

impl Source {
    /// 依次读取数据源中的每条记录，计算到 `home` 的距离后送入选择器
    pub async fn ingest(
        &self,
        home: Point,
        selector: &mut Selector,
        pb: &ProgressBar,
    ) -> Result<IngestStats, SourceError> {
        match self {
            Self::File(source) => source.ingest(home, selector, pb),
            Self::Table(source) => source.ingest(home, selector, pb).await,
        }
    }
}

/// 将 `(id, 纬度, 经度)` 三个字段解析为记录
pub fn parse_record<S: AsRef<str>>(fields: &[S]) -> Result<Record, MalformedReason> {
    let [id, lat, lng] = fields else {
        return Err(MalformedReason::FieldCount(fields.len()));
    };
    let (id, lat, lng) = (id.as_ref().trim(), lat.as_ref().trim(), lng.as_ref().trim());

    let id = id.parse().map_err(|_| MalformedReason::InvalidId(id.to_string()))?;
    let latitude = lat
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| MalformedReason::InvalidLatitude(lat.to_string()))?;
    let longitude = lng
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| MalformedReason::InvalidLongitude(lng.to_string()))?;

    Ok(Record { id, latitude, longitude })
}

/// 检查坐标是否为有限值，`inf` 和 `NaN` 会破坏距离排序
pub fn check_coordinates(record: Record) -> Result<Record, MalformedReason> {
    if !record.latitude.is_finite() {
        return Err(MalformedReason::InvalidLatitude(record.latitude.to_string()));
    }
    if !record.longitude.is_finite() {
        return Err(MalformedReason::InvalidLongitude(record.longitude.to_string()));
    }
    Ok(record)
}

/// 处理格式错误的记录：严格模式下中止，否则记录日志后跳过
fn reject(
    strict: bool,
    malformed: MalformedRecord,
    stats: &mut IngestStats,
) -> Result<(), SourceError> {
    if strict {
        return Err(malformed.into());
    }
    warn!("跳过{malformed}");
    stats.skipped += 1;
    Ok(())
}
