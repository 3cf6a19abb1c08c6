use futures::TryStreamExt;
use indicatif::ProgressBar;
use log::info;
use sqlx::Row;
use sqlx::any::AnyRow;

use super::{IngestStats, check_coordinates, reject};
use crate::db;
use crate::distance::Point;
use crate::error::{MalformedReason, MalformedRecord, Position, SourceError};
use crate::record::Record;
use crate::selector::Selector;

/// 数据库表数据源，读取 `id`、`lat`、`lng` 三列
#[derive(Debug, Clone)]
pub struct TableSource {
    /// 数据库连接字符串
    pub url: String,
    pub table: String,
    /// 遇到无法解码的记录时是否中止
    pub strict: bool,
}

impl TableSource {
    pub fn new(url: impl Into<String>, table: impl Into<String>) -> Self {
        Self { url: url.into(), table: table.into(), strict: false }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub async fn ingest(
        &self,
        home: Point,
        selector: &mut Selector,
        pb: &ProgressBar,
    ) -> Result<IngestStats, SourceError> {
        if !db::is_valid_table_name(&self.table) {
            return Err(SourceError::InvalidTable(self.table.clone()));
        }

        let pool = db::connect(&self.url).await?;
        let sql = db::select_locations(&self.table);
        info!("读取数据表: {}", self.table);

        let mut stats = IngestStats::default();
        let mut row_no = 0;
        let mut rows = sqlx::query(&sql).fetch(&pool);
        while let Some(row) = rows.try_next().await? {
            row_no += 1;
            pb.inc(1);
            match decode_row(&row) {
                Ok(record) => {
                    selector.offer(record.score(home));
                    stats.accepted += 1;
                }
                Err(reason) => {
                    let malformed =
                        MalformedRecord { position: Position::Row(row_no), reason, raw: None };
                    reject(self.strict, malformed, &mut stats)?;
                }
            }
        }
        drop(rows);

        pool.close().await;
        Ok(stats)
    }
}

fn decode_row(row: &AnyRow) -> Result<Record, MalformedReason> {
    let id = row.try_get::<i64, _>("id").map_err(|e| MalformedReason::InvalidId(e.to_string()))?;
    let latitude = decode_coordinate(row, "lat").map_err(MalformedReason::InvalidLatitude)?;
    let longitude = decode_coordinate(row, "lng").map_err(MalformedReason::InvalidLongitude)?;
    check_coordinates(Record { id, latitude, longitude })
}

/// 解码坐标列，整数值会被转换为浮点数
fn decode_coordinate(row: &AnyRow, column: &str) -> Result<f64, String> {
    match row.try_get::<f64, _>(column) {
        Ok(v) => Ok(v),
        Err(e) => row.try_get::<i64, _>(column).map(|v| v as f64).map_err(|_| e.to_string()),
    }
}
