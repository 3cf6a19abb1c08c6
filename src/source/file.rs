use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use csv::{ErrorKind, ReaderBuilder, StringRecord, Trim};
use indicatif::ProgressBar;
use log::{debug, info};

use super::{IngestStats, parse_record, reject};
use crate::distance::Point;
use crate::error::{MalformedReason, MalformedRecord, Position, SourceError};
use crate::selector::Selector;

/// CSV 文件数据源
///
/// 每行为 `id,纬度,经度` 三个字段，第一行始终视为表头。
#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
    /// 字段分隔符
    pub delimiter: u8,
    /// 遇到格式错误的行时是否中止
    pub strict: bool,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), delimiter: b',', strict: false }
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn ingest(
        &self,
        home: Point,
        selector: &mut Selector,
        pb: &ProgressBar,
    ) -> Result<IngestStats, SourceError> {
        info!("读取文件: {}", self.path.display());
        let file = File::open(&self.path)
            .map_err(|source| SourceError::Open { path: self.path.clone(), source })?;
        self.ingest_reader(file, home, selector, pb)
    }

    /// 从任意 reader 读取 CSV 内容
    pub fn ingest_reader<R: Read>(
        &self,
        reader: R,
        home: Point,
        selector: &mut Selector,
        pb: &ProgressBar,
    ) -> Result<IngestStats, SourceError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .delimiter(self.delimiter)
            .from_reader(reader);

        if let Ok(header) = reader.headers() {
            debug!("跳过表头: {:?}", header);
        }

        let mut stats = IngestStats::default();
        let mut line = StringRecord::new();
        loop {
            let has_record = match reader.read_record(&mut line) {
                Ok(has_record) => has_record,
                Err(e) if matches!(e.kind(), ErrorKind::Io(_)) => return Err(e.into()),
                Err(e) => {
                    let position = e.position().map_or(0, |p| p.line());
                    let malformed = MalformedRecord {
                        position: Position::Line(position),
                        reason: MalformedReason::Undecodable(e.to_string()),
                        raw: None,
                    };
                    reject(self.strict, malformed, &mut stats)?;
                    continue;
                }
            };
            if !has_record {
                break;
            }
            pb.inc(1);

            let fields: Vec<&str> = line.iter().collect();
            match parse_record(&fields) {
                Ok(record) => {
                    selector.offer(record.score(home));
                    stats.accepted += 1;
                }
                Err(reason) => {
                    let position = line.position().map_or(0, |p| p.line());
                    let raw = fields.join(char::from(self.delimiter).to_string().as_str());
                    let malformed = MalformedRecord {
                        position: Position::Line(position),
                        reason,
                        raw: Some(raw),
                    };
                    reject(self.strict, malformed, &mut stats)?;
                }
            }
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
id,lat,lng
1,51.9225,4.47917
2,52.3676,4.9041
3,1.0,2.0,3.0
4,abc,5.4697
5,50.8503,4.3517
";

    fn home() -> Point {
        Point::new(51.925146, 4.478617)
    }

    fn ingest(source: &FileSource, csv: &str, capacity: usize) -> Result<(IngestStats, Vec<i64>), SourceError> {
        let mut selector = Selector::new(capacity);
        let stats = source.ingest_reader(csv.as_bytes(), home(), &mut selector, &ProgressBar::hidden())?;
        let ids = selector.drain_ascending().iter().map(|s| s.record.id).collect();
        Ok((stats, ids))
    }

    #[test]
    fn test_ingest_skips_bad_lines() {
        let source = FileSource::new("sample.csv");
        let (stats, ids) = ingest(&source, SAMPLE_CSV, 5).unwrap();
        assert_eq!(stats, IngestStats { accepted: 3, skipped: 2 });
        assert_eq!(ids, &[1, 2, 5]);
    }

    #[test]
    fn test_ingest_skips_non_finite_coordinates() {
        let csv = "id,lat,lng\n1,51.9225,4.47917\n2,inf,4.0\n3,NaN,4.0\n4,-inf,1\n5,52.3676,4.9041\n";
        let source = FileSource::new("non_finite.csv");
        let (stats, ids) = ingest(&source, csv, 2).unwrap();
        assert_eq!(stats, IngestStats { accepted: 2, skipped: 3 });
        assert_eq!(ids, &[1, 5]);

        let err = ingest(&source.strict(true), csv, 2).unwrap_err();
        match err {
            SourceError::Malformed(m) => {
                assert_eq!(m.position, Position::Line(3));
                assert_eq!(m.reason, MalformedReason::InvalidLatitude("inf".into()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ingest_strict_reports_line() {
        let source = FileSource::new("sample.csv").strict(true);
        let err = ingest(&source, SAMPLE_CSV, 5).unwrap_err();
        match err {
            SourceError::Malformed(m) => {
                assert_eq!(m.position, Position::Line(4));
                assert_eq!(m.reason, MalformedReason::FieldCount(4));
                assert_eq!(m.raw.as_deref(), Some("3,1.0,2.0,3.0"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ingest_header_only() {
        let source = FileSource::new("empty.csv");
        let (stats, ids) = ingest(&source, "id,lat,lng\n", 5).unwrap();
        assert_eq!(stats, IngestStats::default());
        assert!(ids.is_empty());
    }

    #[test]
    fn test_ingest_first_line_is_always_header() {
        // 第一行即使是合法数据也会被跳过
        let source = FileSource::new("noheader.csv");
        let (stats, ids) = ingest(&source, "1,51.9,4.4\n2,52.0,4.5\n", 5).unwrap();
        assert_eq!(stats.accepted, 1);
        assert_eq!(ids, &[2]);
    }

    #[test]
    fn test_ingest_custom_delimiter() {
        let source = FileSource::new("semi.csv").delimiter(b';');
        let (stats, ids) = ingest(&source, "id;lat;lng\n7;51.9;4.4\n8;10.0;10.0\n", 1).unwrap();
        assert_eq!(stats.accepted, 2);
        assert_eq!(ids, &[7]);
    }

    #[test]
    fn test_ingest_missing_file() {
        let source = FileSource::new("/nonexistent/locations.csv");
        let mut selector = Selector::new(5);
        let err = source.ingest(home(), &mut selector, &ProgressBar::hidden()).unwrap_err();
        assert!(matches!(err, SourceError::Open { .. }));
    }
}
