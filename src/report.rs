use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Serialize, Serializer};

use crate::record::ScoredRecord;

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    #[default]
    Table,
}

/// 带排名的结果
#[derive(Debug, Clone, Serialize)]
pub struct RankedRecord {
    /// 排名，从 1 开始
    pub rank: usize,
    /// 距离，单位为公里
    #[serde(serialize_with = "round2")]
    pub distance: f64,
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
}

/// 为按距离升序排列的记录编号
pub fn rank(drained: Vec<ScoredRecord>) -> Vec<RankedRecord> {
    drained
        .into_iter()
        .enumerate()
        .map(|(i, s)| RankedRecord {
            rank: i + 1,
            distance: s.distance,
            id: s.record.id,
            latitude: s.record.latitude,
            longitude: s.record.longitude,
        })
        .collect()
}

pub fn render(result: &[RankedRecord], format: OutputFormat, mut out: impl Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
        }
        OutputFormat::Table => {
            for r in result {
                writeln!(out, "{}\t{:.2}\t{}\t{}\t{}", r.rank, r.distance, r.id, r.latitude, r.longitude)?;
            }
        }
    }
    Ok(())
}

fn round2<S: Serializer>(v: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((v * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn sample() -> Vec<RankedRecord> {
        rank(vec![
            ScoredRecord { record: Record::new(4, 51.9225, 4.47917), distance: 0.4321 },
            ScoredRecord { record: Record::new(2, 52.3676, 4.9041), distance: 57.0 },
        ])
    }

    #[test]
    fn test_rank_is_one_based() {
        let ranked = sample();
        assert_eq!(ranked.iter().map(|r| r.rank).collect::<Vec<_>>(), &[1, 2]);
        assert_eq!(ranked[0].id, 4);
    }

    #[test]
    fn test_render_table() {
        let mut out = vec![];
        render(&sample(), OutputFormat::Table, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, "1\t0.43\t4\t51.9225\t4.47917\n2\t57.00\t2\t52.3676\t4.9041\n");
    }

    #[test]
    fn test_render_json() {
        let mut out = vec![];
        render(&sample(), OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["rank"], 1);
        assert_eq!(value[0]["distance"], 0.43);
        assert_eq!(value[1]["id"], 2);
        assert_eq!(value[1]["longitude"], 4.9041);
    }

    #[test]
    fn test_render_empty() {
        let mut out = vec![];
        render(&[], OutputFormat::Table, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
