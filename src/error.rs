use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// 数据源错误
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("无法打开文件 {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("读取 CSV 失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("无效的表名: {0}")]
    InvalidTable(String),

    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Malformed(#[from] MalformedRecord),
}

/// 记录在数据源中的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// CSV 文件中的行号，从 1 开始，包括表头
    Line(u64),
    /// 查询结果中的行序号，从 1 开始
    Row(u64),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(n) => write!(f, "第 {n} 行"),
            Self::Row(n) => write!(f, "第 {n} 条记录"),
        }
    }
}

/// 记录格式错误的原因
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedReason {
    #[error("字段数量应为 3，实际为 {0}")]
    FieldCount(usize),
    #[error("无效的 ID `{0}`")]
    InvalidId(String),
    #[error("无效的纬度 `{0}`")]
    InvalidLatitude(String),
    #[error("无效的经度 `{0}`")]
    InvalidLongitude(String),
    #[error("无法解码: {0}")]
    Undecodable(String),
}

/// 一条无法解析的记录
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedRecord {
    pub position: Position,
    pub reason: MalformedReason,
    /// 原始内容，数据库记录没有原始文本
    pub raw: Option<String>,
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}格式错误: {}", self.position, self.reason)?;
        if let Some(raw) = &self.raw {
            write!(f, "，原始内容: {raw:?}")?;
        }
        Ok(())
    }
}

impl std::error::Error for MalformedRecord {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_position() {
        let err = MalformedRecord {
            position: Position::Line(4),
            reason: MalformedReason::FieldCount(4),
            raw: Some("1,2.0,3.0,4".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("第 4 行"));
        assert!(msg.contains("1,2.0,3.0,4"));

        let err = MalformedRecord {
            position: Position::Row(2),
            reason: MalformedReason::Undecodable("lat".to_string()),
            raw: None,
        };
        assert_eq!(err.to_string(), "第 2 条记录格式错误: 无法解码: lat");
    }
}
