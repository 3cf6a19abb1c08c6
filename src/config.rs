use clap::{Parser, Subcommand};

use crate::cli::*;
use crate::distance::Point;
use crate::report::OutputFormat;

#[derive(Parser, Debug, Clone)]
pub struct HomeOptions {
    /// 家的纬度
    #[arg(long, value_name = "DEGREES", default_value_t = 51.925146, allow_negative_numbers = true)]
    pub lat: f64,
    /// 家的经度
    #[arg(long, value_name = "DEGREES", default_value_t = 4.478617, allow_negative_numbers = true)]
    pub lng: f64,
    /// 保留距离最近的记录数量
    #[arg(short = 'n', long, value_name = "N", default_value_t = 5)]
    pub top: usize,
}

impl HomeOptions {
    pub fn home(&self) -> Point {
        Point::new(self.lat, self.lng)
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "geotopn", version, about = "查找距离家最近的 N 个地点")]
pub struct Opts {
    #[command(subcommand)]
    pub subcmd: SubCommand,
    #[command(flatten)]
    pub home: HomeOptions,
    /// 输出格式
    #[arg(long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Table)]
    pub output_format: OutputFormat,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SubCommand {
    /// 从 CSV 文件读取地点
    File(FileCommand),
    /// 从数据库表读取地点
    Db(DbCommand),
}
