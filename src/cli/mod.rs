mod db;
mod file;

pub use db::*;
pub use file::*;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use log::info;

use crate::config::Opts;
use crate::report;
use crate::selector::Selector;
use crate::source::Source;
use crate::utils::pb_style;

pub trait SubCommandExtend {
    fn run(&self, opts: &Opts) -> impl std::future::Future<Output = anyhow::Result<()>> + Send;
}

/// 读取数据源，输出距离家最近的记录
async fn execute(opts: &Opts, source: Source) -> Result<()> {
    let home = opts.home.home();
    let mut selector = Selector::new(opts.home.top);

    let pb = ProgressBar::no_length().with_style(pb_style());
    let stats = source.ingest(home, &mut selector, &pb).await.context("读取数据源失败")?;
    pb.finish_and_clear();

    info!("读取完成：接受 {} 条，跳过 {} 条", stats.accepted, stats.skipped);

    let result = report::rank(selector.drain_ascending());
    report::render(&result, opts.output_format, std::io::stdout().lock())
}
