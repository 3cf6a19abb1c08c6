use std::path::PathBuf;

use clap::Parser;

use crate::cli::{SubCommandExtend, execute};
use crate::config::Opts;
use crate::source::{FileSource, Source};
use crate::utils::parse_delimiter;

#[derive(Parser, Debug, Clone)]
pub struct FileCommand {
    /// CSV 文件路径，第一行为表头
    pub path: PathBuf,
    /// 遇到格式错误的行时中止，默认跳过
    #[arg(long)]
    pub strict: bool,
    /// 字段分隔符
    #[arg(short, long, value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

impl SubCommandExtend for FileCommand {
    async fn run(&self, opts: &Opts) -> anyhow::Result<()> {
        let source = FileSource::new(&self.path).delimiter(self.delimiter).strict(self.strict);
        execute(opts, Source::File(source)).await
    }
}
