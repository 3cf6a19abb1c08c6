use indicatif::ProgressStyle;

/// 读取进度条样式
pub fn pb_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] 已读取 {pos} 条记录 ({per_sec})")
        .expect("invalid progress template")
}

/// 解析单字节的字段分隔符，支持 `\t` 表示制表符
pub fn parse_delimiter(s: &str) -> Result<u8, String> {
    let s = if s == "\\t" { "\t" } else { s };
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("分隔符必须是单个 ASCII 字符: {s:?}")),
    }
}
