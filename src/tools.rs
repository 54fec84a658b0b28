use std::path::Path;

use crate::parser::constants::ASCII_EXTENSION;
use crate::parser_config::ParserConfig;

/// 行类别
///
/// 各类别之间只靠前缀区分，因此分类顺序很重要：
/// 边界行以 `#` 开头，必须先于注释行判断。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `# Measurement number\t<n>`
    Boundary,
    /// `%KEY[\tVALUE]`
    Metadata,
    /// `:` 或 `#` 开头的注释/分隔行
    Comment,
    /// `=\t...` 数值行
    Data,
    /// 其他行（包括空行），不产生任何效果
    Other,
}

///
/// 判断一行（已去除首尾空白）属于哪个类别。
///
/// 判断顺序
/// 1. 以边界标记 `# Measurement number` 开头 -> Boundary
/// 2. 以 `%` 开头 -> Metadata
/// 3. 以 `:` 或 `#` 开头 -> Comment
/// 4. 以 `=` 开头 -> Data
/// 5. 其余 -> Other
#[inline]
pub fn classify_line(line: &str, config: &ParserConfig) -> LineKind {
    if line.starts_with(config.boundary_marker) {
        return LineKind::Boundary;
    }

    let first = match line.chars().next() {
        Some(c) => c,
        None => return LineKind::Other,
    };

    if first == config.metadata_prefix {
        LineKind::Metadata
    } else if config.is_comment_prefix(first) {
        LineKind::Comment
    } else if first == config.data_prefix {
        LineKind::Data
    } else {
        LineKind::Other
    }
}

/// 路径扩展名是否为 `.asc`（区分大小写）
///
/// 以点开头且没有其他点的文件名（如 `.asc`）视为没有扩展名。
pub fn has_ascii_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == ASCII_EXTENSION)
}

/// 按行切分文本，`\n`、`\r\n` 与单独的 `\r` 都视为换行
///
/// `\r\n` 之间会产生一个空行，空行属于 [`LineKind::Other`]，不影响结果。
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r'])
}
