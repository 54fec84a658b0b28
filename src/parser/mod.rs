//! Parser 模块 - 解析 IBA myQA Accept ASCII 测量文件
//!
//! 此模块提供了完整的解析功能,包括:
//! - 行分类与测量记录组装（状态机）
//! - 元数据向量字段后处理
//! - 便捷 API 函数

mod api;
pub mod constants;
pub(crate) mod parse_functions;
pub mod record;
pub mod record_builder;

pub use api::{
    parse_file, parse_file_with_config, parse_files, parse_lines, parse_lines_with_config,
    parse_reader, parse_reader_with_config, parse_str, parse_str_with_config,
};
pub use parse_functions::{
    decode_vector_fields, parse_data_fields, parse_measurement_number, parse_metadata_entry,
};
pub use record::ParseResult;
pub use record_builder::RecordBuilder;
