//! # myQA Accept Parser
//!
//! IBA myQA Accept ASCII（`.asc`）剂量测量文件解析器，将文件切分为测量块，
//! 每个测量块得到一份元数据和一张数值表。
//!
//! ## 功能特性
//!
//! - **前缀分类状态机**: 按行前缀（`# Measurement number` / `%` / `:` `#` / `=`）组装记录
//! - **类型化元数据**: 字符串、空值、整数与数值向量严格区分
//! - **宽松的数据行**: 无法解析的数值行静默丢弃，元数据向量字段则严格校验
//! - **并行批量解析**: 多文件通过 rayon 并行解析
//!
//! ## 快速开始
//!
//! ```rust
//! use myqa_accept_parser::parse_str;
//!
//! let content = concat!(
//!     ":MSR \t1\t # No. of measurement in file\n",
//!     "# Measurement number \t1\n",
//!     "%FSZ\t100\t100\n",
//!     "%STS \t-60.0\t0.0\t100.0 # Start Scan values in mm ( X , Y , Z )\n",
//!     "%EDS \t60.0\t0.0\t100.0 # End Scan values in mm ( X , Y , Z )\n",
//!     "= \t-60.0\t0.0\t100.0\t11.2\n",
//!     "= \t0.0\t0.0\t100.0\t100.0\n",
//!     "= \t60.0\t0.0\t100.0\t10.9\n",
//!     ":EOM  # End of Measurement\n",
//! );
//!
//! let result = parse_str(content).unwrap();
//! let metadata = &result.metadata_list[0];
//!
//! assert_eq!(metadata.measurement_number(), Some(1));
//! assert_eq!(metadata.vector("FSZ"), Some(&[100.0, 100.0][..]));
//! assert_eq!(metadata.vector("EDS"), Some(&[60.0, 0.0, 100.0][..]));
//! assert_eq!(result.data_list[0].shape(), (3, 4));
//! ```
//!
//! ### 从文件读取
//!
//! ```rust,no_run
//! use myqa_accept_parser::AcceptFile;
//!
//! let accept = AcceptFile::open("profiles.asc").unwrap();
//! let dose = accept.dose_data().unwrap();
//! let positions = accept.position_data().unwrap();
//! println!("{} 个测量, 第一个有 {} 个点", accept.len(), dose[0].len());
//! # let _ = positions;
//! ```
//!
//! ## 文件格式
//!
//! ```text
//! # Measurement number \t1          <- 测量边界
//! %SSD \t1000                       <- 元数据 (键\t值)
//! %STS \t-60.0\t0.0\t100.0 # ...    <- 向量字段，# 之后为行内注释
//! = \t-60.0\t0.0\t100.0\t11.2       <- 数据行: x y z dose
//! :EOM  # End of Measurement        <- 注释，忽略
//! ```

pub mod accept;
pub mod error;
pub mod measurement;
pub mod parser;
pub mod parser_config;
pub mod table;
pub mod tools;

pub use accept::AcceptFile;
pub use error::{ParseError, Result};
pub use measurement::{MeasurementRecord, Metadata, MetadataValue};
pub use parser::{
    ParseResult,
    RecordBuilder,
    parse_file,
    parse_file_with_config,
    parse_files,
    parse_lines,
    parse_lines_with_config,
    parse_reader,
    parse_reader_with_config,
    parse_str,
    parse_str_with_config,
};
pub use parser_config::{ParserConfig, VectorFieldDef};
pub use table::DataTable;
