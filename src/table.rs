//! 数值数据表
//!
//! 每个测量块的采样数据保存为行优先的二维 `f64` 表。
//! 第 0-2 列是空间位置 (x, y, z)，第 3 列是剂量，其余列按原顺序保留。

use std::ops::Range;

use crate::error::{ParseError, Result};

/// 剂量所在列
pub const DOSE_COLUMN: usize = 3;

/// 位置所在列（x, y, z）
pub const POSITION_COLUMNS: Range<usize> = 0..3;

/// 行优先的二维数值表
///
/// 列数由第一行决定，之后所有行必须等宽。
/// 反序列化时同样校验 `values` 的长度是列数的整数倍。
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDataTable"))]
pub struct DataTable {
    n_cols: usize,
    values: Vec<f64>,
}

impl DataTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从行集合构建表
    ///
    /// 任一行与首行宽度不一致时返回 [`ParseError::RaggedDataRow`]。
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let mut table = Self::new();
        for row in rows {
            table.push_row(row.as_ref())?;
        }
        Ok(table)
    }

    /// 追加一行
    ///
    /// 空表以第一行的宽度为表宽。空行或宽度不一致的行不会被追加，
    /// 返回 [`ParseError::RaggedDataRow`]，表保持不变。
    pub fn push_row(&mut self, row: &[f64]) -> Result<()> {
        let width_ok = if self.values.is_empty() {
            !row.is_empty()
        } else {
            row.len() == self.n_cols
        };
        if !width_ok {
            return Err(ParseError::RaggedDataRow {
                expected: self.n_cols,
                found: row.len(),
            });
        }

        if self.values.is_empty() {
            self.n_cols = row.len();
        }
        self.values.extend_from_slice(row);
        Ok(())
    }

    pub fn n_rows(&self) -> usize {
        if self.n_cols == 0 {
            0
        } else {
            self.values.len() / self.n_cols
        }
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// (行数, 列数)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.n_rows() {
            return None;
        }
        let start = index * self.n_cols;
        Some(&self.values[start..start + self.n_cols])
    }

    /// 按文件顺序遍历所有行
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact 不接受 0，空表时用 1 得到空迭代
        self.values.chunks_exact(self.n_cols.max(1))
    }

    /// 所有数值（行优先）
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// 取出单列
    pub fn column(&self, index: usize) -> Result<Vec<f64>> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        if index >= self.n_cols {
            return Err(ParseError::MissingColumn {
                column: index,
                n_cols: self.n_cols,
            });
        }
        Ok(self.rows().map(|row| row[index]).collect())
    }

    /// 取出连续的若干列，组成新表
    pub fn select_columns(&self, columns: Range<usize>) -> Result<DataTable> {
        if self.is_empty() || columns.is_empty() {
            return Ok(DataTable::new());
        }
        if columns.end > self.n_cols {
            return Err(ParseError::MissingColumn {
                column: columns.end - 1,
                n_cols: self.n_cols,
            });
        }
        let mut selected = DataTable::new();
        for row in self.rows() {
            selected.push_row(&row[columns.clone()])?;
        }
        Ok(selected)
    }

    /// 剂量列（第 3 列）
    pub fn dose(&self) -> Result<Vec<f64>> {
        self.column(DOSE_COLUMN)
    }

    /// 位置列（第 0-2 列）
    pub fn positions(&self) -> Result<DataTable> {
        self.select_columns(POSITION_COLUMNS)
    }
}

/// 反序列化的中间形式，经校验后转换为 [`DataTable`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDataTable {
    n_cols: usize,
    values: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDataTable> for DataTable {
    type Error = String;

    fn try_from(raw: RawDataTable) -> std::result::Result<Self, Self::Error> {
        let consistent = if raw.n_cols == 0 {
            raw.values.is_empty()
        } else {
            raw.values.len() % raw.n_cols == 0
        };
        if !consistent {
            return Err(format!(
                "{} values do not fill rows of {} columns",
                raw.values.len(),
                raw.n_cols
            ));
        }
        Ok(DataTable {
            n_cols: raw.n_cols,
            values: raw.values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataTable {
        DataTable::from_rows([
            [-10.0, 0.0, 100.0, 50.0, 1.0],
            [0.0, 0.0, 100.0, 100.0, 1.0],
            [10.0, 0.0, 100.0, 49.5, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_shape_and_rows() {
        let table = sample();
        assert_eq!(table.shape(), (3, 5));
        assert_eq!(table.row(1), Some(&[0.0, 0.0, 100.0, 100.0, 1.0][..]));
        assert_eq!(table.row(3), None);
        assert_eq!(table.rows().count(), 3);
    }

    #[test]
    fn test_push_row_rejects_width_mismatch() {
        let mut table = DataTable::new();
        table.push_row(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(
            table.push_row(&[1.0, 2.0]),
            Err(ParseError::RaggedDataRow { expected: 4, found: 2 })
        );
        assert_eq!(
            table.push_row(&[]),
            Err(ParseError::RaggedDataRow { expected: 4, found: 0 })
        );
        assert_eq!(table.shape(), (1, 4));
    }

    #[test]
    fn test_from_rows_narrow_first_row_is_error() {
        let rows: [&[f64]; 2] = [&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0]];
        assert_eq!(
            DataTable::from_rows(rows),
            Err(ParseError::RaggedDataRow { expected: 3, found: 4 })
        );
    }

    #[test]
    fn test_empty_table() {
        let table = DataTable::new();
        assert!(table.is_empty());
        assert_eq!(table.shape(), (0, 0));
        assert_eq!(table.rows().count(), 0);
        assert_eq!(table.dose().unwrap(), Vec::<f64>::new());
        assert!(table.positions().unwrap().is_empty());
    }

    #[test]
    fn test_dose_and_positions() {
        let table = sample();
        assert_eq!(table.dose().unwrap(), vec![50.0, 100.0, 49.5]);

        let pos = table.positions().unwrap();
        assert_eq!(pos.shape(), (3, 3));
        assert_eq!(pos.row(2), Some(&[10.0, 0.0, 100.0][..]));
    }

    #[test]
    fn test_narrow_table_reports_missing_column() {
        let table = DataTable::from_rows([[1.0, 2.0]]).unwrap();
        assert_eq!(
            table.dose(),
            Err(ParseError::MissingColumn { column: 3, n_cols: 2 })
        );
        assert_eq!(
            table.positions(),
            Err(ParseError::MissingColumn { column: 2, n_cols: 2 })
        );
    }
}
