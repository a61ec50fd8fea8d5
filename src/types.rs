//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use std::fmt;
use std::path::PathBuf;

/// セル座標（0始まり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CellCoord {
    pub row: u32,
    pub col: u32,
}

impl CellCoord {
    /// 新しい座標を生成
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// A1形式の文字列に変換（例: (0, 0) -> "A1"）
    pub fn to_a1_notation(self) -> String {
        format!("{}{}", Self::col_index_to_letter(self.col), self.row + 1)
    }

    /// 列インデックスを文字列に変換（0 -> "A", 25 -> "Z", 26 -> "AA"）
    fn col_index_to_letter(mut col: u32) -> String {
        let mut result = String::new();
        loop {
            let remainder = col % 26;
            result.insert(0, (b'A' + remainder as u8) as char);
            if col < 26 {
                break;
            }
            col = col / 26 - 1;
        }
        result
    }
}

/// 変換の方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// スプレッドシート → 区切りテキスト
    XlsxToCsv,
    /// 区切りテキスト → スプレッドシート
    CsvToXlsx,
}

impl Direction {
    /// エラーのラベルとして使う名前
    pub fn label(self) -> &'static str {
        match self {
            Direction::XlsxToCsv => "xlsx to csv",
            Direction::CsvToXlsx => "csv to xlsx",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 1ファイル分の変換結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// 入力ファイル
    pub input: PathBuf,
    /// 選択された変換の方向
    pub direction: Direction,
    /// 書き出したファイル（書き込み順。上書きされたファイルは重複して現れる）
    pub outputs: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a1_notation() {
        assert_eq!(CellCoord::new(0, 0).to_a1_notation(), "A1");
        assert_eq!(CellCoord::new(4, 1).to_a1_notation(), "B5");
        assert_eq!(CellCoord::new(0, 25).to_a1_notation(), "Z1");
        assert_eq!(CellCoord::new(0, 26).to_a1_notation(), "AA1");
        assert_eq!(CellCoord::new(9, 701).to_a1_notation(), "ZZ10");
        assert_eq!(CellCoord::new(0, 16_383).to_a1_notation(), "XFD1");
    }

    #[test]
    fn test_direction_label() {
        assert_eq!(Direction::XlsxToCsv.to_string(), "xlsx to csv");
        assert_eq!(Direction::CsvToXlsx.label(), "csv to xlsx");
    }
}
