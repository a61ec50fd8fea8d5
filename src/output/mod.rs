//! Output Module
//!
//! 2つのコピー処理を提供するモジュール。
//!
//! - `delimited`: シートの行を区切りテキストのレコードとして書き出す
//! - `workbook`: 区切りテキストのレコードを新しいシートの行として追加する

mod delimited;
mod workbook;

pub(crate) use delimited::{write_sheet, write_sheet_file};
pub(crate) use workbook::{add_sheet, write_records};
