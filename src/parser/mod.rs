//! Parser Module
//!
//! calamineを使用したスプレッドシート読み込みの実装。
//! ファイル全体をメモリに読み込んでから解析します。

mod workbook;

pub(crate) use workbook::{SheetData, WorkbookParser};
