//! Workbook Parser Module
//!
//! calamineのラッパーとして、ワークブックレベルの操作を提供する。

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use crate::error::TabconvError;
use crate::security::SecurityConfig;

/// 1シート分のセルデータ
#[derive(Debug, Clone)]
pub(crate) struct SheetData {
    /// シート名
    pub name: String,
    /// セル範囲（calamineは値のある最初のセルを起点とする）
    pub range: Range<Data>,
}

impl SheetData {
    /// 範囲の起点（行, 列）。空のシートは(0, 0)
    pub fn origin(&self) -> (u32, u32) {
        self.range.start().unwrap_or((0, 0))
    }
}

/// ワークブックパーサー
///
/// ZIPベースのスプレッドシート（xlsx、xlsm、odsなど）をcalamineで開きます。
pub(crate) struct WorkbookParser {
    /// calamineのワークブック
    workbook: Sheets<Cursor<Vec<u8>>>,
}

impl WorkbookParser {
    /// ファイルを開き、全体をメモリに読み込んで解析する
    ///
    /// # 引数
    ///
    /// * `path` - 入力ファイルのパス
    /// * `security` - 入力サイズの上限
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookParser)` - 読み込みに成功した場合
    /// * `Err(TabconvError)` - I/Oエラー、サイズ超過、解析エラーの場合
    pub fn open(path: &Path, security: &SecurityConfig) -> Result<Self, TabconvError> {
        let file = File::open(path)?;
        security.check_input_size(file.metadata()?.len())?;
        Self::from_reader(file, security)
    }

    /// 任意のリーダーから読み込んで解析する
    pub fn from_reader<R: Read>(mut reader: R, security: &SecurityConfig) -> Result<Self, TabconvError> {
        let mut buffer = Vec::new();
        let bytes_read = reader.read_to_end(&mut buffer)?;
        security.check_input_size(bytes_read as u64)?;

        let workbook = open_workbook_auto_from_rs(Cursor::new(buffer))?;
        Ok(Self { workbook })
    }

    /// すべてのシート名を取得（ワークブック内の順序）
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    /// シートを読み込む
    pub fn read_sheet(&mut self, name: &str) -> Result<SheetData, TabconvError> {
        let range = self.workbook.worksheet_range(name)?;
        Ok(SheetData {
            name: name.to_string(),
            range,
        })
    }
}
