//! Workbook Output
//!
//! 区切りテキストのレコードを`rust_xlsxwriter`のシートにコピーする。

use csv::{Reader, StringRecord};
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::io::Read;
use tracing::debug;

use crate::error::TabconvError;

/// ワークブックに存在しない最小の`Sheet <n>`（nは1から）を名前とするシートを追加する
pub(crate) fn add_sheet(workbook: &mut Workbook) -> Result<&mut Worksheet, TabconvError> {
    let mut n = 1u32;
    let name = loop {
        let candidate = format!("Sheet {}", n);
        if workbook.worksheet_from_name(&candidate).is_err() {
            break candidate;
        }
        n += 1;
    };

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&name)?;
    Ok(worksheet)
}

/// レコードを1行ずつシートに追加する
///
/// フィールドは左から順にセル（文字列）として書き込みます。空のフィールドは
/// セルを作りません。読み込み用のレコードバッファは使い回します。
///
/// # 戻り値
///
/// * `Ok(u32)` - 追加した行数
/// * `Err(TabconvError)` - 読み込みエラー、またはシートの上限を超えた場合
pub(crate) fn write_records<R: Read>(
    reader: &mut Reader<R>,
    worksheet: &mut Worksheet,
) -> Result<u32, TabconvError> {
    let mut record = StringRecord::new();
    let mut row = 0u32;

    while reader.read_record(&mut record)? {
        for (col, field) in record.iter().enumerate() {
            if field.is_empty() {
                continue;
            }
            let col = u16::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)?;
            worksheet.write_string(row, col, field)?;
        }
        row += 1;
    }

    debug!("Copied {} records", row);
    Ok(row)
}
