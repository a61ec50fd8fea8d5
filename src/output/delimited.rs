//! Delimited Output
//!
//! シートの内容を`csv::Writer`にコピーする。

use calamine::Data;
use csv::{Writer, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::error::TabconvError;
use crate::formatter::CellFormatter;
use crate::parser::SheetData;
use crate::types::CellCoord;

/// シートを区切りテキストファイルとして書き出す
///
/// 既存のファイルは切り詰めて上書きします。コピー中のエラーと
/// ファイルのクローズ（フラッシュ・同期）エラーが両方発生した場合は、
/// クローズエラーを優先して返します。
///
/// # 戻り値
///
/// * `Ok(usize)` - 書き出したレコード数
/// * `Err(TabconvError)` - 書き込み、フォーマット、クローズに失敗した場合
pub(crate) fn write_sheet_file(
    path: &Path,
    sheet: &SheetData,
    delimiter: u8,
    formatter: &CellFormatter,
) -> Result<usize, TabconvError> {
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_writer(file);

    let copied = write_sheet(&mut writer, sheet, formatter);

    // クローズ失敗はコピー失敗より優先
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;

    copied
}

/// シートの各行を1レコードとして書き込む
///
/// 値のない行はスキップします。範囲の起点より左の列は空フィールドで埋め、
/// 元の列位置を保ちます。最後にライターをフラッシュします。
pub(crate) fn write_sheet<W: Write>(
    writer: &mut Writer<W>,
    sheet: &SheetData,
    formatter: &CellFormatter,
) -> Result<usize, TabconvError> {
    let (first_row, first_col) = sheet.origin();
    let mut record: Vec<String> = Vec::with_capacity(first_col as usize + sheet.range.width());
    let mut written = 0;

    for (row_offset, row) in sheet.range.rows().enumerate() {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }

        record.clear();
        record.resize(first_col as usize, String::new());
        for (col_offset, cell) in row.iter().enumerate() {
            let coord = CellCoord::new(
                first_row + row_offset as u32,
                first_col + col_offset as u32,
            );
            record.push(formatter.format_cell(cell, &sheet.name, coord)?);
        }

        writer.write_record(&record)?;
        written += 1;
    }

    writer.flush()?;
    debug!("Sheet '{}': {} records", sheet.name, written);
    Ok(written)
}
