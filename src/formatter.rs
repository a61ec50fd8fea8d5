//! Formatter Module
//!
//! calamineのセル値を区切りテキストのフィールド文字列に変換するモジュール。

use calamine::Data;
use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::api::DateFormat;
use crate::error::TabconvError;
use crate::types::CellCoord;

/// セルフォーマッター
///
/// セル値のフォーマット処理のファサードとして機能します。
#[derive(Debug, Clone, Default)]
pub(crate) struct CellFormatter {
    /// 日付フォーマッター
    date_formatter: DateFormatter,
}

impl CellFormatter {
    /// 新しいCellFormatterインスタンスを生成
    pub fn new(date_format: DateFormat) -> Self {
        Self {
            date_formatter: DateFormatter { date_format },
        }
    }

    /// セル値をフォーマット
    ///
    /// # 引数
    ///
    /// * `value` - calamineのセル値
    /// * `sheet` - シート名（エラーメッセージ用）
    /// * `coord` - セル座標（エラーメッセージ用）
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - フォーマット済み文字列
    /// * `Err(TabconvError::CellFormat)` - 日付・期間として表現できない値の場合
    pub fn format_cell(
        &self,
        value: &Data,
        sheet: &str,
        coord: CellCoord,
    ) -> Result<String, TabconvError> {
        let formatted = match value {
            Data::Empty => String::new(),
            Data::String(s) => s.clone(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => format_number(*f),
            Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            Data::Error(e) => e.to_string(),
            Data::DateTime(dt) => {
                let formatted = if dt.is_duration() {
                    dt.as_duration().map(format_duration)
                } else {
                    dt.as_datetime().map(|d| self.date_formatter.format(d))
                };
                formatted.ok_or_else(|| TabconvError::CellFormat {
                    sheet: sheet.to_string(),
                    cell: coord.to_a1_notation(),
                    message: format!("serial value {} is not a valid date", dt.as_f64()),
                })?
            }
            Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        };
        Ok(formatted)
    }
}

/// 日付フォーマッター
#[derive(Debug, Clone, Default)]
pub(crate) struct DateFormatter {
    date_format: DateFormat,
}

impl DateFormatter {
    /// 日時をフォーマット
    ///
    /// ISO 8601形式では、時刻が0時ちょうどの場合は日付のみを出力します。
    pub fn format(&self, datetime: NaiveDateTime) -> String {
        match &self.date_format {
            DateFormat::Iso8601 if datetime.time() == NaiveTime::MIN => {
                datetime.format("%Y-%m-%d").to_string()
            }
            DateFormat::Iso8601 => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            DateFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

/// 数値をフォーマット
///
/// 整数値は小数点なし、それ以外は往復可能な最短表現で出力します。
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// 期間を`[h]:mm:ss`形式でフォーマット
fn format_duration(duration: Duration) -> String {
    let millis = duration.num_milliseconds();
    let sign = if millis < 0 { "-" } else { "" };
    let total_secs = (millis.abs() + 500) / 1000;
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        total_secs / 3600,
        (total_secs / 60) % 60,
        total_secs % 60
    )
}
