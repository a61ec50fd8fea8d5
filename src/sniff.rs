//! Format Sniffer Module
//!
//! ファイル先頭のローカルファイルヘッダを調べ、ZIPベースのスプレッドシートかどうかを判定する。

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// ZIPローカルファイルヘッダのシグネチャ（`PK\x03\x04`、リトルエンディアン）
pub const LOCAL_FILE_HEADER_SIGNATURE: u32 = 0x0403_4b50;

/// ZIPローカルファイルヘッダの固定長部分のバイト数
pub const LOCAL_FILE_HEADER_LEN: usize = 30;

/// 判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// ZIPベースのスプレッドシート（xlsxなど）
    SpreadsheetContainer,
    /// それ以外。区切りテキストとして扱う
    DelimitedText,
}

/// ファイルの形式を判定する
///
/// ファイルを開いて先頭30バイトを読み、判定後に閉じます。
/// 以降の変換処理はファイルを改めて開き直します。
///
/// # 戻り値
///
/// * `Ok(Format)` - 判定結果（30バイトに満たないファイルは`DelimitedText`）
/// * `Err(io::Error)` - オープンや読み込みに失敗した場合
pub fn sniff(path: &Path) -> io::Result<Format> {
    let file = File::open(path)?;
    sniff_reader(file)
}

/// 任意のリーダーから形式を判定する
pub fn sniff_reader<R: Read>(mut reader: R) -> io::Result<Format> {
    let mut header = [0u8; LOCAL_FILE_HEADER_LEN];
    match reader.read_exact(&mut header) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            return Ok(Format::DelimitedText);
        }
        Err(e) => return Err(e),
    }

    let signature = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
    if signature == LOCAL_FILE_HEADER_SIGNATURE {
        Ok(Format::SpreadsheetContainer)
    } else {
        Ok(Format::DelimitedText)
    }
}
