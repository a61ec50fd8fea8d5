//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// 日付の出力形式
///
/// スプレッドシートの日付セルを区切りテキストに変換する際の出力形式を指定します。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum DateFormat {
    /// ISO 8601形式（デフォルト）
    ///
    /// 時刻部分がない場合は`2025-11-20`、ある場合は`2025-11-20 13:45:00`
    #[default]
    Iso8601,

    /// カスタム形式（chrono互換フォーマット文字列）
    ///
    /// # フォーマット指定子（主要なもの）
    ///
    /// - `%Y`: 4桁の年（例: 2025）
    /// - `%m`: 2桁の月（01-12）
    /// - `%d`: 2桁の日（01-31）
    /// - `%H`: 24時間形式の時（00-23）
    /// - `%M`: 分（00-59）
    /// - `%S`: 秒（00-59）
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use tabconv::{ConverterBuilder, DateFormat};
    ///
    /// # fn main() -> Result<(), tabconv::TabconvError> {
    /// let converter = ConverterBuilder::new()
    ///     .with_date_format(DateFormat::Custom("%d/%m/%Y".to_string()))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    Custom(String),
}

/// シート名衝突時の処理方針
///
/// 複数シートのワークブックでは、シート名の`\`、`/`、空白を`_`に置換した名前で
/// ファイルを作成します。異なるシートが同じファイル名になった場合の動作を指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum CollisionPolicy {
    /// 後から書き込んだシートで上書きする（デフォルト）
    ///
    /// 上書きが発生した場合は警告ログを出力します。
    #[default]
    Overwrite,

    /// 衝突した時点でそのファイルの変換を失敗させる
    Reject,
}
