//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// tabconvクレート全体で使用するエラー型
///
/// スプレッドシートの読み込み、CSVの読み書き、XLSXの書き出し中に発生する
/// すべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（ファイルのオープン失敗、ディレクトリ作成失敗など）
/// - `Parse`: スプレッドシートの解析中に発生したエラー（calamine由来）
/// - `Csv`: 区切りテキストの読み書き中に発生したエラー（csv由来）
/// - `Write`: XLSXの生成中に発生したエラー（rust_xlsxwriter由来）
/// - `Config`: 設定の検証に失敗したエラー
/// - `Context`: 変換方向などのラベルを付けて包んだエラー
///
/// # 使用例
///
/// ```rust,no_run
/// use tabconv::TabconvError;
/// use std::fs::File;
///
/// fn open_input(path: &str) -> Result<(), TabconvError> {
///     let _file = File::open(path)?;  // Ioエラーが自動的に変換される
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum TabconvError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// スプレッドシートの解析中に発生したエラー
    ///
    /// ファイル形式が不正、破損したファイルなどが原因となります。
    #[error("Failed to parse spreadsheet: {0}")]
    Parse(#[from] calamine::Error),

    /// 区切りテキストの読み書きエラー
    ///
    /// 不正なクォート、UTF-8でない入力、書き込み失敗などが原因となります。
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// XLSXドキュメントの生成・保存エラー
    #[error("Failed to write workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    /// 設定の検証に失敗したエラー
    ///
    /// `ConverterBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。例えば、区切り文字がASCIIでない場合や、
    /// 出力ディレクトリが存在しない場合などです。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use tabconv::{ConverterBuilder, TabconvError};
    ///
    /// let result = ConverterBuilder::new()
    ///     .with_delimiter('é')
    ///     .build();
    ///
    /// match result {
    ///     Err(TabconvError::Config(msg)) => {
    ///         println!("設定エラー: {}", msg);
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// セル値を文字列に変換できなかったエラー
    ///
    /// エラーメッセージには、シート名、セル座標、詳細なメッセージが含まれます。
    #[error("Failed to format cell at sheet '{sheet}', cell {cell}: {message}")]
    CellFormat {
        /// エラーが発生したシート名
        sheet: String,
        /// エラーが発生したセルの座標（A1記法）
        cell: String,
        /// エラーの詳細メッセージ
        message: String,
    },

    /// 複数のシートが同じ出力ファイル名になったエラー
    ///
    /// `CollisionPolicy::Reject`の場合のみ発生します。
    #[error("Sheet name collision: '{name}' is already written")]
    SheetNameCollision {
        /// 衝突したファイル名（拡張子なし）
        name: String,
    },

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力ファイルサイズの上限を超えた場合などに発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),

    /// 処理内容を示すラベルで包んだエラー
    ///
    /// `Display`は包まれたエラーまで含めたチェーン全体を出力します
    /// （例: `convert: xlsx to csv: IO error: ...`）。`source()`を辿って
    /// 表示するレポーターと組み合わせると同じメッセージが重複するため、
    /// このエラーは`Display`のみで表示してください。元のエラーの判定には
    /// `source()`または`root()`を使います。
    #[error("{context}: {source}")]
    Context {
        /// ラベル（例: "convert", "xlsx to csv"）
        context: &'static str,
        /// 包まれた元のエラー
        #[source]
        source: Box<TabconvError>,
    },
}

impl TabconvError {
    /// エラーにラベルを付けて包む
    pub fn context(self, context: &'static str) -> Self {
        TabconvError::Context {
            context,
            source: Box::new(self),
        }
    }

    /// `Context`をすべて剥がした元のエラーを取得
    pub fn root(&self) -> &TabconvError {
        match self {
            TabconvError::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

/// `Result`にラベルを付けるための拡張トレイト
pub trait ResultExt<T> {
    /// エラー時に`TabconvError::Context`で包む
    fn context(self, context: &'static str) -> Result<T, TabconvError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<TabconvError>,
{
    fn context(self, context: &'static str) -> Result<T, TabconvError> {
        self.map_err(|e| e.into().context(context))
    }
}
