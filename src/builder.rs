//! Builder Module
//!
//! Fluent Builder APIを提供し、`Converter`インスタンスを段階的に構築する。
//! `Converter`は入力ファイルの形式を判定し、2つの変換処理のどちらかを実行する。

use chrono::format::{Item, StrftimeItems};
use csv::ReaderBuilder;
use rust_xlsxwriter::Workbook;
use std::collections::HashSet;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::api::{CollisionPolicy, DateFormat};
use crate::error::{ResultExt, TabconvError};
use crate::formatter::CellFormatter;
use crate::output;
use crate::parser::WorkbookParser;
use crate::paths::{basename, path_exists, sanitize};
use crate::security::SecurityConfig;
use crate::sniff::{sniff, Format};
use crate::types::{ConversionReport, Direction};

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ConversionConfig {
    /// 出力ディレクトリ
    pub output_dir: PathBuf,

    /// 区切り文字（1バイト）
    pub delimiter: u8,

    /// 日付形式
    pub date_format: DateFormat,

    /// シート名衝突時の処理方針
    pub collision_policy: CollisionPolicy,

    /// 入力サイズの制限
    pub security: SecurityConfig,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            delimiter: b'\t',
            date_format: DateFormat::Iso8601,
            collision_policy: CollisionPolicy::Overwrite,
            security: SecurityConfig::default(),
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Converter`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use tabconv::{CollisionPolicy, ConverterBuilder};
///
/// # fn main() -> Result<(), tabconv::TabconvError> {
/// let converter = ConverterBuilder::new()
///     .with_output_dir("out")
///     .with_delimiter(';')
///     .with_collision_policy(CollisionPolicy::Reject)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConverterBuilder {
    /// 内部設定（構築中）
    config: ConversionConfig,

    /// 区切り文字（`build()`で1バイトか検証する）
    delimiter: char,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - 出力ディレクトリ: カレントディレクトリ（`.`）
    /// - 区切り文字: タブ
    /// - 日付形式: ISO 8601
    /// - シート名衝突: 上書き
    /// - 入力サイズ上限: 2GB
    pub fn new() -> Self {
        Self {
            config: ConversionConfig::default(),
            delimiter: '\t',
        }
    }

    /// 出力ディレクトリを指定する
    ///
    /// ディレクトリは`build()`の時点で存在している必要があります。
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// 区切り文字を指定する
    ///
    /// ASCIIの1文字で、`"`、`\r`、`\n`以外である必要があります。
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// 日付の出力形式を指定する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use tabconv::{ConverterBuilder, DateFormat};
    ///
    /// let builder = ConverterBuilder::new()
    ///     .with_date_format(DateFormat::Custom("%Y/%m/%d".to_string()));
    /// ```
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.config.date_format = format;
        self
    }

    /// シート名衝突時の処理方針を指定する
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.config.collision_policy = policy;
        self
    }

    /// メモリに読み込むスプレッドシートの最大サイズ（バイト）を指定する
    pub fn with_max_input_size(mut self, bytes: u64) -> Self {
        self.config.security.max_input_file_size = bytes;
        self
    }

    /// 設定を検証し、`Converter`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `TabconvError::Config(String)`: 設定の検証に失敗した場合
    ///   * 区切り文字がASCIIでない、または`"`、`\r`、`\n`
    ///   * カスタム日付形式が不正な書式文字列
    ///   * 出力ディレクトリが存在しない、またはディレクトリでない
    /// * `TabconvError::Io`: 出力ディレクトリの確認に失敗した場合
    pub fn build(mut self) -> Result<Converter, TabconvError> {
        // 1. 区切り文字の検証
        if !self.delimiter.is_ascii() || matches!(self.delimiter, '"' | '\r' | '\n') {
            return Err(TabconvError::Config(format!(
                "Invalid delimiter {:?}: must be a single ASCII character other than quote or newline",
                self.delimiter
            )));
        }
        self.config.delimiter = self.delimiter as u8;

        // 2. カスタム日付形式の検証
        if let DateFormat::Custom(ref format_str) = self.config.date_format {
            if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                return Err(TabconvError::Config(format!(
                    "Invalid date format string: '{}'",
                    format_str
                )));
            }
        }

        // 3. 出力ディレクトリの検証
        let output_dir = &self.config.output_dir;
        if !path_exists(output_dir)? {
            return Err(TabconvError::Config(format!(
                "Directory {:?} does not exist",
                output_dir
            )));
        }
        if !output_dir.is_dir() {
            return Err(TabconvError::Config(format!(
                "{:?} is not a directory",
                output_dir
            )));
        }

        Ok(Converter::new(self.config))
    }
}

/// 変換処理のファサード
///
/// 入力ファイルの先頭を調べ、ZIPベースのスプレッドシートであれば区切りテキストへ、
/// それ以外は区切りテキストとみなしてスプレッドシートへ変換します。
///
/// # 使用例
///
/// ```rust,no_run
/// use tabconv::ConverterBuilder;
///
/// # fn main() -> Result<(), tabconv::TabconvError> {
/// let converter = ConverterBuilder::new().with_output_dir("out").build()?;
/// let report = converter.convert("sales.xlsx")?;
/// for path in &report.outputs {
///     println!("wrote {}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Converter {
    /// 変換設定
    config: ConversionConfig,

    /// セルフォーマッター
    formatter: CellFormatter,
}

impl Converter {
    pub(crate) fn new(config: ConversionConfig) -> Self {
        Self {
            formatter: CellFormatter::new(config.date_format.clone()),
            config,
        }
    }

    /// 出力ディレクトリ
    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    /// 1ファイルを変換する
    ///
    /// # 処理フロー
    ///
    /// 1. 形式判定（判定時のI/Oエラーはこのファイルの失敗として返す）
    /// 2. 判定結果に応じた変換処理の実行
    ///
    /// エラーは変換方向のラベルと`convert`のラベルで包まれます。
    ///
    /// # 戻り値
    ///
    /// * `Ok(ConversionReport)` - 変換の方向と書き出したファイル
    /// * `Err(TabconvError::Context)` - 失敗した場合
    pub fn convert(&self, input: impl AsRef<Path>) -> Result<ConversionReport, TabconvError> {
        let input = input.as_ref();

        let direction = match sniff(input).context("convert")? {
            Format::SpreadsheetContainer => Direction::XlsxToCsv,
            Format::DelimitedText => Direction::CsvToXlsx,
        };
        debug!("{:?}: {}", input, direction);

        let outputs = match direction {
            Direction::XlsxToCsv => self.xlsx_to_csv(input),
            Direction::CsvToXlsx => self.csv_to_xlsx(input),
        }
        .context(direction.label())
        .context("convert")?;

        Ok(ConversionReport {
            input: input.to_path_buf(),
            direction,
            outputs,
        })
    }

    /// スプレッドシートを区切りテキストに変換する
    ///
    /// シートごとに`<シート名>.csv`（`\`、`/`、空白は`_`に置換）を書き出します。
    ///
    /// - シートが0枚: 何も出力しない
    /// - シートが1枚: `<出力先>/`に直接書き出す
    /// - シートが複数: `<出力先>/<入力ファイル名>/`を作成し、その中に書き出す
    fn xlsx_to_csv(&self, input: &Path) -> Result<Vec<PathBuf>, TabconvError> {
        let mut parser = WorkbookParser::open(input, &self.config.security)?;
        let sheet_names = parser.sheet_names();

        let dir = match sheet_names.len() {
            0 => {
                debug!("{:?} has no sheets", input);
                return Ok(Vec::new());
            }
            1 => self.config.output_dir.clone(),
            _ => {
                let dir = self.config.output_dir.join(basename(input));
                fs::create_dir(&dir)?;
                dir
            }
        };

        let mut outputs = Vec::with_capacity(sheet_names.len());
        let mut seen = HashSet::new();
        for name in &sheet_names {
            let file_name = sanitize(name);
            if !seen.insert(file_name.clone()) {
                match self.config.collision_policy {
                    CollisionPolicy::Overwrite => {
                        warn!("Sheet '{}' overwrites {}.csv in {:?}", name, file_name, dir);
                    }
                    CollisionPolicy::Reject => {
                        return Err(TabconvError::SheetNameCollision { name: file_name });
                    }
                }
            }

            let sheet = parser.read_sheet(name)?;
            let path = dir.join(format!("{}.csv", file_name));
            output::write_sheet_file(&path, &sheet, self.config.delimiter, &self.formatter)?;
            info!("Wrote {:?}", path);
            outputs.push(path);
        }

        Ok(outputs)
    }

    /// 区切りテキストをスプレッドシートに変換する
    ///
    /// 新しいワークブックに`Sheet <n>`のシートを1枚作り、全レコードを追加して
    /// `<出力先>/<入力ファイル名>.xlsx`に保存します。
    fn csv_to_xlsx(&self, input: &Path) -> Result<Vec<PathBuf>, TabconvError> {
        let file = File::open(input)?;
        let mut reader = ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut workbook = Workbook::new();
        let worksheet = output::add_sheet(&mut workbook)?;
        let rows = output::write_records(&mut reader, worksheet)?;

        let path = self
            .config
            .output_dir
            .join(format!("{}.xlsx", basename(input)));
        workbook.save(&path)?;
        info!("Wrote {:?} ({} rows)", path, rows);

        Ok(vec![path])
    }
}
