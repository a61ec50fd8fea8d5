//! Path Utilities Module
//!
//! 出力ファイル名の導出と、出力ディレクトリ指定の前処理を提供するモジュール。

use std::io;
use std::path::{Path, PathBuf};

use crate::error::TabconvError;

/// 拡張子を除いたファイル名を返す
///
/// 拡張子は最後の要素における最後の`.`以降です。`.`がなければそのまま返します。
///
/// ```rust
/// use tabconv::paths::basename;
/// use std::path::Path;
///
/// assert_eq!(basename(Path::new("dir/report.v2.xlsx")), "report.v2");
/// assert_eq!(basename(Path::new("noext")), "noext");
/// ```
pub fn basename(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(dot) => name[..dot].to_string(),
        None => name,
    }
}

/// ファイル名に使えない文字（`\`、`/`、空白）を`_`に置換する
///
/// シート名から出力ファイル名を作る場合にのみ使用します。
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '\\' | '/' | ' ' => '_',
            c => c,
        })
        .collect()
}

/// 先頭の`~`をホームディレクトリに展開する
///
/// ホームディレクトリは呼び出し側で解決して渡します（`None`は解決失敗）。
///
/// # 戻り値
///
/// * `Ok(PathBuf)` - 展開後のパス（`~`で始まらない場合はそのまま）
/// * `Err(TabconvError::Config)` - `~`で始まるがホームディレクトリが不明な場合
pub fn expand_home(path: &str, home_dir: Option<&Path>) -> Result<PathBuf, TabconvError> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(PathBuf::from(path));
    };
    let home = home_dir.ok_or_else(|| {
        TabconvError::Config(format!(
            "Cannot expand '{}': home directory is unknown",
            path
        ))
    })?;
    let mut expanded = home.as_os_str().to_os_string();
    expanded.push(rest);
    Ok(PathBuf::from(expanded))
}

/// パスにファイルまたはディレクトリが存在するかを確認する
///
/// 存在しない場合は`Ok(false)`、それ以外のエラーはそのまま返します。
pub fn path_exists(path: &Path) -> io::Result<bool> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
