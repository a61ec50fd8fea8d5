//! Security Module
//!
//! 入力ファイルをメモリに読み込む際の制限を定義するモジュール。

use crate::error::TabconvError;

/// セキュリティ設定
///
/// ファイル処理時のセキュリティ制限を定義します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    /// デフォルト: 2GB (2_147_483_648 bytes)
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: 2_147_483_648, // 2GB
        }
    }
}

impl SecurityConfig {
    /// 入力サイズが上限以内かを検証
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 上限以内の場合
    /// * `Err(TabconvError::SecurityViolation)` - 上限を超えた場合
    pub fn check_input_size(&self, size: u64) -> Result<(), TabconvError> {
        if size > self.max_input_file_size {
            return Err(TabconvError::SecurityViolation(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                size, self.max_input_file_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        assert_eq!(SecurityConfig::default().max_input_file_size, 2_147_483_648);
    }

    #[test]
    fn test_check_input_size() {
        let config = SecurityConfig {
            max_input_file_size: 10,
        };
        assert!(config.check_input_size(0).is_ok());
        assert!(config.check_input_size(10).is_ok());
        assert!(matches!(
            config.check_input_size(11),
            Err(TabconvError::SecurityViolation(_))
        ));
    }
}
