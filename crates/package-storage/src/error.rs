//! # Package Storage エラー型

/// パッケージストレージのエラー型。
///
/// ローカルでのリトライや復旧は行わない。バックエンド側の
/// エラーメッセージをそのまま呼び出し元に伝播する。
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// バケット参照の構築に失敗
    #[error("バケット参照の構築に失敗: {0}")]
    Bucket(String),
    /// 署名付きURLの生成に失敗
    #[error("署名付きURLの生成に失敗: {0}")]
    Presign(String),
}
