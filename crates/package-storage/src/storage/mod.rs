//! # Package Storage 抽象インターフェース
//!
//! パッケージアップロード先ストレージの抽象インターフェース。
//! S3互換ストレージ実装は `s3` サブモジュールを参照。

#[cfg(feature = "vendor-aws")]
pub mod s3;

#[cfg(feature = "vendor-aws")]
pub use s3::S3PackageStorage;

use crate::error::StorageError;
use crate::object::PackageObject;

/// 署名付きアップロードURLの有効期限（秒）。24時間固定。
///
/// 有効期限の強制はストレージプロバイダ側で行われ、
/// このライブラリは値を署名リクエストに渡すだけである。
pub const UPLOAD_URL_EXPIRY_SECS: u32 = 24 * 60 * 60;

/// パッケージストレージの抽象インターフェース。
///
/// 運用者はS3互換ストレージ（MinIO, AWS S3, Cloudflare R2等）や
/// その他のストレージバックエンドを実装として選択できる。
/// 署名能力（認証情報）は実装の構築時に注入され、
/// プロセス全体の共有状態には依存しない。
#[async_trait::async_trait]
pub trait PackageStorage: Send + Sync {
    /// オブジェクトハンドルに対する署名付きアップロードURL（PUT）を発行する。
    ///
    /// 有効期限は [`UPLOAD_URL_EXPIRY_SECS`] で固定。
    /// 失敗時はバックエンドのエラーをそのまま伝播する。
    ///
    /// `kms_key_id` は受け取るが署名リクエストには反映されず、
    /// 発行されるURLにサーバーサイド暗号化は強制されない。
    async fn upload_url(
        &self,
        object: &PackageObject,
        kms_key_id: &str,
    ) -> Result<String, StorageError>;
}
