//! # Datalake Package Storage
//!
//! パッケージアップロード用の署名付きURL発行ライブラリ。
//!
//! バケットとオブジェクトキーからオブジェクトハンドルを構築し、
//! ストレージプロバイダのクライアントライブラリに署名計算を委譲して
//! 有効期限付きのアップロードURL（PUT）を発行する。
//! 署名はキャッシュされた認証情報に対するローカル計算であり、
//! URL発行時点ではネットワークリクエストは発生しない。
//!
//! ## バックエンド実装
//! - `S3PackageStorage`: S3互換API（AWS S3, MinIO, Cloudflare R2等）を
//!   使用する実装（`vendor-aws` feature）

pub mod error;
pub mod object;
pub mod storage;

pub use error::StorageError;
pub use object::PackageObject;
pub use storage::{PackageStorage, UPLOAD_URL_EXPIRY_SECS};

#[cfg(feature = "vendor-aws")]
pub use storage::S3PackageStorage;
