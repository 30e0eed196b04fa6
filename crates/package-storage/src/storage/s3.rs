//! # S3互換 Package Storage 実装
//!
//! AWS S3, MinIO, Cloudflare R2 等のS3互換APIを使用する
//! Package Storage実装。署名計算はrust-s3に委譲する。

use super::{PackageStorage, UPLOAD_URL_EXPIRY_SECS};
use crate::error::StorageError;
use crate::object::PackageObject;

/// S3互換ストレージによるPackage Storage実装。
/// AWS S3, MinIO, Cloudflare R2 等のS3互換APIを使用する。
///
/// 認証情報とリージョンは構築時に注入され、ハンドルが指すバケットへの
/// バケット参照は署名操作ごとに構築される。
pub struct S3PackageStorage {
    /// 署名対象のリージョン（カスタムエンドポイントを含む）
    region: s3::Region,
    /// 署名に使用する認証情報
    credentials: s3::creds::Credentials,
}

impl S3PackageStorage {
    /// リージョンと認証情報からPackage Storageを構築する。
    pub fn new(region: s3::Region, credentials: s3::creds::Credentials) -> Self {
        Self {
            region,
            credentials,
        }
    }

    /// エンドポイントからリージョンを決定する。
    fn detect_region(endpoint: &str) -> s3::Region {
        // AWS S3エンドポイント（s3.REGION.amazonaws.com）からリージョンを自動検出。
        // 非AWSエンドポイントではus-east-1をフォールバックとして使用。
        let detected_region = std::env::var("S3_REGION").ok().unwrap_or_else(|| {
            if let Some(caps) = endpoint.find("s3.").and_then(|start| {
                let rest = &endpoint[start + 3..];
                rest.find(".amazonaws.com").map(|end| rest[..end].to_string())
            }) {
                caps
            } else {
                "us-east-1".to_string()
            }
        });

        s3::Region::Custom {
            region: detected_region,
            endpoint: endpoint.to_string(),
        }
    }

    /// 環境変数から構築する。
    ///
    /// `S3_ENDPOINT` / `S3_ACCESS_KEY` / `S3_SECRET_KEY` / `S3_REGION` を
    /// 参照する。未設定の場合は開発環境向けのMinIOデフォルトを使用する。
    pub fn from_env() -> anyhow::Result<Self> {
        let endpoint = std::env::var("S3_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:9000".to_string());
        let access_key =
            std::env::var("S3_ACCESS_KEY").unwrap_or_else(|_| "minioadmin".to_string());
        let secret_key =
            std::env::var("S3_SECRET_KEY").unwrap_or_else(|_| "minioadmin".to_string());

        let region = Self::detect_region(&endpoint);

        let credentials = s3::creds::Credentials::new(
            Some(&access_key),
            Some(&secret_key),
            None,
            None,
            None,
        )?;

        Ok(Self::new(region, credentials))
    }
}

#[async_trait::async_trait]
impl PackageStorage for S3PackageStorage {
    async fn upload_url(
        &self,
        object: &PackageObject,
        kms_key_id: &str,
    ) -> Result<String, StorageError> {
        let bucket = s3::Bucket::new(
            object.bucket(),
            self.region.clone(),
            self.credentials.clone(),
        )
        .map_err(|e| StorageError::Bucket(format!("バケット参照の初期化失敗: {e}")))?
        .with_path_style();

        // kms_key_idは署名リクエストに反映しない。SSE-KMSは強制されず、
        // アップロードの暗号化設定はバケット側の既定に従う。
        let url = bucket
            .presign_put(object.key(), UPLOAD_URL_EXPIRY_SECS, None, None)
            .await
            .map_err(|e| {
                StorageError::Presign(format!("署名付きアップロードURL生成失敗: {e}"))
            })?;

        tracing::debug!(
            bucket = %object.bucket(),
            key = %object.key(),
            kms_key_id = %kms_key_id,
            expiry_secs = UPLOAD_URL_EXPIRY_SECS,
            "署名付きアップロードURLを発行"
        );

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ネットワーク接続なしで署名計算のみを行うテスト用ストレージ
    fn test_storage() -> S3PackageStorage {
        let region = s3::Region::Custom {
            region: "us-east-1".to_string(),
            endpoint: "http://localhost:9000".to_string(),
        };
        let credentials = s3::creds::Credentials::new(
            Some("minioadmin"),
            Some("minioadmin"),
            None,
            None,
            None,
        )
        .unwrap();

        S3PackageStorage::new(region, credentials)
    }

    /// 発行されたURLにバケット・キー・有効期限が含まれることを確認
    #[tokio::test]
    async fn test_upload_url_contains_bucket_key_expiry() {
        let storage = test_storage();
        let object = PackageObject::new("uploads-bucket", "pkg/123/archive.tgz");

        let url = storage.upload_url(&object, "key-abc").await.unwrap();

        assert!(url.contains("uploads-bucket"), "バケット名がURLに含まれない: {url}");
        assert!(url.contains("pkg/123/archive.tgz"), "キーがURLに含まれない: {url}");
        assert!(url.contains("X-Amz-Expires=86400"), "有効期限がURLに含まれない: {url}");
    }

    /// kms_key_idが返却URLの暗号化パラメータに影響しないことを確認
    #[tokio::test]
    async fn test_kms_key_id_not_applied() {
        let storage = test_storage();
        let object = PackageObject::new("uploads-bucket", "pkg/123/archive.tgz");

        let url_a = storage.upload_url(&object, "key-abc").await.unwrap();
        let url_b = storage.upload_url(&object, "key-xyz").await.unwrap();

        for url in [&url_a, &url_b] {
            assert!(
                !url.to_ascii_lowercase().contains("server-side-encryption"),
                "サーバーサイド暗号化パラメータが含まれている: {url}"
            );
            assert!(!url.contains("key-abc"), "kms_key_idがURLに漏れている: {url}");
            assert!(!url.contains("key-xyz"), "kms_key_idがURLに漏れている: {url}");
        }
    }

    /// 異なる時刻に発行したURLの署名が異なることを確認
    #[tokio::test]
    async fn test_urls_differ_across_time() {
        let storage = test_storage();
        let object = PackageObject::new("uploads-bucket", "pkg/123/archive.tgz");

        let first = storage.upload_url(&object, "key-abc").await.unwrap();
        // X-Amz-Dateは秒単位のため、1秒を跨いでから再発行する
        tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
        let second = storage.upload_url(&object, "key-abc").await.unwrap();

        assert_ne!(first, second);
    }

    /// 空のキーでもローカルではエラーにならず署名呼び出しに渡されることを確認
    #[tokio::test]
    async fn test_empty_key_passes_through() {
        let storage = test_storage();
        let object = PackageObject::new("uploads-bucket", "");

        let result = storage.upload_url(&object, "").await;

        assert!(result.is_ok(), "空のキーでエラー: {:?}", result.err());
    }
}
