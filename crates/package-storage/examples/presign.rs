//! 署名付きアップロードURL発行ツール
//!
//! 開発環境のMinIO等に対して署名付きアップロードURLを発行する。
//!
//! 使い方:
//!   cargo run --example presign -- <bucket> <key> [kms_key_id]
//!
//! 環境変数:
//!   S3_ENDPOINT / S3_ACCESS_KEY / S3_SECRET_KEY / S3_REGION

use datalake_package_storage::{PackageObject, PackageStorage, S3PackageStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let bucket = args
        .next()
        .unwrap_or_else(|| "datalake-packages".to_string());
    let key = args
        .next()
        .unwrap_or_else(|| "pkg/example/archive.tgz".to_string());
    let kms_key_id = args.next().unwrap_or_default();

    let storage = S3PackageStorage::from_env()?;
    let object = PackageObject::new(bucket, key);

    let url = storage.upload_url(&object, &kms_key_id).await?;
    println!("{url}");

    Ok(())
}
