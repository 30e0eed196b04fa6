//! # オブジェクトハンドル
//!
//! バケットとオブジェクトキーの組で、オブジェクトストレージ上の
//! 位置を指すイミュータブルな参照。

/// オブジェクトストレージ上の位置を指すハンドル。
///
/// 構築は純粋でI/Oを行わない。バケット名・キーの検証も行わず、
/// 空文字列もそのまま署名呼び出しに渡される。
/// 永続化はされず、1回の署名操作の間だけ使用される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageObject {
    bucket: String,
    key: String,
}

impl PackageObject {
    /// バケットとオブジェクトキーからハンドルを構築する。
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// バケット名
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// オブジェクトキー
    pub fn key(&self) -> &str {
        &self.key
    }
}
