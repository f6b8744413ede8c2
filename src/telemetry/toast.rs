//! トースト通知キュー
//!
//! 一時的な警告メッセージを (id, message, 失効時刻) のデータとして保持する。
//! タイマーは持たず、呼び出し側が現在時刻を渡して `sweep` で失効分を取り除く。

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// トースト表示時間のデフォルト（ミリ秒）
pub const DEFAULT_TOAST_TTL_MS: i64 = 3000;

/// 一時的な通知メッセージ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    /// 一意なID（同時表示中のトーストが互いの失効に干渉しないため）
    pub id: Uuid,
    /// 表示メッセージ
    pub message: String,
    /// 作成時刻
    pub created_at: DateTime<Utc>,
    /// 失効時刻
    pub expires_at: DateTime<Utc>,
}

/// トーストキュー
#[derive(Debug, Clone)]
pub struct ToastQueue {
    ttl: Duration,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// デフォルトの表示時間（3秒）でキューを作成
    pub fn new() -> Self {
        Self::with_ttl_ms(DEFAULT_TOAST_TTL_MS)
    }

    /// 表示時間を指定してキューを作成
    pub fn with_ttl_ms(ttl_ms: i64) -> Self {
        Self {
            ttl: Duration::milliseconds(ttl_ms),
            toasts: Vec::new(),
        }
    }

    /// トーストを追加し、IDを返す
    pub fn push(&mut self, message: impl Into<String>, now: DateTime<Utc>) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            message: message.into(),
            created_at: now,
            expires_at: now + self.ttl,
        });
        id
    }

    /// 失効したトーストを取り除き、削除数を返す
    pub fn sweep(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        before - self.toasts.len()
    }

    /// 表示中のトースト一覧
    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    /// 表示中のトースト数
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// キューが空か
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}
