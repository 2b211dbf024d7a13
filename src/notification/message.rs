//! 通知消息结构定义
//!
//! 设计原则：
//! 1. 类型安全 - 每个通知阶段有独立的强类型负载
//! 2. 高效序列化 - serde 零成本序列化（snake_case 字段名）
//! 3. 负载自描述 - 携带所属账号与纳秒时间戳

use serde::{Deserialize, Serialize};

/// 通知消息类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// 变更前通知（携带当前余额与拟变更后余额）
    BalanceChanging,

    /// 变更后通知（携带变更前余额与当前余额）
    BalanceChanged,
}

impl NotificationType {
    /// 返回类型名称（静态字符串，零分配）
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BalanceChanging => "balance_changing",
            Self::BalanceChanged => "balance_changed",
        }
    }

    /// 返回订阅频道名称
    ///
    /// 两类通知各自独立订阅，互不可见
    pub fn channel(&self) -> &'static str {
        match self {
            Self::BalanceChanging => "changing",
            Self::BalanceChanged => "changed",
        }
    }
}

// ============================================================================
// 余额变更通知
// ============================================================================

/// 余额变更前通知
///
/// 在余额实际变更之前同步推送；此时读取账户余额仍为 `current_balance`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceChangingNotify {
    /// 账号
    pub account_number: i64,

    /// 当前余额
    pub current_balance: f64,

    /// 变更完成后的余额
    pub next_balance: f64,

    /// 时间戳（纳秒）
    pub timestamp: i64,
}

impl BalanceChangingNotify {
    pub fn new(account_number: i64, current_balance: f64, next_balance: f64) -> Self {
        Self {
            account_number,
            current_balance,
            next_balance,
            timestamp: now_nanos(),
        }
    }
}

/// 余额变更后通知
///
/// 在余额实际变更之后同步推送；此时读取账户余额已为 `current_balance`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceChangedNotify {
    /// 账号
    pub account_number: i64,

    /// 变更前余额
    pub previous_balance: f64,

    /// 当前余额
    pub current_balance: f64,

    /// 时间戳（纳秒）
    pub timestamp: i64,
}

impl BalanceChangedNotify {
    pub fn new(account_number: i64, previous_balance: f64, current_balance: f64) -> Self {
        Self {
            account_number,
            previous_balance,
            current_balance,
            timestamp: now_nanos(),
        }
    }
}

/// 当前 UTC 时间戳（纳秒）
fn now_nanos() -> i64 {
    chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0)
}
