//! # QABANK-RS
//!
//! 银行账户核心系统 - 单账户余额管理与变更通知
//!
//! ## 核心能力
//!
//! - **账户管理**: 账号校验/余额校验/只读查询
//! - **资金操作**: 入金（deposit）/出金（withdraw），操作前全量校验
//! - **变更通知**: 两阶段通知协议（changing → 变更 → changed），同步按订阅顺序推送
//! - **配置管理**: 账号区间等限制项通过 TOML 配置（utils/config）
//!
//! ## 架构设计
//!
//! ```text
//! 调用方 (同步调用)
//!     ↓
//! BankAccount (account/)
//!     ↓ 变更前/变更后
//! SubscriberRegistry (notification/)
//!     ↓
//! 订阅回调 (注册顺序依次执行)
//! ```
//!
//! ## 执行模型
//!
//! 所有操作在调用方线程上同步完成；校验失败的操作不产生任何
//! 状态变更，也不触发任何通知。

#![allow(dead_code)]

// ============================================================================
// 外部依赖
// ============================================================================

// 序列化
pub use serde;
pub use serde_json;

// 时间
pub use chrono;

// 日志
pub use log;

// 错误处理
pub use thiserror;

// ============================================================================
// 内部模块
// ============================================================================

/// 账户模块 - 余额管理与两阶段通知
pub mod account;

/// 通知消息系统
pub mod notification;

/// 工具模块
pub mod utils;

// ============================================================================
// 重导出常用类型
// ============================================================================

pub use account::{AccountSnapshot, BankAccount};
pub use notification::{
    BalanceChangedNotify, BalanceChangingNotify, NotificationType, SubscriberId,
    SubscriberRegistry,
};
pub use utils::config::{AccountLimits, BankConfig};

// ============================================================================
// 全局错误类型
// ============================================================================

/// 银行账户错误类型
///
/// 四个校验错误的 Display 文案为对外兼容契约，不可改动。
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("Invalid account number")]
    InvalidAccountNumber,

    #[error("Invalid balance")]
    InvalidBalance,

    #[error("Invalid amount for deposit")]
    InvalidDepositAmount,

    #[error("Invalid amount for withdrawal")]
    InvalidWithdrawalAmount,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, BankError>;

// ============================================================================
// 测试模块
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        // 校验错误文案与行为测试套件保持一致
        assert_eq!(
            BankError::InvalidAccountNumber.to_string(),
            "Invalid account number"
        );
        assert_eq!(BankError::InvalidBalance.to_string(), "Invalid balance");
        assert_eq!(
            BankError::InvalidDepositAmount.to_string(),
            "Invalid amount for deposit"
        );
        assert_eq!(
            BankError::InvalidWithdrawalAmount.to_string(),
            "Invalid amount for withdrawal"
        );
    }
}
