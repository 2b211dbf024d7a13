//! 通知消息系统
//!
//! 提供余额变更的两阶段通知功能：
//! - 消息定义和序列化（message）
//! - 订阅注册与同步分发（registry）
//!
//! # 架构
//!
//! ```text
//! BankAccount (deposit/withdraw)
//!         ↓ 变更前
//! SubscriberRegistry<BalanceChangingNotify>
//!         ↓ 余额变更
//!         ↓ 变更后
//! SubscriberRegistry<BalanceChangedNotify>
//! ```
//!
//! # 示例
//!
//! ```rust
//! use qabank::BankAccount;
//!
//! let mut account = BankAccount::new(1_000_007, 0.0).unwrap();
//!
//! account.on_balance_changing(|n| {
//!     println!("changing: {} -> {}", n.current_balance, n.next_balance);
//! });
//! account.on_balance_changed(|n| {
//!     println!("changed: {} -> {}", n.previous_balance, n.current_balance);
//! });
//!
//! account.deposit(1452.25).unwrap();
//! assert_eq!(account.balance(), 1452.25);
//! ```

pub mod message;
pub mod registry;

// 导出核心类型
pub use message::{BalanceChangedNotify, BalanceChangingNotify, NotificationType};
pub use registry::{SubscriberId, SubscriberRegistry};
