//! 账户模块
//!
//! 单账户余额管理：构造校验、入金/出金、两阶段变更通知。

pub mod bank_account;

pub use bank_account::{AccountSnapshot, BankAccount};
