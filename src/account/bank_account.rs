//! 银行账户核心
//!
//! 设计原则：
//! 1. 操作前全量校验 - 校验失败不产生任何状态变更与通知
//! 2. 两阶段通知 - 变更前推送 changing，变更后推送 changed，均为同步
//! 3. 余额不变量 - 构造及每次变更后 `balance >= 0`

use crate::notification::{
    BalanceChangedNotify, BalanceChangingNotify, SubscriberId, SubscriberRegistry,
};
use crate::utils::config::AccountLimits;
use crate::{BankError, Result};
use serde::{Deserialize, Serialize};

/// 银行账户
///
/// 账号在构造时校验且此后不可变；余额仅通过 [`deposit`](Self::deposit) /
/// [`withdraw`](Self::withdraw) 变更。每次成功变更依次触发：
///
/// 1. 变更前通知（[`BalanceChangingNotify`]）
/// 2. 余额变更
/// 3. 变更后通知（[`BalanceChangedNotify`]）
///
/// 同一实例假定同一时刻只有一个逻辑调用方；多线程共享时由外层加锁
/// （如 `Arc<RwLock<BankAccount>>`），接口本身不变。
pub struct BankAccount {
    /// 账号（构造后不可变）
    account_number: i64,

    /// 当前余额
    balance: f64,

    /// 变更前通知订阅表
    changing_subscribers: SubscriberRegistry<BalanceChangingNotify>,

    /// 变更后通知订阅表
    changed_subscribers: SubscriberRegistry<BalanceChangedNotify>,
}

/// 账户快照（只读视图，可序列化）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub account_number: i64,
    pub balance: f64,

    /// 时间戳（纳秒）
    pub timestamp: i64,
}

impl BankAccount {
    /// 开户（使用默认账号区间）
    ///
    /// # 参数
    /// - `account_number`: 账号，必须落在 [`AccountLimits::default`] 区间内
    /// - `initial_balance`: 初始余额，必须非负
    ///
    /// # 返回
    /// - `Err(BankError::InvalidAccountNumber)`: 账号越界
    /// - `Err(BankError::InvalidBalance)`: 初始余额为负
    pub fn new(account_number: i64, initial_balance: f64) -> Result<Self> {
        Self::with_limits(account_number, initial_balance, &AccountLimits::default())
    }

    /// 开户（使用指定账号区间，区间来自配置）
    pub fn with_limits(
        account_number: i64,
        initial_balance: f64,
        limits: &AccountLimits,
    ) -> Result<Self> {
        if !limits.contains(account_number) {
            return Err(BankError::InvalidAccountNumber);
        }

        if initial_balance < 0.0 {
            return Err(BankError::InvalidBalance);
        }

        log::info!(
            "Account opened: account={}, balance={}",
            account_number,
            initial_balance
        );

        Ok(Self {
            account_number,
            balance: initial_balance,
            changing_subscribers: SubscriberRegistry::new(),
            changed_subscribers: SubscriberRegistry::new(),
        })
    }

    /// 账号
    pub fn account_number(&self) -> i64 {
        self.account_number
    }

    /// 当前余额（最近一次完成变更后的值）
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// 账户快照
    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            account_number: self.account_number,
            balance: self.balance,
            timestamp: chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0),
        }
    }

    /// 入金
    ///
    /// # 参数
    /// - `amount`: 入金金额，必须大于 0
    ///
    /// # 返回
    /// - `Err(BankError::InvalidDepositAmount)`: 金额非正，余额不变，不触发通知
    pub fn deposit(&mut self, amount: f64) -> Result<()> {
        if amount <= 0.0 {
            return Err(BankError::InvalidDepositAmount);
        }

        self.apply(self.balance + amount);

        log::info!(
            "Deposit: account={}, amount={}, balance={}",
            self.account_number,
            amount,
            self.balance
        );
        Ok(())
    }

    /// 出金
    ///
    /// 允许将余额提取至恰好为 0（边界取闭区间）。
    ///
    /// # 参数
    /// - `amount`: 出金金额，必须大于 0 且不超过当前余额
    ///
    /// # 返回
    /// - `Err(BankError::InvalidWithdrawalAmount)`: 金额非正或超出余额，
    ///   余额不变，不触发通知
    pub fn withdraw(&mut self, amount: f64) -> Result<()> {
        if amount <= 0.0 || amount > self.balance {
            return Err(BankError::InvalidWithdrawalAmount);
        }

        self.apply(self.balance - amount);

        log::info!(
            "Withdraw: account={}, amount={}, balance={}",
            self.account_number,
            amount,
            self.balance
        );
        Ok(())
    }

    /// 执行余额变更的三个步骤：变更前通知 → 变更 → 变更后通知
    ///
    /// 调用前必须已完成全部校验。
    fn apply(&mut self, next_balance: f64) {
        let changing =
            BalanceChangingNotify::new(self.account_number, self.balance, next_balance);
        self.changing_subscribers.notify(&changing);

        let previous_balance = self.balance;
        self.balance = next_balance;

        let changed =
            BalanceChangedNotify::new(self.account_number, previous_balance, self.balance);
        self.changed_subscribers.notify(&changed);
    }

    // ------------------------------------------------------------------
    // 订阅接口
    // ------------------------------------------------------------------

    /// 订阅变更前通知
    pub fn on_balance_changing<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut(&BalanceChangingNotify) + Send + 'static,
    {
        self.changing_subscribers.subscribe(callback)
    }

    /// 订阅变更后通知
    pub fn on_balance_changed<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut(&BalanceChangedNotify) + Send + 'static,
    {
        self.changed_subscribers.subscribe(callback)
    }

    /// 取消变更前订阅
    pub fn unsubscribe_changing(&mut self, id: SubscriberId) -> bool {
        self.changing_subscribers.unsubscribe(id)
    }

    /// 取消变更后订阅
    pub fn unsubscribe_changed(&mut self, id: SubscriberId) -> bool {
        self.changed_subscribers.unsubscribe(id)
    }
}

impl std::fmt::Debug for BankAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BankAccount")
            .field("account_number", &self.account_number)
            .field("balance", &self.balance)
            .field("changing_subscribers", &self.changing_subscribers.len())
            .field("changed_subscribers", &self.changed_subscribers.len())
            .finish()
    }
}
