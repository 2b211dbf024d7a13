//! 配置管理模块

use crate::{BankError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 银行账户配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankConfig {
    #[serde(default)]
    pub account: AccountLimits,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            account: AccountLimits::default(),
        }
    }
}

/// 账号限制配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountLimits {
    /// 最小合法账号（含）
    #[serde(default = "default_min_account_number")]
    pub min_account_number: i64,

    /// 最大合法账号（含）
    #[serde(default = "default_max_account_number")]
    pub max_account_number: i64,
}

impl Default for AccountLimits {
    fn default() -> Self {
        Self {
            min_account_number: 1_000_001,
            max_account_number: 10_000_000,
        }
    }
}

impl AccountLimits {
    /// 账号是否落在合法区间内（闭区间）
    pub fn contains(&self, account_number: i64) -> bool {
        account_number >= self.min_account_number && account_number <= self.max_account_number
    }
}

// 默认值函数
fn default_min_account_number() -> i64 {
    1_000_001
}
fn default_max_account_number() -> i64 {
    10_000_000
}

impl BankConfig {
    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| BankError::ConfigError(format!("Failed to read config file: {}", e)))?;
        toml::from_str(&content)
            .map_err(|e| BankError::ConfigError(format!("Failed to parse config file: {}", e)))
    }

    /// 加载默认配置文件
    pub fn load_default() -> Result<Self> {
        Self::load_from_file("config/bank.toml")
    }
}
