//! 通知消息系统完整示例
//!
//! 演示如何使用银行账户与两阶段通知：
//! 1. 开户并订阅 changing/changed 两个频道
//! 2. 入金/出金触发通知
//! 3. 校验失败的操作不触发通知
//! 4. 取消订阅

use qabank::{BankAccount, BankConfig};
use std::sync::{Arc, Mutex};

fn main() {
    // 初始化日志
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("=== 银行账户通知系统示例 ===");

    // ============================================================================
    // 1. 加载配置并开户
    // ============================================================================
    let config = BankConfig::load_default().unwrap_or_default();
    log::info!(
        "1. 开户 (账号区间 [{}, {}])",
        config.account.min_account_number,
        config.account.max_account_number
    );

    let mut account = match BankAccount::with_limits(1_000_007, 0.0, &config.account) {
        Ok(account) => account,
        Err(e) => {
            log::error!("Failed to open account: {}", e);
            return;
        }
    };

    // ============================================================================
    // 2. 订阅通知
    // ============================================================================
    log::info!("2. 订阅 changing/changed 通知");

    let changing_id = account.on_balance_changing(|n| {
        log::info!(
            "  [changing] current={}, next={}",
            n.current_balance,
            n.next_balance
        );
    });

    let _changed_id = account.on_balance_changed(|n| {
        match serde_json::to_string(n) {
            Ok(json) => log::info!("  [changed] {}", json),
            Err(e) => log::error!("  [changed] serialization failed: {}", e),
        }
    });

    // ============================================================================
    // 3. 入金
    // ============================================================================
    log::info!("3. 入金 1452.25");
    if let Err(e) = account.deposit(1452.25) {
        log::error!("Deposit failed: {}", e);
    }

    // ============================================================================
    // 4. 出金
    // ============================================================================
    log::info!("4. 出金 1000.00");
    if let Err(e) = account.withdraw(1000.0) {
        log::error!("Withdraw failed: {}", e);
    }

    // ============================================================================
    // 5. 校验失败的操作不触发通知
    // ============================================================================
    log::info!("5. 超额出金（预期失败，无通知）");
    let rejected = Arc::new(Mutex::new(0));
    {
        let rejected = rejected.clone();
        account.on_balance_changing(move |_| *rejected.lock().unwrap() += 1);
    }

    match account.withdraw(1_000_000.0) {
        Ok(_) => log::error!("Unexpected success"),
        Err(e) => log::info!("  rejected: {}", e),
    }

    // ============================================================================
    // 6. 取消订阅
    // ============================================================================
    log::info!("6. 取消 changing 订阅后再次入金");
    account.unsubscribe_changing(changing_id);

    if let Err(e) = account.deposit(100.0) {
        log::error!("Deposit failed: {}", e);
    }

    log::info!(
        "=== 结束: {} ===",
        serde_json::to_string(&account.snapshot()).unwrap_or_default()
    );
}
