//! 订阅注册表（SubscriberRegistry）
//!
//! 职责：
//! 1. 维护单一频道的订阅回调列表（有序）
//! 2. 订阅时返回句柄，凭句柄取消订阅
//! 3. 按注册顺序同步分发通知
//!
//! 注册表归属于单个账户实例，通过 `&mut self` 访问，无内部锁。

use std::fmt;

/// 订阅句柄（单调递增，注册表内唯一）
pub type SubscriberId = u64;

type Callback<T> = Box<dyn FnMut(&T) + Send>;

/// 单频道订阅注册表
///
/// 回调按注册顺序存储并分发；取消订阅不影响其余回调的相对顺序。
pub struct SubscriberRegistry<T> {
    /// 订阅列表：(句柄, 回调)
    subscribers: Vec<(SubscriberId, Callback<T>)>,

    /// 下一个待分配句柄
    next_id: SubscriberId,
}

impl<T> SubscriberRegistry<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// 订阅通知
    ///
    /// # 参数
    /// - `callback`: 通知回调，同步执行
    ///
    /// # 返回
    /// 订阅句柄，用于取消订阅
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut(&T) + Send + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));

        log::debug!("Subscriber {} registered", id);
        id
    }

    /// 取消订阅
    ///
    /// # 返回
    /// - `true`: 已移除
    /// - `false`: 句柄不存在（或已移除）
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        let removed = self.subscribers.len() < before;

        if removed {
            log::debug!("Subscriber {} unregistered", id);
        }
        removed
    }

    /// 分发通知到所有订阅者（按注册顺序）
    pub fn notify(&mut self, payload: &T) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(payload);
        }
    }

    /// 订阅者数量
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<T> Default for SubscriberRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SubscriberRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberRegistry")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_registry_creation() {
        let registry: SubscriberRegistry<f64> = SubscriberRegistry::new();

        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_subscribe_and_notify() {
        let mut registry: SubscriberRegistry<f64> = SubscriberRegistry::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        registry.subscribe(move |v| received_clone.lock().unwrap().push(*v));

        registry.notify(&42.0);
        registry.notify(&7.5);

        assert_eq!(*received.lock().unwrap(), vec![42.0, 7.5]);
    }

    /// 多订阅者按注册顺序分发
    #[test]
    fn test_notify_in_registration_order() {
        let mut registry: SubscriberRegistry<i64> = SubscriberRegistry::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in 0..3 {
            let order_clone = order.clone();
            registry.subscribe(move |_| order_clone.lock().unwrap().push(tag));
        }

        registry.notify(&0);

        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut registry: SubscriberRegistry<i64> = SubscriberRegistry::new();
        let count = Arc::new(Mutex::new(0));

        let count_clone = count.clone();
        let id = registry.subscribe(move |_| *count_clone.lock().unwrap() += 1);

        registry.notify(&0);
        assert!(registry.unsubscribe(id));
        registry.notify(&0);

        assert_eq!(*count.lock().unwrap(), 1);
        assert!(registry.is_empty());
    }

    /// 取消不存在的句柄
    #[test]
    fn test_unsubscribe_unknown_id() {
        let mut registry: SubscriberRegistry<i64> = SubscriberRegistry::new();

        assert!(!registry.unsubscribe(99));
    }

    /// 重复取消同一句柄
    #[test]
    fn test_unsubscribe_twice() {
        let mut registry: SubscriberRegistry<i64> = SubscriberRegistry::new();
        let id = registry.subscribe(|_| {});

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
    }

    /// 取消中间订阅者，其余顺序不变
    #[test]
    fn test_unsubscribe_preserves_order() {
        let mut registry: SubscriberRegistry<i64> = SubscriberRegistry::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let mut ids = Vec::new();
        for tag in 0..3 {
            let order_clone = order.clone();
            ids.push(registry.subscribe(move |_| order_clone.lock().unwrap().push(tag)));
        }

        registry.unsubscribe(ids[1]);
        registry.notify(&0);

        assert_eq!(*order.lock().unwrap(), vec![0, 2]);
    }

    /// 句柄不复用：取消后新订阅拿到新句柄
    #[test]
    fn test_ids_not_reused() {
        let mut registry: SubscriberRegistry<i64> = SubscriberRegistry::new();

        let id0 = registry.subscribe(|_| {});
        registry.unsubscribe(id0);
        let id1 = registry.subscribe(|_| {});

        assert_ne!(id0, id1);
    }

    /// 无订阅者时分发为空操作
    #[test]
    fn test_notify_without_subscribers() {
        let mut registry: SubscriberRegistry<i64> = SubscriberRegistry::new();

        registry.notify(&0);
    }
}
