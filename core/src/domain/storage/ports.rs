use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Flat key-value storage holding JSON documents
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Delete the value stored under `key`, if any
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), CoreError>> + Send;
}
