use async_trait::async_trait;

/// Connectivity check against the relational store.
///
/// Implementations swallow every failure (timeout, auth, network) and report
/// `false`; they never return an error.
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn is_reachable(&self) -> bool;
}
