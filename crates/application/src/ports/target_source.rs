use async_trait::async_trait;
use dnsforge_domain::DomainError;
use std::net::Ipv4Addr;

#[async_trait]
pub trait TargetSource: Send + Sync {
    async fn load_targets(&self) -> Result<Vec<Ipv4Addr>, DomainError>;
}
