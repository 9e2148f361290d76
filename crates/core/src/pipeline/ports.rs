//! Port interfaces for deal persistence

use async_trait::async_trait;
use fathom_domain::{Deal, Result};
use uuid::Uuid;

/// Trait for persisting deals
///
/// The hosted database behind this port is the source of truth for a
/// deal's stage; the gate only ever reasons over the snapshot it is given.
#[async_trait]
pub trait DealRepository: Send + Sync {
    /// Fetch a deal by id
    async fn get_deal(&self, id: Uuid) -> Result<Deal>;

    /// Persist a deal
    async fn save_deal(&self, deal: &Deal) -> Result<()>;
}
