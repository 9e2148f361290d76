//! Deal progression service - core business logic

use std::sync::Arc;

use chrono::Utc;
use fathom_domain::{Deal, DealStage, FathomError, Result};
use tracing::{info, warn};
use uuid::Uuid;

use super::gate::StageGate;
use super::ports::DealRepository;

/// Deal progression service
///
/// Thin orchestration over [`StageGate`]: load the deal, gate the move,
/// persist, return the updated record. The write completes before the
/// result is reported, so callers never render a stage the backend has not
/// accepted.
pub struct DealService {
    repository: Arc<dyn DealRepository>,
}

impl DealService {
    /// Create a new deal service
    pub fn new(repository: Arc<dyn DealRepository>) -> Self {
        Self { repository }
    }

    /// Advance the deal to its single linear successor.
    pub async fn advance(&self, id: Uuid) -> Result<Deal> {
        let deal = self.repository.get_deal(id).await?;
        let target = deal.stage.next().ok_or_else(|| FathomError::InvalidTransition {
            from: deal.stage,
            to: deal.stage,
            missing: Vec::new(),
        })?;
        self.apply_move(deal, target).await
    }

    /// Move the deal to an arbitrary target stage, subject to the gate.
    pub async fn move_to(&self, id: Uuid, target: DealStage) -> Result<Deal> {
        let deal = self.repository.get_deal(id).await?;
        self.apply_move(deal, target).await
    }

    async fn apply_move(&self, mut deal: Deal, target: DealStage) -> Result<Deal> {
        if let Err(err) = StageGate::check_transition(&deal, target) {
            warn!(deal_id = %deal.id, from = %deal.stage, to = %target, "stage move refused");
            return Err(err);
        }

        deal.stage = target;
        deal.updated_at = Utc::now();
        self.repository.save_deal(&deal).await?;

        info!(deal_id = %deal.id, stage = %deal.stage, "deal stage updated");
        Ok(deal)
    }
}
