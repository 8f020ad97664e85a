use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::models::slot::{CandidateSlot, ReservedSlot};
use crate::domain::ports::Clock;
use crate::domain::services::availability::AvailabilityIndex;
use crate::domain::services::validation::{validate_slot, SlotRejection};

/// Progress of one booking interaction, from merchant pick to a committed
/// slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    NoMerchantSelected,
    MerchantSelected,
    CandidateChosen,
    Completed,
}

/// Owning context for the booking state machine.
///
/// Holds the per-merchant reserved mapping, the availability index of the
/// selected merchant and the candidate slot currently held, if any. Every
/// transition runs to completion within one interaction turn. Switching
/// merchants always discards the candidate: a slot validated against merchant
/// A must never be committed against merchant B.
pub struct BookingFlow {
    reserved: HashMap<String, Vec<ReservedSlot>>,
    clock: Arc<dyn Clock>,
    merchant_id: Option<String>,
    index: AvailabilityIndex,
    candidate: Option<CandidateSlot>,
    completed: bool,
}

impl BookingFlow {
    pub fn new(reserved: HashMap<String, Vec<ReservedSlot>>, clock: Arc<dyn Clock>) -> Self {
        Self {
            reserved,
            clock,
            merchant_id: None,
            index: AvailabilityIndex::default(),
            candidate: None,
            completed: false,
        }
    }

    pub fn state(&self) -> FlowState {
        if self.completed {
            FlowState::Completed
        } else if self.candidate.is_some() {
            FlowState::CandidateChosen
        } else if self.merchant_id.is_some() {
            FlowState::MerchantSelected
        } else {
            FlowState::NoMerchantSelected
        }
    }

    pub fn merchant_id(&self) -> Option<&str> {
        self.merchant_id.as_deref()
    }

    pub fn availability(&self) -> &AvailabilityIndex {
        &self.index
    }

    pub fn candidate(&self) -> Option<&CandidateSlot> {
        self.candidate.as_ref()
    }

    /// Selects the merchant whose calendar is being booked against and
    /// rebuilds the availability index. Any held candidate is discarded, even
    /// when the new merchant would have accepted it. Selecting after a
    /// completed booking begins a fresh session.
    pub fn select_merchant(&mut self, merchant_id: &str) {
        self.candidate = None;
        self.completed = false;
        self.index = AvailabilityIndex::build(&self.reserved, Some(merchant_id));
        self.merchant_id = Some(merchant_id.to_string());
        info!("Merchant selected: {}", merchant_id);
    }

    /// Validates a user-picked timestamp against the selected merchant. On
    /// accept the candidate is retained; on reject it is discarded and the
    /// flow stays on the merchant, waiting for a different pick.
    ///
    /// Picks made before any merchant is selected are ignored; the picker
    /// control is disabled in that state.
    pub fn pick_slot(&mut self, starts_at: NaiveDateTime) -> Result<(), SlotRejection> {
        let merchant_id = match self.merchant_id.as_deref() {
            Some(id) => id.to_string(),
            None => {
                warn!("Slot pick ignored: no merchant selected");
                return Ok(());
            }
        };

        self.candidate = None;
        validate_slot(starts_at, self.clock.now(), &self.index)?;

        info!("Slot accepted: {} for merchant {}", starts_at, merchant_id);
        self.candidate = Some(CandidateSlot {
            merchant_id,
            starts_at,
        });
        Ok(())
    }

    /// Hands the accepted candidate to the downstream submission layer and
    /// moves the flow to its terminal state. Returns `None` when no candidate
    /// is held, leaving the flow unchanged.
    pub fn complete(&mut self) -> Option<CandidateSlot> {
        let candidate = self.candidate.take()?;
        self.completed = true;
        info!(
            "Booking flow completed: {} for merchant {}",
            candidate.starts_at, candidate.merchant_id
        );
        Some(candidate)
    }
}
