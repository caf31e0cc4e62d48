use crate::error::AppError;
use crate::models::{ClassificationResult, ErrorResult, ScanMode};

/// What kind of request is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Waste(ScanMode),
    Product,
}

/// Identifies one submission; results carrying an outdated ticket are dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum ScanState {
    Idle,
    Submitting { kind: RequestKind, ticket: Ticket },
    Resolved(ClassificationResult),
    Failed(ErrorResult),
}

impl ScanState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, ScanState::Submitting { .. })
    }
}

/// Request lifecycle of the scan screen
///
/// Idle/Resolved/Failed --begin--> Submitting --complete--> Resolved | Failed.
/// `reset` returns to Idle from anywhere and orphans the outstanding ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanMachine {
    state: ScanState,
    next_ticket: u64,
}

impl Default for ScanMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanMachine {
    pub fn new() -> Self {
        Self {
            state: ScanState::Idle,
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Starts a submission, refusing while another one is pending
    pub fn begin(&mut self, kind: RequestKind) -> Result<Ticket, AppError> {
        if self.state.is_submitting() {
            log::debug!("Ignoring {:?} submission, request already pending", kind);
            return Err(AppError::Busy);
        }
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.state = ScanState::Submitting { kind, ticket };
        Ok(ticket)
    }

    /// Stores the outcome of `ticket`'s request; returns false when it was stale
    pub fn complete(&mut self, ticket: Ticket, result: ClassificationResult) -> bool {
        match self.state {
            ScanState::Submitting { ticket: current, .. } if current == ticket => {
                self.state = match result {
                    ClassificationResult::Error(e) => ScanState::Failed(e),
                    other => ScanState::Resolved(other),
                };
                true
            }
            _ => {
                log::debug!("Dropping stale result for {:?}", ticket);
                false
            }
        }
    }

    /// Whether `ticket` is the submission currently in flight
    pub fn is_pending(&self, ticket: Ticket) -> bool {
        matches!(self.state, ScanState::Submitting { ticket: current, .. } if current == ticket)
    }

    /// Fails the pending request without going through the network, e.g. when
    /// the picked image cannot be encoded
    pub fn abort(&mut self, ticket: Ticket, error: AppError) -> bool {
        self.complete(ticket, error.into())
    }

    pub fn reset(&mut self) {
        self.state = ScanState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SimpleWaste, SimpleWasteKind};

    fn simple() -> ClassificationResult {
        ClassificationResult::SimpleWaste(SimpleWaste {
            waste_type: SimpleWasteKind::Landfill,
            confidence: 0.6,
            tips: vec![],
        })
    }

    #[test]
    fn test_happy_path() {
        let mut machine = ScanMachine::new();
        let ticket = machine.begin(RequestKind::Waste(ScanMode::Simple)).unwrap();
        assert!(machine.state().is_submitting());
        assert!(machine.complete(ticket, simple()));
        assert_eq!(machine.state(), &ScanState::Resolved(simple()));
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut machine = ScanMachine::new();
        let first = machine.begin(RequestKind::Product).unwrap();
        assert!(matches!(
            machine.begin(RequestKind::Product),
            Err(AppError::Busy)
        ));
        // the original request is still the one being tracked
        assert!(machine.complete(first, simple()));
    }

    #[test]
    fn test_error_result_lands_in_failed_and_is_resubmittable() {
        let mut machine = ScanMachine::new();
        let ticket = machine.begin(RequestKind::Product).unwrap();
        machine.complete(ticket, ClassificationResult::Error(ErrorResult::new("boom")));
        assert_eq!(machine.state(), &ScanState::Failed(ErrorResult::new("boom")));
        assert!(machine.begin(RequestKind::Product).is_ok());
    }

    #[test]
    fn test_stale_result_after_reset_is_dropped() {
        let mut machine = ScanMachine::new();
        let old = machine.begin(RequestKind::Waste(ScanMode::Advanced)).unwrap();
        machine.reset();
        assert!(!machine.complete(old, simple()));
        assert_eq!(machine.state(), &ScanState::Idle);

        let new = machine.begin(RequestKind::Waste(ScanMode::Advanced)).unwrap();
        assert_ne!(old, new);
        assert!(!machine.complete(old, simple()));
        assert!(machine.state().is_submitting());
        assert!(machine.complete(new, simple()));
    }

    #[test]
    fn test_is_pending_tracks_current_ticket() {
        let mut machine = ScanMachine::new();
        let old = machine.begin(RequestKind::Product).unwrap();
        assert!(machine.is_pending(old));
        machine.reset();
        assert!(!machine.is_pending(old));

        let new = machine.begin(RequestKind::Product).unwrap();
        assert!(machine.is_pending(new));
        machine.complete(new, simple());
        assert!(!machine.is_pending(new));
    }

    #[test]
    fn test_abort_records_local_failure() {
        let mut machine = ScanMachine::new();
        let ticket = machine.begin(RequestKind::Waste(ScanMode::Simple)).unwrap();
        machine.abort(ticket, AppError::ImageProcessing("truncated jpeg".into()));
        match machine.state() {
            ScanState::Failed(e) => assert_eq!(e.message, "Error processing image."),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_complete_without_submission_is_ignored() {
        let mut machine = ScanMachine::new();
        let ticket = machine.begin(RequestKind::Product).unwrap();
        machine.complete(ticket, simple());
        assert!(!machine.complete(ticket, simple()));
    }
}
