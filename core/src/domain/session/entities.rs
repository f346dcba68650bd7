use crate::domain::common::entities::app_errors::CoreError;

pub const PLAN_FAILURE_NOTICE: &str = "AI Strategist is busy. Let's try again.";
pub const SCAN_FAILURE_NOTICE: &str = "Scan unsuccessful. Please add manually.";
pub const CAMERA_FAILURE_NOTICE: &str = "Camera access required for scanning.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Plan,
    Swaps,
    Scan,
}

/// Identifies one outstanding collaborator request. Results carrying a
/// ticket that is no longer current are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    kind: RequestKind,
    id: u64,
}

impl RequestTicket {
    pub fn kind(&self) -> RequestKind {
        self.kind
    }
}

/// At most one current ticket per request kind.
#[derive(Debug, Default)]
pub struct PendingRequests {
    next_id: u64,
    plan: Option<u64>,
    swaps: Option<u64>,
    scan: Option<u64>,
}

impl PendingRequests {
    fn slot(&mut self, kind: RequestKind) -> &mut Option<u64> {
        match kind {
            RequestKind::Plan => &mut self.plan,
            RequestKind::Swaps => &mut self.swaps,
            RequestKind::Scan => &mut self.scan,
        }
    }

    /// Issues a new ticket, superseding any outstanding one of the same kind.
    pub fn issue(&mut self, kind: RequestKind) -> RequestTicket {
        self.next_id += 1;
        let id = self.next_id;
        *self.slot(kind) = Some(id);
        RequestTicket { kind, id }
    }

    pub fn is_pending(&self, kind: RequestKind) -> bool {
        match kind {
            RequestKind::Plan => self.plan.is_some(),
            RequestKind::Swaps => self.swaps.is_some(),
            RequestKind::Scan => self.scan.is_some(),
        }
    }

    /// Clears the ticket if it is current. Returns whether it was.
    pub fn settle(&mut self, ticket: RequestTicket) -> bool {
        let slot = self.slot(ticket.kind);
        if *slot == Some(ticket.id) {
            *slot = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self, kind: RequestKind) -> bool {
        self.slot(kind).take().is_some()
    }

    pub fn cancel_all(&mut self) {
        self.plan = None;
        self.swaps = None;
        self.scan = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStatus {
    Idle,
    Requesting,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOutcome {
    Applied,
    /// The previous state was kept and a notice was raised
    Failed(CoreError),
    /// The ticket was cancelled or superseded before the result arrived
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Detected(usize),
    Failed(CoreError),
    Discarded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let mut pending = PendingRequests::default();
        let first = pending.issue(RequestKind::Plan);
        let second = pending.issue(RequestKind::Plan);

        assert!(!pending.settle(first));
        assert!(pending.is_pending(RequestKind::Plan));
        assert!(pending.settle(second));
        assert!(!pending.is_pending(RequestKind::Plan));
        assert!(!pending.settle(second));
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut pending = PendingRequests::default();
        let plan = pending.issue(RequestKind::Plan);
        let scan = pending.issue(RequestKind::Scan);

        assert!(pending.cancel(RequestKind::Scan));
        assert!(!pending.settle(scan));
        assert!(pending.settle(plan));
    }

    #[test]
    fn test_cancel_all() {
        let mut pending = PendingRequests::default();
        let swaps = pending.issue(RequestKind::Swaps);
        pending.cancel_all();
        assert!(!pending.settle(swaps));
        assert_eq!(swaps.kind(), RequestKind::Swaps);
    }
}
