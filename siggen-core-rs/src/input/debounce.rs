/// Refractory-window filter for one input source.
///
/// An edge is accepted only if at least `refractory_us` has passed since the
/// previously accepted edge; anything sooner is dropped outright (never
/// queued). The first edge is always accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceGate {
    refractory_us: u64,
    last_accepted_us: Option<u64>,
}

impl DebounceGate {
    pub const fn from_millis(refractory_ms: u32) -> Self {
        Self {
            refractory_us: refractory_ms as u64 * 1000,
            last_accepted_us: None,
        }
    }

    pub fn refractory_us(&self) -> u64 {
        self.refractory_us
    }

    /// Decide whether an edge at `now_us` passes the gate.
    ///
    /// On acceptance the window restarts at `now_us`.
    pub fn try_accept(&mut self, now_us: u64) -> bool {
        if let Some(last) = self.last_accepted_us {
            if now_us.saturating_sub(last) < self.refractory_us {
                return false;
            }
        }
        self.last_accepted_us = Some(now_us);
        true
    }
}
