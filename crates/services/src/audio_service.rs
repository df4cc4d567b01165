use std::sync::{Arc, Mutex};

/// The single shared audio channel for text-to-speech playback.
///
/// Exactly one widget may hold the channel at a time. Acquiring it
/// preempts whoever held it before (the UI contract is "starting playback
/// stops the previous playback"), so a stale [`AudioLease`] simply stops
/// being active; releasing a stale lease is a no-op. This replaces
/// ambient global audio state with an explicit service object injected at
/// the component tree root.
#[derive(Clone, Default)]
pub struct AudioChannelService {
    inner: Arc<Mutex<ChannelState>>,
}

#[derive(Default)]
struct ChannelState {
    generation: u64,
    owner: Option<String>,
}

/// Proof of holding the audio channel at acquisition time. Check
/// [`AudioChannelService::is_active`] before acting on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioLease {
    generation: u64,
    owner: String,
}

impl AudioLease {
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }
}

impl AudioChannelService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the channel, preempting the previous holder.
    pub fn acquire(&self, owner: impl Into<String>) -> AudioLease {
        let owner = owner.into();
        let mut state = self.lock();
        state.generation += 1;
        state.owner = Some(owner.clone());
        AudioLease {
            generation: state.generation,
            owner,
        }
    }

    /// True while the lease still holds the channel.
    #[must_use]
    pub fn is_active(&self, lease: &AudioLease) -> bool {
        let state = self.lock();
        state.generation == lease.generation && state.owner.is_some()
    }

    /// Give the channel back. Stale leases (already preempted) are ignored.
    pub fn release(&self, lease: &AudioLease) {
        let mut state = self.lock();
        if state.generation == lease.generation {
            state.owner = None;
        }
    }

    /// Who currently holds the channel, if anyone.
    #[must_use]
    pub fn current_owner(&self) -> Option<String> {
        self.lock().owner.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ChannelState> {
        // A poisoned lock means a panic already tore the UI down.
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_preempts_the_previous_holder() {
        let channel = AudioChannelService::new();
        let first = channel.acquire("verse-card-1");
        assert!(channel.is_active(&first));

        let second = channel.acquire("verse-card-2");
        assert!(!channel.is_active(&first));
        assert!(channel.is_active(&second));
        assert_eq!(channel.current_owner().as_deref(), Some("verse-card-2"));
    }

    #[test]
    fn releasing_a_stale_lease_is_a_no_op() {
        let channel = AudioChannelService::new();
        let stale = channel.acquire("a");
        let live = channel.acquire("b");

        channel.release(&stale);
        assert!(channel.is_active(&live));

        channel.release(&live);
        assert!(!channel.is_active(&live));
        assert_eq!(channel.current_owner(), None);
    }
}
