use rand::{distributions::Alphanumeric, Rng};
use uuid::Uuid;

/// Produces a unique identifier for a record, given the prefix configured for
/// its entity.
///
/// Implementations must be collision resistant without coordination: the
/// generator is called concurrently from independent writes.
pub trait IdGenerator: Send + Sync + 'static {
    fn generate(&self, prefix: &str) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    fn generate(&self, prefix: &str) -> String {
        self(prefix)
    }
}

/// Generates `{prefix}_{suffix}` with a random alphanumeric suffix.
///
/// The default suffix of 24 characters carries roughly 142 bits of entropy.
#[derive(Debug, Clone, Copy)]
pub struct RandomId {
    len: usize,
}

impl RandomId {
    pub const DEFAULT_LEN: usize = 24;

    pub fn new() -> RandomId {
        RandomId::with_len(RandomId::DEFAULT_LEN)
    }

    /// Uses a suffix of `len` characters.
    pub fn with_len(len: usize) -> RandomId {
        RandomId { len }
    }

    pub fn suffix_len(&self) -> usize {
        self.len
    }
}

impl Default for RandomId {
    fn default() -> RandomId {
        RandomId::new()
    }
}

impl IdGenerator for RandomId {
    fn generate(&self, prefix: &str) -> String {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.len)
            .map(char::from)
            .collect();
        format!("{prefix}_{suffix}")
    }
}

/// Generates `{prefix}_{uuid}` with a random (v4) UUID in its 32 character
/// hex form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidId;

impl IdGenerator for UuidId {
    fn generate(&self, prefix: &str) -> String {
        format!("{prefix}_{}", Uuid::new_v4().simple())
    }
}
