//! What happens after a FATAL record has been written

use std::fmt;
use std::sync::Arc;

/// Exit status used when a fatal record terminates the process.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Callback run in place of process termination.
pub type FatalHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone, Default)]
pub enum FatalPolicy {
    /// Terminate the process with [`FATAL_EXIT_CODE`].
    ///
    /// Other in-flight log writes may be lost.
    #[default]
    Exit,
    /// Run the hook and keep the process alive.
    Hook(FatalHook),
}

impl FatalPolicy {
    pub fn from_hook(hook: Option<FatalHook>) -> Self {
        hook.map_or(FatalPolicy::Exit, FatalPolicy::Hook)
    }

    /// Apply the policy. Does not return under [`FatalPolicy::Exit`].
    pub fn apply(&self) {
        match self {
            FatalPolicy::Hook(hook) => hook(),
            FatalPolicy::Exit => std::process::exit(FATAL_EXIT_CODE),
        }
    }

    pub fn has_hook(&self) -> bool {
        matches!(self, FatalPolicy::Hook(_))
    }
}

impl fmt::Debug for FatalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatalPolicy::Exit => f.write_str("Exit"),
            FatalPolicy::Hook(_) => f.write_str("Hook(..)"),
        }
    }
}
