//! Execution options

/// Options for running a program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Abort after this many executed commands (default: unlimited).
    ///
    /// Programs that loop forever through `goto` are valid; this is the
    /// caller's way of bounding them.
    pub step_limit: Option<u64>,
}

impl RunOptions {
    /// Options with a step limit
    pub fn with_step_limit(limit: u64) -> Self {
        Self {
            step_limit: Some(limit),
        }
    }
}
