use std::sync::Arc;

use crate::dictionary::DefinitionSource;

/// How words of one batch are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupMode {
    /// One word at a time, in order
    #[default]
    Sequential,
    /// Up to `max_in_flight` words at once, results joined back in order
    Parallel { max_in_flight: usize },
}

impl LookupMode {
    /// `Sequential` for 0 or 1, `Parallel` otherwise
    pub fn with_max_in_flight(max_in_flight: usize) -> Self {
        if max_in_flight <= 1 {
            LookupMode::Sequential
        } else {
            LookupMode::Parallel { max_in_flight }
        }
    }
}

/// Everything one extraction call needs, passed in by the caller
#[derive(Clone)]
pub struct LookupContext {
    pub source: Arc<dyn DefinitionSource>,
    pub mode: LookupMode,
}

impl LookupContext {
    pub fn new(source: Arc<dyn DefinitionSource>) -> Self {
        Self {
            source,
            mode: LookupMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: LookupMode) -> Self {
        self.mode = mode;
        self
    }
}
