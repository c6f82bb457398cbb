use std::cell::RefCell;

use crate::error::{ChannelBumpError, Result};
use crate::updater::{CommandRunner, Invocation};

/// Runner for testing without spawning processes
///
/// Records every invocation it receives. When built with
/// [`failing_on`](Self::failing_on), invocations of that program are
/// recorded and then reported as failed.
pub struct RecordingRunner {
    invocations: RefCell<Vec<Invocation>>,
    fail_program: Option<String>,
}

impl RecordingRunner {
    /// Create a runner where every invocation succeeds
    pub fn new() -> Self {
        RecordingRunner {
            invocations: RefCell::new(Vec::new()),
            fail_program: None,
        }
    }

    /// Create a runner that fails invocations of `program`
    pub fn failing_on(program: impl Into<String>) -> Self {
        RecordingRunner {
            invocations: RefCell::new(Vec::new()),
            fail_program: Some(program.into()),
        }
    }

    /// Invocations received so far, in order
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }
}

impl Default for RecordingRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        self.invocations.borrow_mut().push(invocation.clone());
        match &self.fail_program {
            Some(program) if *program == invocation.program => Err(ChannelBumpError::update(
                format!("{} failed with exit code 1", invocation),
            )),
            _ => Ok(()),
        }
    }
}
