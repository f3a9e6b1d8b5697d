//! Which side of a fork the current process is on.

use nix::unistd::{self, ForkResult, Pid};

use crate::error::ForkError;

/// Outcome of a successful duplication, as seen by one process image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The original process, holding the new child's pid.
    Parent { child: Pid },
    /// The new process.
    Child,
}

impl From<ForkResult> for Role {
    fn from(result: ForkResult) -> Self {
        match result {
            ForkResult::Parent { child } => Self::Parent { child },
            ForkResult::Child => Self::Child,
        }
    }
}

impl Role {
    /// Whether this image is the original process.
    pub fn is_parent(&self) -> bool {
        matches!(self, Self::Parent { .. })
    }

    /// The line this image prints, using its real pid.
    pub fn announce(self) -> String {
        announcement(self, unistd::getpid())
    }
}

/// Format the role-specific line for a process whose own pid is `own`.
pub fn announcement(role: Role, own: Pid) -> String {
    match role {
        Role::Parent { child } => format!("I am parent, child pid : {child}"),
        Role::Child => format!("My pid : {own}"),
    }
}

/// Duplicate the current process.
///
/// Both the parent and the child return from this call; the returned
/// [`Role`] tells them apart.
///
/// # Safety
///
/// The caller must be single-threaded. In a multi-threaded process the child
/// may only call async-signal-safe functions until it execs, which the rest
/// of this crate does not respect.
pub unsafe fn duplicate() -> Result<Role, ForkError> {
    unistd::fork().map(Role::from).map_err(ForkError::Duplicate)
}
