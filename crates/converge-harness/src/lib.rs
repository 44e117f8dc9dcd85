//! Converge dry-run harness
//!
//! Runs a convergence pass in which every resource action is intercepted and
//! recorded instead of performed, then answers "was a resource of type T named
//! N declared with action A?" without ever touching the host:
//! - `RecordingStore`: ordered records of the most recent pass
//! - `RecordingExecutor`: the interception layer, an [`ActionExecutor`] that
//!   appends snapshots instead of dispatching to providers
//! - `DryRunHarness`: construct, converge, query
//!
//! Interception is instance-scoped: each harness owns its store and injects a
//! fresh executor into the engine per pass, so multiple harnesses coexist in
//! one process and nothing global is ever patched.
//!
//! [`ActionExecutor`]: converge_engine::ActionExecutor
//!
//! ```no_run
//! use converge_harness::DryRunHarness;
//!
//! let mut harness = DryRunHarness::new("fixtures/model")?;
//! harness.converge(["base"])?;
//!
//! let dir = harness.directory("/var/app").expect("directory not declared");
//! assert_eq!(dir.action.as_str(), "create");
//! # Ok::<(), converge_harness::HarnessError>(())
//! ```

pub mod error;
pub mod executor;
pub mod harness;
pub mod store;

pub use error::{HarnessError, Result};
pub use executor::RecordingExecutor;
pub use harness::{ConvergeSummary, DryRunHarness};
pub use store::{RecordedResource, RecordingStore};

/// Converge harness version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
