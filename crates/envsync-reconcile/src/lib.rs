//! Reconciliation of a node agent's container environment.
//!
//! A [`ReconcileStep`] performs one self-contained pass against an injected
//! [`WorkloadGateway`]:
//!
//! 1. read the workload descriptor by its configured key,
//! 2. locate the target container,
//! 3. merge the override list into the container's environment,
//! 4. write the descriptor back (subject to the [`WritePolicy`]).
//!
//! Every failure aborts the pass and is returned as a [`ReconcileError`]
//! that distinguishes fetch, lookup, and write failures. Nothing is retried
//! locally.
//!
//! # Quick Start
//!
//! ```rust
//! use envsync_gateway::InMemoryGateway;
//! use envsync_reconcile::{ReconcileConfig, ReconcileStep};
//! use envsync_types::{Container, EnvEntry, ObjectKey, WorkloadDescriptor};
//!
//! let gateway = InMemoryGateway::with_object(WorkloadDescriptor::new(
//!     ObjectKey::default(),
//!     vec![Container::new("aws-node", vec![])],
//! ));
//! let step = ReconcileStep::new(&gateway, ReconcileConfig::default());
//! let report = step
//!     .reconcile("aws-node", &[EnvEntry::new("WARM_IP_TARGET", "5")])
//!     .unwrap();
//! assert!(report.is_updated());
//! assert_eq!(gateway.writes(), 1);
//! ```
//!
//! [`WorkloadGateway`]: envsync_gateway::WorkloadGateway

pub mod config;
pub mod error;
pub mod report;
pub mod step;

pub use config::{ReconcileConfig, WritePolicy};
pub use error::{ConfigError, ReconcileError, ReconcileResult};
pub use report::{ReconcileOutcome, ReconcileReport};
pub use step::ReconcileStep;
