//! `crewbill-engine` — orchestration boundary over the pure validators.
//!
//! The domain crates validate against snapshots the caller supplies; this
//! crate is the caller. It fetches snapshots through [`store::StaffingStore`],
//! runs the rule sets, serializes writes per employee to close the
//! validate-then-write race, and assigns invoice numbers from the per-day
//! count. Persistence itself stays behind the store trait; the bundled
//! [`memory::MemoryStore`] is for tests and embedding.

pub mod engine;
pub mod locks;
pub mod memory;
pub mod store;

pub use engine::{Engine, EngineError, InvoiceUpdate};
pub use locks::EmployeeLocks;
pub use memory::MemoryStore;
pub use store::{NewInvoice, StaffingStore};
