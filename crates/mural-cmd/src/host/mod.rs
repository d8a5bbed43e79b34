//! The host command fabric the engine registers into.
//!
//! This is the consumed side of the boundary: a literal-node tree, a
//! dispatcher that matches raw input against it, the name-keyed command
//! map whose registration bookkeeping the fixup pass later corrects, and
//! the scheduler used to defer that pass by one tick. Token splitting is
//! deliberately trivial; the engine adds everything typed on top.

mod dispatcher;
mod scheduler;
mod tree;

pub use self::dispatcher::{CommandMap, Dispatcher};
pub use self::scheduler::{Scheduler, Task, TickQueue};
pub use self::tree::{Node, NodeExecutor, Requirement};
