//! Chain traversal: the cursor, its dispatch step, and pipeline assembly.
//!
//! A request walks an ordered interceptor sequence one step at a time. Each
//! step gets its own immutable cursor snapshot; forwarding builds the next
//! snapshot rather than mutating the current one, and any interceptor may
//! end the walk by returning instead of forwarding.
//!
//! # Modules
//!
//! - `cursor`: the (sequence, index, request) snapshot and its
//!   advance-or-terminate step
//! - `pipeline`: ordered assembly and the top-level run entry point

pub mod cursor;
pub mod pipeline;

pub use cursor::InterceptorChain;
pub use pipeline::Pipeline;
