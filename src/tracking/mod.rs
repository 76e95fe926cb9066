/// Tracking domain - records of the Dependency-Track platform and the
/// policies that decide what to do with them. Pure logic, no I/O.
pub mod domain;
pub mod policies;
