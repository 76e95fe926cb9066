mod action_factory;
mod writer_factory;

pub use action_factory::{Action, ActionFactory, ActionKind, ActionOutcome, ActionSettings};
pub use writer_factory::WriterFactory;
