//! Code generation modules for exemplar.
//!
//! This module contains the generators that turn recorded examples into
//! TypeScript sample code. Each submodule handles one stage of the
//! pipeline.
//!
//! ## Submodules
//!
//! - [`literal`] - Synthesizes literal expressions from typed example values
//! - [`resolve`] - Locates the example value for each formal parameter
//! - [`sample`] - Assembles declarations and the operation call into samples
//!
//! ## Code Generation Flow
//!
//! 1. [`SampleAssembler`] walks an operation's formal parameters
//! 2. Each parameter is located in the example via [`resolve_arguments`]
//! 3. Each located value becomes a literal via [`LiteralSynthesizer`]
//! 4. Declarations and the call are laid out per [`SampleMode`]
//!
//! See [`crate::output`] for walking a whole model and writing files.

pub mod literal;
pub mod resolve;
pub mod sample;

pub use literal::{LiteralSynthesizer, SynthesisOptions};
pub use resolve::{Lookup, MissingParameter, Resolved, resolve_arguments, resolve_parameter};
pub use sample::{ProgramBuilder, SampleAssembler, SampleMode};
