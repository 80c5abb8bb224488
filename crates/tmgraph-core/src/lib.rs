//! tmgraph Core Types and Definitions
//!
//! This crate provides the foundational types shared by the grammar decoder
//! and the graph builder. It includes:
//!
//! - **Grammar**: The decoded TextMate grammar model ([`grammar::Grammar`], [`grammar::Rule`])
//! - **References**: Outgoing rule references and their relation kinds ([`reference`] module)
//! - **Identifiers**: Node identifier escaping and synthetic ids ([`identifier`] module)

pub mod grammar;
pub mod identifier;
pub mod reference;
