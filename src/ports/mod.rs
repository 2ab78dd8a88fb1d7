//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Traits the domain layer requires from collaborators outside it.
//! Adapters implement these traits.
//!
//! Port categories:
//! - `AddressPredicate`: account address format rules

pub mod address;

pub use address::AddressPredicate;
