//! # sabor-core
//!
//! Core types shared across the SaborLocal crates:
//! - Entity structs for the marketplace (productos, productores, clientes,
//!   pedidos, entregas)
//! - Status enums with state machine transitions
//! - The [`Related`] variant for fields the backend sends either as an id or as
//!   an embedded record
//! - The authenticated [`SessionUser`] snapshot
//! - Cross-cutting validation errors

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod page;
pub mod related;

pub use errors::CoreError;
pub use identity::SessionUser;
pub use page::Page;
pub use related::Related;
