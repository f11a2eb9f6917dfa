//! FFI bindings crate for client surfaces.
//! All exported functions live in [`api`].

pub mod api;
