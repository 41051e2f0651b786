// src/components/mod.rs
pub mod icons;
pub mod image;
pub mod modals;
pub mod nav;
pub mod sections;
