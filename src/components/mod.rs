//! Page section components and the particle-field subsystem.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod particle_field;
pub mod projects;
pub mod skills;
