//! Static site content: the profile record and per-locale project lists.

mod profile;
mod projects;

pub use profile::{Profile, PROFILE};
pub use projects::{projects, Project, ENGLISH_PROJECTS, FRENCH_PROJECTS};
