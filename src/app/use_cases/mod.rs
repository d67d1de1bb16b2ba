//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod drc;
pub mod editing;
pub mod export;
pub mod hit_test;
pub mod pointer;
pub mod project;
pub mod routing;
pub mod selection;
pub mod translator;
