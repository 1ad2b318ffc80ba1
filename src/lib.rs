// ==============================================================================
// lib.rs - Community Annotation Export Library
// ==============================================================================
// Description: Library interface for the community annotation export modules
// Author: Matt Barham
// Created: 2026-10-12
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================

pub mod parsers;
pub mod config;
pub mod models;
pub mod names;
pub mod processor;
pub mod output;
pub mod backup;
pub mod report;
