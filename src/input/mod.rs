//! Window and device input, translated into session events.

pub mod gui;
