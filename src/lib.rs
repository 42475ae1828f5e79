//! meeting-minutes: rule-based meeting transcript summarizer with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
