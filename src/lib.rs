//! Tendency Calculator - Health Check-up Questionnaire
//!
//! This crate scores a fifteen-question lifestyle questionnaire with a
//! pre-trained tree ensemble and reports whether the predisposition to
//! obesity is elevated or low.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
