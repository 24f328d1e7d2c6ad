//! Debate Arena - debate a chatbot on assigned topics
//!
//! Users pick a topic and a stance, argue against an external chatbot, and
//! in test mode receive a grade that feeds their score and level.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
