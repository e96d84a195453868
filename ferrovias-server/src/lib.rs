//! Ferrovias arrivals proxy.
//!
//! A small read-through HTTP service that answers "when is the next train
//! at this Belgrano Norte station?" by scraping the operator's timetable
//! page and returning normalized JSON.

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod stations;
pub mod upstream;
pub mod web;
