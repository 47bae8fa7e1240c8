//! Body fat percentage estimation from tape measurements, following the
//! circumference method of U.S. Army Regulation 600-9 (2019), Table B-5.

pub mod cli;
pub mod config;
pub mod estimator;
pub mod logging;
pub mod output;
