//! Command-line interface definitions for Aamuraportti.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The only runtime choice made on the command line is the delivery channel;
//! everything else (API key, query, SMTP settings) comes from the
//! environment via [`crate::config`].

use clap::{Parser, ValueEnum};

/// Command-line arguments for the Aamuraportti application.
///
/// # Examples
///
/// ```sh
/// # Print the report and write aamuraportti.txt
/// aamuraportti
///
/// # Send the report by email instead
/// aamuraportti --deliver email
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Delivery channel for the finished report
    #[arg(long, value_enum, env = "DELIVERY_MODE", default_value_t = DeliveryMode::File)]
    pub deliver: DeliveryMode,
}

/// The two delivery channels a deployment can choose between.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Print to stdout and overwrite the local report file.
    File,
    /// Send the report as a plain-text email over SMTP.
    Email,
}
