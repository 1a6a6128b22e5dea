//! fir-json contains the JSON schemas of the run reports written by
//! fir-harness.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

/// Run report JSON schema.
///
/// This JSON schema corresponds to the file written by `fir-harness --report`.
/// It contains one entry for each configuration file that was processed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Report {
    /// Name and version of the harness that produced the report.
    pub harness: String,
    /// Date and time at which the run started, in RFC 3339 format.
    pub datetime: String,
    /// Verification path that was run.
    pub mode: Mode,
    /// Path of the input vector file.
    pub input: String,
    /// Processed configurations, in processing order.
    pub configurations: Vec<Configuration>,
}

/// Verification path.
///
/// This enum lists the ways in which the filter can be exercised.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Software reference model only.
    Reference,
    /// Device-under-test driven through its register interface.
    Hardware,
}

/// Configuration JSON schema.
///
/// Results of running a single configuration file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Path of the configuration file.
    pub file: String,
    /// Filter coefficients, in tap order.
    pub coefficients: Vec<f64>,
    /// Packed coefficient word written to the device.
    ///
    /// Only present for the hardware path.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub packed_coefficients: Option<u32>,
    /// Outcome of each step of the device sequence.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub steps: Vec<Step>,
    /// Per-sample results, in input order.
    pub samples: Vec<Sample>,
}

/// Device sequence step JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Step name.
    pub name: String,
    /// Whether the register modification of the step was applied.
    pub applied: bool,
    /// Reason for which the step was skipped.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reason: Option<String>,
}

/// Sample JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Sample {
    /// Input sample.
    pub input: f64,
    /// Output of the reference model.
    pub reference: f64,
    /// Output of the device.
    ///
    /// This is `null` in the hardware path if the signal transaction failed,
    /// and omitted in the reference path.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub device: Option<Option<u8>>,
}
