//! # ttn_cli
//!
//! Library surface behind the `ttn` binary: a tiny gate-script format
//! and a thin driver that builds a topology, runs the script, and
//! reports measurement probabilities.
//!
//! ## Library Usage
//!
//! ```rust
//! use ttn_cli::script::{parse_script, run_script};
//! use ttn_sim::QCircuit;
//! use ttn_topology::make_chain;
//! use num_complex::Complex64;
//!
//! let topology = make_chain(2, false);
//! let mut qc = QCircuit::new(
//!     topology,
//!     &vec![(Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)); 2],
//! )
//! .unwrap();
//! let gates = parse_script("H 0\nCNOT 0 1\n").unwrap();
//! run_script(&mut qc, &gates).unwrap();
//! ```

pub mod script;

pub use script::{parse_script, run_script};
