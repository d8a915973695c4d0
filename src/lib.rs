//! ooinstall: `OpenShift` installer configuration
//!
//! A library for loading, validating, defaulting and persisting the
//! installer's YAML configuration: the target hosts and installer options.

pub mod config;
