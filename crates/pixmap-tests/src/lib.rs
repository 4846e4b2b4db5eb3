//! Integration tests for pixmap-rs crates.
//!
//! End-to-end pipelines over real files: parse a text pixel map, run one
//! filter, serialize, and compare the output text byte for byte. These
//! exercise the same read -> filter -> write path the `pixmap` binary
//! drives.
