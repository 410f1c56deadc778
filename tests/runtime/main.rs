//! Integration tests for Layer 2: Runtime
//!
//! Tests for the text codec and the load-or-seed session.

mod persistence;
