//! Tests for RS256 token issuance

mod service_tests;
