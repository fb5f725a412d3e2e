//! Property-based tests for encoding, search, and scoring.
