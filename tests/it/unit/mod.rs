//! Unit tests for Inkboard's public building blocks.

mod perf_tests;
