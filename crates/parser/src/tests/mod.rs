// Test module for parser
//
// Unit tests for the expression parser, organized by category.

mod error_recovery;
