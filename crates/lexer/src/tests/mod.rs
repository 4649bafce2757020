// Test module for lexer
//
// Unit tests for the expression lexer, organized by category.
