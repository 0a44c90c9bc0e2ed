//! Edge case tests for numlit-lex
