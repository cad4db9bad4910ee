// src/challenge/tests/mod.rs

mod parser_tests;
