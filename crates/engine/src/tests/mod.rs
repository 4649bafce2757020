// Engine Test Modules

mod builtin_tests;
mod expr_tests;
