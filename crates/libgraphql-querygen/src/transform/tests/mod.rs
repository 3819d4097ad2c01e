mod apply_argument_tests;
mod value_coercion_tests;
