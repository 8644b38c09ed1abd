mod host_tests;
mod sequence_tests;
