mod parse_tests;
