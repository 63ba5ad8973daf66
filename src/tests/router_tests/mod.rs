mod fake_api;
mod listings_tests;
mod search_tests;
