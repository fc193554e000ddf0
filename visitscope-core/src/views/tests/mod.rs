mod bots_tests;
mod content_tests;
mod trends_tests;
