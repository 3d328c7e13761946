mod content_tests;
