// End-to-end tests live in tests/; nothing is exported here.
