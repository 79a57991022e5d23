mod header_sync_tests;
