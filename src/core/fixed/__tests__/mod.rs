mod format_test;
