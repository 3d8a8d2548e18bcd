mod verilog_test;
