pub mod u501_analyze_logs;
