pub mod a001_operation_log;
