//! Общие DTO калькулятора: то, что уходит по HTTP и лежит в журнале операций.

pub mod domain;
pub mod shared;
pub mod usecases;
