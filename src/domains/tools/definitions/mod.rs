//! Tool definitions module.
//!
//! This module exports all available tool definitions. Each tool is defined
//! in its own file.

pub mod submit_expense;

pub use submit_expense::{
    ExpenseCategory, ExpenseStatus, SubmitExpenseParams, SubmitExpenseResult, SubmitExpenseTool,
};
