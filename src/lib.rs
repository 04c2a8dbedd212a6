pub mod city;
pub mod console;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod input;
pub mod output;
pub mod pager;
pub mod parser;
pub mod session;
pub mod stats;
