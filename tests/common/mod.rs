//! 集成测试共享工具模块
//!
//! 提供测试图生成函数和常用断言，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;
