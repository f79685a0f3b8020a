//! # 美化输出工具
//!
//! 提供统一的终端输出样式和表格预览。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored`, `tabled` crate

use crate::models::Table;

use colored::Colorize;
use tabled::builder::Builder;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印表格前 n 行
pub fn print_preview(table: &Table, n: usize) {
    if n == 0 || table.is_empty() {
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(table.columns().iter().cloned());
    for row in table.head(n).rows() {
        builder.push_record(row.iter().map(|v| match v.as_number() {
            Some(x) => format!("{:.4}", x),
            None => v.to_string(),
        }));
    }

    println!("{}", builder.build());
    if table.len() > n {
        println!("{}", format!("... {} more rows", table.len() - n).dimmed());
    }
}
