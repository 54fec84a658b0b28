//! 解析一个 `.asc` 文件并打印每个测量的摘要
//!
//! 用法: cargo run --example parse_file -- <path.asc>

use myqa_accept_parser::AcceptFile;

fn main() {
    let path = match std::env::args().nth(1) {
        Some(p) => p,
        None => {
            eprintln!("usage: parse_file <file.asc>");
            std::process::exit(2);
        }
    };

    let accept = match AcceptFile::open(&path) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("解析失败: {e}");
            std::process::exit(1);
        }
    };

    println!("{}: {} 个测量", path, accept.len());
    for (metadata, table) in accept.records() {
        let (rows, cols) = table.shape();
        print!(
            "  测量 {:?}: {} 行 x {} 列",
            metadata.measurement_number(),
            rows,
            cols
        );
        if let (Some(sts), Some(eds)) = (metadata.vector("STS"), metadata.vector("EDS")) {
            print!(", 扫描 {:?} -> {:?}", sts, eds);
        }
        if let Ok(dose) = table.dose() {
            let max = dose.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            if !dose.is_empty() {
                print!(", 最大剂量 {max}");
            }
        }
        println!();
    }
}
