// Copyright 2019 TiKV Project Authors. Licensed under MIT or Apache-2.0.

use std::env::args;
use std::process::ExitCode;

use crc64stream::table::SLICES;
use crc64stream::{Table, POLY};

// usage:
//
//  ./build_table 0    # generate TABLE_0
//  ./build_table 1    # generate TABLE_1
//
// etc.

fn main() -> ExitCode {
    let table_id = match args().nth(1).map(|arg| arg.parse::<usize>()) {
        Some(Ok(id)) if id < SLICES => id,
        _ => {
            eprintln!("Usage: build_table <0..{}>", SLICES - 1);
            return ExitCode::from(1);
        }
    };

    let table = Table::new(POLY);
    println!("static TABLE_{}: [u64; 256] = [", table_id);
    for i in 0..=255u8 {
        println!("    {:#018x},", table.entry(table_id, i));
    }
    println!("];");

    ExitCode::SUCCESS
}
