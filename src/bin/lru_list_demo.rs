//! Walks a capacity-8 list through insert, remove and touch, printing the
//! list after each phase.
//!
//! Run with: cargo run --bin lru_list_demo

use std::io::{self, Write};
use std::process::ExitCode;

use lrulist::dump::write_list;
use lrulist::list::LruList;

const CAPACITY: usize = 8;

fn dropping(name: &str) {
    println!("dropping '{name}'");
}

fn run(out: &mut impl Write) -> Result<(), String> {
    let mut list: LruList<&str> = LruList::new(CAPACITY);

    println!("[Test insert]");
    for name in ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"] {
        list.insert_with(name, dropping);
        println!("insert '{name}'");
    }
    write_list(out, &list).map_err(|err| err.to_string())?;

    println!("[Test remove]");
    if list.remove("A").is_some() {
        return Err("'A' should have been evicted".into());
    }
    for name in ["J", "F", "C"] {
        match list.remove(name) {
            Some(removed) => dropping(removed),
            None => return Err(format!("failed to remove '{name}'")),
        }
    }
    write_list(out, &list).map_err(|err| err.to_string())?;

    println!("[Test use]");
    if list.find("A").is_some() {
        return Err("found evicted value 'A'".into());
    }
    for name in ["I", "D", "G"] {
        if list.find(name).is_none() {
            return Err(format!("failed to find '{name}'"));
        }
    }
    write_list(out, &list).map_err(|err| err.to_string())?;

    Ok(())
}

fn main() -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        },
    }
}
