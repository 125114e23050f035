//! Status and toggle commands.

use pelipost_core::post::{get_status, toggle_post_file};
use std::path::Path;

use super::{exit_with, read_post_or_exit};

pub fn run_status(file: &Path) {
    let content = read_post_or_exit(file);
    println!("{}", get_status(&content));
}

pub fn run_toggle(file: &Path) {
    match toggle_post_file(file) {
        Ok(status) => println!("Post status changed to: {status}"),
        Err(e) => exit_with(&e),
    }
}
