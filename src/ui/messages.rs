//! One-line status messages for the CLI, icon plus coloured text.

use ansi_term::Colour;
use std::fmt::Display;

fn line<T: Display>(colour: Colour, icon: &str, msg: T) -> String {
    format!("{} {}", colour.bold().paint(icon), msg)
}

pub fn info<T: Display>(msg: T) {
    println!("{}", line(Colour::Blue, "ℹ️", msg));
}

pub fn success<T: Display>(msg: T) {
    println!("{}", line(Colour::Green, "✅", msg));
}

pub fn warning<T: Display>(msg: T) {
    println!("{}", line(Colour::Yellow, "⚠️", msg));
}

pub fn failure<T: Display>(msg: T) {
    println!("{}", line(Colour::Red, "❌", msg));
}
