//! Interactive console prompts for the input form.

use std::io::{self, Write};

use crate::form::NumericField;

fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        // EOF: the caller falls back to the default.
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a numeric field until the reply parses and sits inside the
/// field bounds. An empty reply selects the field default.
pub fn prompt_number(field: &NumericField) -> io::Result<f64> {
    loop {
        print!(
            "{} [{}-{}, default {}]: ",
            field.label, field.min, field.max, field.default
        );
        io::stdout().flush()?;

        let reply = match read_line()? {
            None => return Ok(field.default),
            Some(reply) => reply,
        };
        if reply.is_empty() {
            return Ok(field.default);
        }
        match reply.parse::<f64>() {
            Ok(value) if field.contains(value) => return Ok(field.clamp(value)),
            Ok(_) => println!(
                "Please enter a value between {} and {}",
                field.min, field.max
            ),
            Err(_) => println!("Please enter a valid number"),
        }
    }
}

/// Prompt for one of a fixed list of options by number.
/// An empty reply selects the first option. Returns the option index.
pub fn prompt_choice(label: &str, options: &[&str]) -> io::Result<usize> {
    println!("{label}:");
    for (i, option) in options.iter().enumerate() {
        println!("  {}) {}", i + 1, option);
    }
    loop {
        print!("Select [1-{}, default 1]: ", options.len());
        io::stdout().flush()?;

        let reply = match read_line()? {
            None => return Ok(0),
            Some(reply) => reply,
        };
        if reply.is_empty() {
            return Ok(0);
        }
        match reply.parse::<usize>() {
            Ok(choice) if (1..=options.len()).contains(&choice) => return Ok(choice - 1),
            _ => println!("Please enter a number between 1 and {}", options.len()),
        }
    }
}

/// Yes/no confirmation, defaulting to no.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    Ok(match read_line()? {
        Some(reply) => matches!(reply.to_lowercase().as_str(), "y" | "yes"),
        None => false,
    })
}
