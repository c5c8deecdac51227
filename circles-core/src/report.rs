//! Output formatting - plaintext and JSON.

use serde_json::json;

use crate::person::Person;

/// Prints the invitation list in plain text format.
pub fn print_plain(invited: &[Person]) {
    if invited.is_empty() {
        println!("Nobody to invite.");
    } else {
        println!("INVITED ({}):", invited.len());
        for person in invited {
            println!("- {}", person.name);
        }
    }
}

/// Prints the invitation list in JSON format.
///
/// Falls back to a name-only listing if serialization fails.
pub fn print_json(invited: &[Person]) {
    match serde_json::to_string_pretty(&json!({ "invited": invited })) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            let names: Vec<&str> = invited.iter().map(|p| p.name.as_str()).collect();
            println!("{{\"invited\": {:?}}}", names);
        }
    }
}
