//! An interactive demo of the AVL set.
//!
//! Reads whitespace-separated commands from stdin: `insert <value>`,
//! `remove <value>`, `has <value>`, and `quit`. After every successful
//! command the current tree is printed as a lying tree, preceded by a
//! header with the set's size.

use avl::Set;
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut set: Set<i64> = Set::new();

    println!("insert <value> | remove <value> | has <value> | quit");
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let mut tokens = line.split_whitespace();

        while let Some(verb) = tokens.next() {
            match verb {
                "quit" => return Ok(()),
                "insert" | "remove" | "has" => match tokens.next().map(str::parse::<i64>) {
                    Some(Ok(value)) => {
                        match verb {
                            "insert" => { set.insert(value); }
                            "remove" => { set.remove(&value); }
                            _ => println!("{}", set.contains(&value)),
                        }
                        println!("{}", set);
                    }
                    Some(Err(_)) => eprintln!("invalid value"),
                    None => eprintln!("missing value"),
                },
                _ => eprintln!("unknown operation: {}", verb),
            }
        }

        print!("> ");
        stdout.flush()?;
    }

    Ok(())
}
