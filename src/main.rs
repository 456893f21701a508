//! rDailyReport main entrypoint.

use rdailyreport::{Status, run};

fn main() {
    match run() {
        Ok(Status::Done) => {}
        Ok(Status::Rejected) => std::process::exit(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
