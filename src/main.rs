//! ragenda main entrypoint.

use ragenda::run;

fn main() {
    println!();
    match run() {
        Ok(session) => {
            let (notice, _) = session.take_notice();
            if let Some(n) = notice {
                n.emit();
                if n.is_failure() {
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            ragenda::ui::messages::error(format!("Error: {}", e));
            std::process::exit(1);
        }
    }
}
