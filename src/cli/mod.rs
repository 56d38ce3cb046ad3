pub mod commands;

use crate::cli::commands::Commands;
use crate::kb::EmotionKb;

pub fn run_cli(command: Commands) {
    match command {
        Commands::Serve => {
            panic!("Serve command should be intercepted by main.rs to boot actix-web");
        }
        Commands::Solutions { emotions } => {
            let kb = EmotionKb::load();
            let labels: Vec<&str> = emotions.iter().map(String::as_str).collect();
            let solutions = kb.compose(&labels);

            if solutions.techniques.is_empty()
                && solutions.affirmations.is_empty()
                && solutions.activities.is_empty()
            {
                println!("No suggestions for: {}", emotions.join(", "));
                println!(
                    "Known emotions: {}",
                    kb.labels().collect::<Vec<_>>().join(", ")
                );
                return;
            }

            print_section("Techniques", &solutions.techniques);
            print_section("Affirmations", &solutions.affirmations);
            print_section("Activities", &solutions.activities);
        }
    }
}

fn print_section(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{}:", title);
    for item in items {
        println!("  - {}", item);
    }
    println!();
}
