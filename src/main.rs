use log::{error, info};

use tournament_scheduler::display::{print_schedule, write_schedule_to_file};
use tournament_scheduler::parser::load_categories;
use tournament_scheduler::schedule::generate_all;
use tournament_scheduler::{web, CategoryConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Check if we should run in web mode
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "web" {
        let port = args
            .get(2)
            .cloned()
            .or_else(|| std::env::var("SCHEDULER_PORT").ok())
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        info!("Starting web server on port {}...", port);
        println!("Access the API at http://localhost:{}/api/categories", port);

        web::start_server(port).await?;
        return Ok(());
    }

    // CLI mode
    let csv_path = args.get(1).map(String::as_str).unwrap_or("data/categories.csv");
    info!("Loading categories from {}", csv_path);
    let submissions = load_categories(csv_path)?;

    let mut configs: Vec<CategoryConfig> = Vec::new();
    for submission in submissions {
        let kind = submission.category;
        match submission.into_config() {
            Ok(config) => configs.push(config),
            Err(e) => error!("{}: {}", kind, e),
        }
    }

    if configs.is_empty() {
        println!("No valid categories to schedule.");
        return Ok(());
    }

    println!("\n=== Generating {} categories ===", configs.len());
    for (config, result) in configs.iter().zip(generate_all(&configs)) {
        match result {
            Ok(schedule) => {
                print_schedule(&schedule);
                let filename = format!("schedule_{}.txt", config.kind.name().to_lowercase());
                write_schedule_to_file(&schedule, &filename)?;
                println!("Schedule saved to {}", filename);
            }
            Err(e) => error!("{}: could not generate schedule: {}", config.kind, e),
        }
    }

    Ok(())
}
