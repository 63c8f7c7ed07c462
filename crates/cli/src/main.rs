use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::time::Instant;

use flow::{MemoryPanel, Outcome, RecommendationFlow};
use form::{PlaceTypeBox, TripForm};
use rec_client::ClientConfig;
use render::{View, EMPTY_NOTICE, ERROR_LEAD, UNKNOWN_DESTINATION};

/// TripScout - trip destination recommendations
#[derive(Parser)]
#[command(name = "trip-scout")]
#[command(about = "Trip recommendation flow: collect preferences, fetch matches, render results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// The trip-preferences form, as command-line flags.
///
/// Omitting a flag models a missing form control; the collector coerces
/// missing/empty numeric input to 0 and missing strings to "".
#[derive(Args)]
struct FormArgs {
    /// Trip budget
    #[arg(long)]
    budget: Option<String>,

    /// Trip duration in days
    #[arg(long)]
    duration: Option<String>,

    /// Preferred weather
    #[arg(long)]
    weather: Option<String>,

    /// Preferred continent
    #[arg(long)]
    continent: Option<String>,

    /// Place type to check (repeatable)
    #[arg(long = "place-type")]
    place_types: Vec<String>,
}

impl FormArgs {
    fn snapshot(&self) -> TripForm {
        TripForm {
            budget: self.budget.clone(),
            duration: self.duration.clone(),
            weather: self.weather.clone(),
            continent: self.continent.clone(),
            place_types: self
                .place_types
                .iter()
                .map(|value| PlaceTypeBox::new(value.clone(), true))
                .collect(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run one submission and print the recommended destinations
    Recommend {
        #[command(flatten)]
        form: FormArgs,

        /// Recommendation backend base URL (empty = offline fixture)
        #[arg(long, default_value = "")]
        base_url: String,

        /// Force the offline fixture path even when a base URL is set
        #[arg(long)]
        offline: bool,

        /// Also print each rendered markup frame
        #[arg(long)]
        html: bool,
    },

    /// Print the collected request payload without fetching
    Payload {
        #[command(flatten)]
        form: FormArgs,
    },

    /// Run repeated offline submissions and report latency statistics
    Benchmark {
        /// Number of submissions to run
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent submissions
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend {
            form,
            base_url,
            offline,
            html,
        } => handle_recommend(form, base_url, offline, html).await?,
        Commands::Payload { form } => handle_payload(form)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(form: FormArgs, base_url: String, offline: bool, html: bool) -> Result<()> {
    let snapshot = form.snapshot();
    let config = ClientConfig {
        base_url,
        use_fixture: offline,
    };

    if config.is_offline() {
        println!("{}", "No backend configured; using fixture data".yellow());
    }

    let flow = RecommendationFlow::from_config(&config, MemoryPanel::new());
    let start = Instant::now();
    let outcome = flow.submit(&snapshot).await;
    println!("{} Resolved in {:?}", "✓".green(), start.elapsed());

    if html {
        for frame in flow.panel().frames() {
            println!("{frame}");
            println!();
        }
    }

    match outcome {
        Outcome::Rendered(view) => print_view(&view),
        Outcome::Superseded => println!("{}", "Submission superseded by a newer one".yellow()),
    }
    Ok(())
}

/// Handle the 'payload' command
fn handle_payload(form: FormArgs) -> Result<()> {
    let payload = form::collect(&form.snapshot());
    let json = serde_json::to_string_pretty(&payload).context("Failed to serialize payload")?;
    println!("{json}");
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(requests: usize, _concurrent: usize) -> Result<()> {
    // Spawn all submissions concurrently against the offline fixture
    let mut handles = vec![];
    for _ in 0..requests {
        let handle = tokio::spawn(async move {
            let snapshot = TripForm {
                budget: Some((rand::random::<u32>() % 5000).to_string()),
                duration: Some((rand::random::<u32>() % 14 + 1).to_string()),
                weather: Some("warm".to_string()),
                continent: Some("Europe".to_string()),
                place_types: vec![PlaceTypeBox::new("beach", true)],
            };
            let flow = RecommendationFlow::from_config(&ClientConfig::offline(), MemoryPanel::new());

            let start = Instant::now();
            flow.submit(&snapshot).await;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }

    let total_time: std::time::Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Format and print a terminal view
fn print_view(view: &View) {
    match view {
        View::Populated(cities) => {
            print!("{}", "Top Matches:\n".bold().blue());
            for (rank, city) in cities.iter().enumerate() {
                let name = city.name.as_deref().unwrap_or(UNKNOWN_DESTINATION);
                let country = city.country.as_deref().unwrap_or("");
                println!(
                    "{}. {} {} - Match: {}%",
                    (rank + 1).to_string().green(),
                    name.bold(),
                    country.dimmed(),
                    city.match_score
                );
                if !city.matching_types.is_empty() {
                    println!("   [{}]", city.matching_types.join(", "));
                }
                if let Some(description) = &city.description {
                    println!("   {description}");
                }
            }
        }
        View::Empty => println!("{}", EMPTY_NOTICE.yellow()),
        View::Error(message) => {
            println!("{}", ERROR_LEAD.red());
            if let Some(message) = message {
                println!("  {message}");
            }
        }
        // A submission never returns the loading state
        View::Loading => {}
    }
}
