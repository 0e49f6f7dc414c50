use clap::Parser;
use farecast::config::Settings;
use farecast::{Airline, City, Currency, FormController, PredictorClient, TimeSlot};
use std::io::{self, BufRead, Write};
use tracing::{error, info};

/// Flight price prediction client
///
/// Collects flight attributes, submits them to the prediction service and
/// prints the predicted price in the chosen display currency.
#[derive(Parser, Debug)]
#[command(name = "farecast", version, about = "Flight price prediction client")]
struct Args {
    /// Operating airline (name or IATA code, e.g. "Vistara" or "UK")
    #[arg(long)]
    airline: Option<String>,

    /// Source city (name or airport code, e.g. "Bangalore" or "BLR")
    #[arg(long)]
    source: Option<String>,

    /// Destination city (name or airport code)
    #[arg(long)]
    destination: Option<String>,

    /// Stops encoding: 3 = non-stop down to 0 = three stops
    #[arg(long)]
    stops: Option<String>,

    /// Cabin class: Economy/0 or Business/1
    #[arg(long)]
    class: Option<String>,

    /// Departure window (e.g. "Morning", "Late Night")
    #[arg(long)]
    departure: Option<String>,

    /// Arrival window
    #[arg(long)]
    arrival: Option<String>,

    /// Flight duration in minutes
    #[arg(long)]
    duration: Option<String>,

    /// Days until departure
    #[arg(long = "days-left")]
    days_left: Option<String>,

    /// Display currency for the predicted price
    #[arg(long, default_value = "INR")]
    currency: String,

    /// Run the interactive form loop instead of a one-shot submission
    #[arg(long)]
    interactive: bool,

    /// Print the enumerated form options and exit
    #[arg(long)]
    list_options: bool,
}

#[tokio::main]
async fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    let args = Args::parse();

    if args.list_options {
        print_options();
        return;
    }

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!(
        "Prediction service endpoint: {}",
        settings.predictor.base_url
    );

    let client = PredictorClient::new(settings.predictor.base_url);
    let mut controller = FormController::new();

    match Currency::parse(&args.currency) {
        Some(currency) => controller.set_currency(currency),
        None => {
            eprintln!("Unknown currency: {}", args.currency);
            std::process::exit(2);
        }
    }

    // Every CLI override flows through the form reducer, so flag values
    // are parsed and clamped exactly like interactive edits.
    let overrides = [
        ("stops", &args.stops),
        ("class", &args.class),
        ("airline", &args.airline),
        ("source", &args.source),
        ("destination", &args.destination),
        ("departure", &args.departure),
        ("arrival", &args.arrival),
        ("duration", &args.duration),
        ("days_left", &args.days_left),
    ];

    for (field, value) in overrides {
        if let Some(value) = value {
            if let Err(e) = controller.set_field(field, value) {
                eprintln!("{}", e);
                std::process::exit(2);
            }
        }
    }

    if args.interactive {
        run_interactive(&mut controller, &client).await;
    } else if !run_once(&mut controller, &client).await {
        std::process::exit(1);
    }
}

/// Submit the current form once and print the outcome. Returns false if
/// the submission ended in an error.
async fn run_once(controller: &mut FormController, client: &PredictorClient) -> bool {
    println!("{}", controller.route_summary());

    controller.submit(client).await;

    if let Some(err) = &controller.error {
        eprintln!("Error: {}", err);
        return false;
    }

    if let Some(price) = controller.formatted_price() {
        println!("Predicted price: {}", price);
    }

    true
}

/// Line-oriented form loop: edit fields, submit, and re-render the price
/// in other currencies without re-querying the service.
async fn run_interactive(controller: &mut FormController, client: &PredictorClient) {
    println!("farecast interactive form (type 'help' for commands)");
    print!("> ");
    let _ = io::stdout().flush();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };

        let mut parts = line.trim().splitn(3, ' ');
        let command = parts.next().unwrap_or("");

        match command {
            "" => {}
            "help" => print_help(),
            "options" => print_options(),
            "show" => print_form(controller),
            "set" => {
                let field = parts.next().unwrap_or("");
                let value = parts.next().unwrap_or("");
                if field.is_empty() || value.is_empty() {
                    println!("Usage: set <field> <value>");
                } else if let Err(e) = controller.set_field(field, value) {
                    println!("{}", e);
                }
            }
            "currency" => match parts.next().and_then(Currency::parse) {
                Some(currency) => {
                    controller.set_currency(currency);
                    if let Some(price) = controller.formatted_price() {
                        println!("Predicted price: {}", price);
                    }
                }
                None => println!("Usage: currency <INR|USD|EUR|GBP|AUD|CAD>"),
            },
            "submit" => {
                println!("Predicting...");
                controller.submit(client).await;
                match (&controller.error, controller.formatted_price()) {
                    (Some(err), _) => println!("Error: {}", err),
                    (None, Some(price)) => println!("Predicted price: {}", price),
                    _ => {}
                }
            }
            "quit" | "exit" => break,
            other => println!("Unknown command: {} (type 'help')", other),
        }

        print!("> ");
        let _ = io::stdout().flush();
    }
}

fn print_help() {
    println!("Commands:");
    println!("  set <field> <value>   edit a form field");
    println!("                        fields: stops, class, airline, source,");
    println!("                        destination, departure, arrival, duration, days_left");
    println!("  currency <code>       switch the display currency");
    println!("  show                  print the current form");
    println!("  options               list the enumerated field options");
    println!("  submit                request a prediction");
    println!("  quit                  leave the form");
}

fn print_form(controller: &FormController) {
    let query = &controller.query;
    println!("{}", controller.route_summary());
    println!(
        "  departure: {}, arrival: {}, duration: {} min, days left: {}",
        query.departure.display_name(),
        query.arrival.display_name(),
        query.duration_minutes,
        query.days_left
    );
    println!("  currency: {}", controller.currency.code());
    if let Some(price) = controller.formatted_price() {
        println!("  predicted price: {}", price);
    }
}

fn print_options() {
    println!("Airlines:");
    for airline in Airline::ALL {
        println!("  {} ({})", airline.display_name(), airline.iata_code());
    }
    println!("Cities (source/destination):");
    for city in City::ALL {
        println!("  {} ({})", city.label(), city.airport_code());
    }
    println!("Time windows (departure/arrival):");
    for slot in TimeSlot::ALL {
        println!("  {}", slot.display_name());
    }
    println!("Stops: 3 = Non-stop, 2 = 1 Stop, 1 = 2 Stops, 0 = 3 Stops");
    println!("Class: 0 = Economy, 1 = Business");
    println!("Currencies:");
    for currency in Currency::ALL {
        println!("  {} ({})", currency.code(), currency.symbol());
    }
}
