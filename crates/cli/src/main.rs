use anyhow::{anyhow, bail, Context, Result};
use catalog::{Catalog, Experience, MentorListItem};
use clap::{Parser, Subcommand};
use colored::Colorize;
use listing::{
    parse_experience_selection, parse_price_selection, Action, EventSink, MentorListView,
    NoopSink, PriceBucket, DEFAULT_PAGE_SIZE,
};
use rand::Rng;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// Mentors - browse and filter the mentor catalog
#[derive(Parser)]
#[command(name = "mentors")]
#[command(about = "Filter and page through the public mentor list", long_about = None)]
struct Cli {
    /// Path to the mentor catalog (JSON)
    #[arg(short, long, default_value = "data/mentors.json")]
    data_file: PathBuf,

    /// Mentors per page
    #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List mentors matching the given filters
    List {
        /// Case-insensitive text to find in name, job, competencies or description
        #[arg(long)]
        search: Option<String>,

        /// Keep mentors with this tag (repeat for any of several)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Keep mentors in this experience bucket: 0-2, 2-5, 5-10, 10+ (repeatable)
        #[arg(long = "experience")]
        experience: Vec<String>,

        /// Price bucket label, e.g. "До 5 000 руб." (see `prices`)
        #[arg(long)]
        price: Option<String>,

        /// Only recently joined mentors
        #[arg(long)]
        new_only: bool,

        /// Only mentors without mentees
        #[arg(long)]
        no_sessions: bool,

        /// Number of pages to reveal
        #[arg(long, default_value = "1")]
        pages: usize,

        /// Include mentors hidden from the public list
        #[arg(long)]
        include_hidden: bool,
    },

    /// Show one mentor by slug
    Show {
        #[arg(long)]
        slug: String,
    },

    /// Show every tag with its mentor count
    Tags,

    /// Show the price buckets accepted by `list --price`
    Prices,

    /// Replay random filter actions and report latency
    Benchmark {
        /// Number of actions to dispatch
        #[arg(long, default_value = "1000")]
        iterations: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // The price table needs no catalog
    if let Commands::Prices = cli.command {
        handle_prices();
        return Ok(());
    }

    let start = Instant::now();
    let catalog = Catalog::load_from_file(&cli.data_file).with_context(|| {
        format!(
            "Failed to load mentor catalog from {}",
            cli.data_file.display()
        )
    })?;
    println!(
        "{} Loaded {} mentors in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List {
            search,
            tags,
            experience,
            price,
            new_only,
            no_sessions,
            pages,
            include_hidden,
        } => {
            let catalog = if include_hidden {
                catalog
            } else {
                catalog.into_visible()
            };
            let request = ListRequest {
                search,
                tags,
                experience,
                price,
                new_only,
                no_sessions,
                pages,
            };
            handle_list(&catalog, cli.page_size, request)?
        }
        Commands::Show { slug } => handle_show(&catalog, &slug)?,
        Commands::Tags => handle_tags(&catalog),
        Commands::Prices => handle_prices(),
        Commands::Benchmark { iterations } => {
            handle_benchmark(&catalog.into_visible(), cli.page_size, iterations)?
        }
    }

    Ok(())
}

/// Filter selections collected from `list` flags
struct ListRequest {
    search: Option<String>,
    tags: Vec<String>,
    experience: Vec<String>,
    price: Option<String>,
    new_only: bool,
    no_sessions: bool,
    pages: usize,
}

/// Handle the 'list' command
fn handle_list(catalog: &Catalog, page_size: usize, request: ListRequest) -> Result<()> {
    // Validate user input before touching the view
    let experience = parse_experience_selection(&request.experience)?;
    let price = match request.price.as_deref() {
        Some(label) => parse_price_selection(label)
            .context("Run `mentors prices` to see the accepted labels")?,
        None => None,
    };

    let mut view = MentorListView::new(catalog, page_size)?;

    if let Some(search) = request.search {
        view.set_search(search);
    }
    if !request.tags.is_empty() {
        view.set_tags(request.tags);
    }
    if !experience.is_empty() {
        view.set_experience(experience);
    }
    if price.is_some() {
        view.set_price(price);
    }
    if request.new_only {
        view.set_new_mentor(true);
    }
    if request.no_sessions {
        view.set_no_sessions(true);
    }
    for _ in 1..request.pages {
        if !view.has_more_mentors() {
            break;
        }
        view.show_more();
    }

    print_mentor_list(&view);
    Ok(())
}

/// Handle the 'show' command
fn handle_show(catalog: &Catalog, slug: &str) -> Result<()> {
    let mentor = catalog
        .get_by_slug(slug)
        .ok_or_else(|| anyhow!("Mentor '{}' not found", slug))?;

    println!("{}", mentor.name.bold().blue());
    println!("{}Job: {}", "• ".green(), mentor.job);
    println!("{}Workplace: {}", "• ".green(), mentor.workplace);
    println!("{}Experience: {} years", "• ".green(), mentor.experience);
    println!("{}Price: {}", "• ".green(), mentor.price);
    println!("{}Tags: {}", "• ".green(), mentor.tags.join(", "));
    println!("{}Mentees: {}", "• ".cyan(), mentor.mentee_count);
    println!("{}Calendar: {:?}", "• ".cyan(), mentor.calendar_type);
    if !mentor.is_visible {
        println!("{}", "Hidden from the public list".yellow());
    }
    for (title, text) in [
        ("About", &mentor.about),
        ("Description", &mentor.description),
        ("Competencies", &mentor.competencies),
    ] {
        if !text.trim().is_empty() {
            println!("\n{}\n{}", title.bold(), text);
        }
    }
    Ok(())
}

/// Handle the 'tags' command
fn handle_tags(catalog: &Catalog) {
    println!("{}", "Tags:".bold().blue());
    for (tag, count) in catalog.tag_counts() {
        println!("  {:<24} {}", tag, count);
    }
}

/// Handle the 'prices' command
fn handle_prices() {
    println!("{}", "Price buckets:".bold().blue());
    for bucket in PriceBucket::ALL {
        println!("  {:<18} up to {} руб", bucket.label(), bucket.ceiling());
    }
}

/// Handle the 'benchmark' command
fn handle_benchmark(catalog: &Catalog, page_size: usize, iterations: usize) -> Result<()> {
    if iterations == 0 {
        bail!("--iterations must be at least 1");
    }

    let tags: Vec<String> = catalog.tag_counts().into_iter().map(|(tag, _)| tag).collect();
    let words: Vec<String> = catalog
        .mentors()
        .iter()
        .filter_map(|m| m.name.split_whitespace().next())
        .map(|w| w.to_string())
        .collect();

    let mut rng = rand::rng();
    let mut view = MentorListView::with_sink(catalog, page_size, NoopSink)?;

    info!("Dispatching {} random actions", iterations);
    let mut timings: Vec<Duration> = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let action = random_action(&mut rng, &tags, &words);
        let start = Instant::now();
        view.dispatch(action);
        let visible = view.visible_mentors().len();
        timings.push(start.elapsed());
        std::hint::black_box(visible);
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let percentile = |q: f64| timings[((timings.len() - 1) as f64 * q) as usize];
    let throughput = iterations as f64 / total_time.as_secs_f64().max(f64::EPSILON);

    println!("{}", "Benchmark results:".bold().blue());
    println!("Catalog size: {}", catalog.len());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} actions/second", throughput);
    Ok(())
}

/// Pick a random action the way a user clicks through the filter panel
fn random_action(rng: &mut impl Rng, tags: &[String], words: &[String]) -> Action {
    match rng.random_range(0..8) {
        0 if !words.is_empty() => {
            Action::SetSearch(words[rng.random_range(0..words.len())].clone())
        }
        1 if !tags.is_empty() => {
            let count = rng.random_range(1..=tags.len().min(3));
            Action::SetTags(
                (0..count)
                    .map(|_| tags[rng.random_range(0..tags.len())].clone())
                    .collect(),
            )
        }
        2 => Action::SetExperience(
            Experience::ALL
                .into_iter()
                .filter(|_| rng.random_bool(0.5))
                .collect(),
        ),
        3 => {
            let idx = rng.random_range(0..=PriceBucket::ALL.len());
            Action::SetPrice(PriceBucket::ALL.get(idx).copied())
        }
        4 => Action::SetNewMentor(rng.random_bool(0.3)),
        5 => Action::SetNoSessions(rng.random_bool(0.3)),
        6 => Action::Reset,
        _ => Action::ShowMore,
    }
}

/// Print the visible part of a list view
fn print_mentor_list<S: EventSink>(view: &MentorListView<'_, S>) {
    println!("{}", "Mentors:".bold().blue());
    for (rank, mentor) in view.visible_mentors().into_iter().enumerate() {
        print_mentor_line(rank + 1, mentor);
    }

    let shown = view.visible_mentors().len();
    println!(
        "\nShowing {} of {} matching mentors ({} in catalog)",
        shown,
        view.matched_count(),
        view.total_count()
    );
    if view.has_more_mentors() {
        let remaining = view.matched_count() - shown;
        let pages = shown.div_ceil(view.page_size()) + 1;
        println!(
            "{} {} more, use --pages {} to see the next page",
            "…".yellow(),
            remaining,
            pages
        );
    }
}

fn print_mentor_line(rank: usize, mentor: &MentorListItem) {
    let mut badges = Vec::new();
    if mentor.is_new {
        badges.push("new".green().to_string());
    }
    if mentor.mentee_count == 0 {
        badges.push("no mentees yet".cyan().to_string());
    }

    println!(
        "{}. {} ({}, {}) [{}] {} | {}{}",
        rank.to_string().green(),
        mentor.name.bold(),
        mentor.job,
        mentor.workplace,
        mentor.experience,
        mentor.price,
        mentor.tags.join(", "),
        if badges.is_empty() {
            String::new()
        } else {
            format!(" ({})", badges.join(", "))
        }
    );
}
