use chrono::{Datelike, Utc};
use clap::Parser;
use futures::future::join_all;
use tracing_subscriber::EnvFilter;

use octoview::models::{GitHubUser, PinnedRepoSummary};
use octoview::profile::activity::{event_icon, event_label};
use octoview::profile::calendar::contribution_level;
use octoview::taxonomy::language_color;
use octoview::{Config, GitHubClient, ProfileViewer, ViewState};

#[derive(Parser, Debug)]
#[command(name = "octoview")]
#[command(version = "0.1.0")]
#[command(about = "Render a GitHub profile page in the terminal")]
struct Args {
    /// GitHub username (defaults to OCTOVIEW_DEFAULT_USER)
    username: Option<String>,

    /// Contribution year to show (defaults to the rolling last year)
    #[arg(short, long)]
    year: Option<i32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("octoview=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env();
    let username = args.username.unwrap_or_else(|| config.default_username.clone());

    let client = GitHubClient::new(config.github_token.as_deref())?;
    let viewer = ProfileViewer::new(client);

    let handles = viewer.load(&username, args.year).await;
    join_all(handles).await;

    let state = viewer.snapshot().await;
    print!("{}", render_profile(&state, &username, args.year));

    Ok(())
}

fn render_profile(state: &ViewState, username: &str, year: Option<i32>) -> String {
    let mut out = String::new();

    match &state.user {
        Some(user) if !user.is_blank() => out.push_str(&render_sidebar(user)),
        _ => out.push_str(&format!("Profile unavailable for {}\n", username)),
    }

    if let Some(pins) = &state.pinned {
        if !pins.is_empty() {
            out.push_str("\nPopular repositories\n");
            for pin in pins {
                out.push_str(&render_pin(pin));
            }
        }
    }

    out.push('\n');
    out.push_str(&render_contributions(state, year));

    out.push_str("\nContribution activity\n");
    match &state.activity {
        Some(groups) if !groups.is_empty() => {
            for group in groups {
                out.push_str(&format!("\n  {}\n", group.date));
                for event in &group.events {
                    out.push_str(&format!(
                        "    {} {} {}\n",
                        event_icon(&event.kind),
                        event_label(&event.kind),
                        event.repo
                    ));
                }
            }
        }
        _ => out.push_str("  No public activity in the last 30 days.\n"),
    }

    out
}

fn render_sidebar(user: &GitHubUser) -> String {
    let mut out = String::new();

    if let Some(name) = &user.name {
        out.push_str(&format!("{} ", name));
    }
    out.push_str(&format!("({})\n", user.login));

    if let Some(bio) = &user.bio {
        out.push_str(&format!("{}\n", bio));
    }
    if let Some(company) = &user.company {
        out.push_str(&format!("🏢 {}\n", company));
    }
    if let Some(location) = &user.location {
        out.push_str(&format!("📍 {}\n", location));
    }
    if let Some(email) = &user.email {
        out.push_str(&format!("✉️  {}\n", email));
    }
    if let Some(blog) = user.blog.as_ref().filter(|b| !b.is_empty()) {
        out.push_str(&format!("🔗 {}\n", blog));
    }
    if let Some(twitter) = &user.twitter_username {
        out.push_str(&format!("🐦 @{}\n", twitter));
    }

    out.push_str(&format!(
        "{} followers · {} following · {} public repos\n",
        user.followers, user.following, user.public_repos
    ));

    out
}

fn render_pin(pin: &PinnedRepoSummary) -> String {
    let mut out = String::new();

    let visibility = if pin.is_private { "Private" } else { "Public" };
    out.push_str(&format!("  {} [{}]", pin.name, visibility));

    if let Some(lang) = &pin.primary_language {
        out.push_str(&format!(
            "  {} {}",
            colored_dot(language_color(Some(&lang.name))),
            lang.name
        ));
    }
    if pin.stargazer_count > 0 {
        out.push_str(&format!("  ★ {}", pin.stargazer_count));
    }
    if pin.fork_count > 0 {
        out.push_str(&format!("  ⑂ {}", pin.fork_count));
    }
    out.push('\n');

    if let Some(desc) = &pin.description {
        out.push_str(&format!("      {}\n", desc));
    }

    out
}

fn render_contributions(state: &ViewState, year: Option<i32>) -> String {
    let mut out = String::new();

    let Some(heatmap) = &state.heatmap else {
        out.push_str("Loading contributions…\n");
        return out;
    };

    if heatmap.is_unavailable() {
        out.push_str("⚠ Could not load contributions. Set GITHUB_TOKEN in your environment.\n");
        return out;
    }

    let current_year = Utc::now().year();
    let period = match year {
        Some(y) if y != current_year => y.to_string(),
        _ => "the last year".to_string(),
    };
    out.push_str(&format!("{} contributions in {}\n", heatmap.total, period));
    out.push_str(&render_heatmap(heatmap));

    if let Some(years) = &state.available_years {
        let list: Vec<String> = years.iter().map(|y| y.to_string()).collect();
        out.push_str(&format!("Years: {}\n", list.join(" ")));
    }

    out
}

const LEVEL_GLYPHS: [char; 5] = ['·', '░', '▒', '▓', '█'];

/// Renders the day series as the usual weeks-as-columns grid. The first
/// column is padded down to the weekday of the first day.
fn render_heatmap(heatmap: &octoview::HeatmapSeries) -> String {
    let Some((first_date, _)) = heatmap.days.first() else {
        return String::new();
    };

    let offset = first_date.weekday().num_days_from_sunday() as usize;
    let weeks = (offset + heatmap.days.len()).div_ceil(7);

    let mut grid = vec![vec![' '; weeks]; 7];
    for (i, (_, count)) in heatmap.days.iter().enumerate() {
        let slot = offset + i;
        grid[slot % 7][slot / 7] = LEVEL_GLYPHS[contribution_level(*count) as usize];
    }

    let labels = ["   ", "Mon", "   ", "Wed", "   ", "Fri", "   "];
    let mut out = String::new();
    for (row, label) in grid.iter().zip(labels) {
        out.push_str(label);
        out.push(' ');
        out.extend(row.iter());
        out.push('\n');
    }
    out.push_str(&format!(
        "    Less {} More\n",
        LEVEL_GLYPHS.map(String::from).join(" ")
    ));

    out
}

/// 24-bit ANSI dot in the given `#rrggbb` color.
fn colored_dot(hex: &str) -> String {
    let parse = |range| u8::from_str_radix(hex.get(range).unwrap_or("8b"), 16).unwrap_or(0x8b);
    let (r, g, b) = (parse(1..3), parse(3..5), parse(5..7));
    format!("\x1b[38;2;{};{};{}m●\x1b[0m", r, g, b)
}
