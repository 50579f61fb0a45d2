use wayfind::{Context, ProviderPlan, RouteDetails, SearchIntent};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        fn wrap(&self, s: &str, code: &str) -> String {
            if self.enabled { format!("{code}{s}{RESET}") } else { s.to_string() }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            self.wrap(s.as_ref(), color)
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.wrap(s.as_ref(), BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.wrap(s.as_ref(), DIM)
        }
    }
}

use ansi::Palette;

pub fn print_run(input: &str, context: &Context, details: &RouteDetails, color: bool) {
    let palette = Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Routing: \"{}\"", input.trim()), ansi::CYAN)));
    println!("  {} {}", palette.dim("normalized:"), palette.paint(&details.normalized, ansi::BLUE));
    println!("  {} {}", palette.dim("reference: "), palette.dim(context.reference_time.to_rfc3339()));

    section("Intent", &palette);
    print_intent(&details.intent, &palette);

    section("Routing", &palette);
    let signals: Vec<&str> = details.signals.iter_names().map(|(name, _)| name).collect();
    println!("  {} {}", label("signals", &palette), list_or_none(&signals, &palette));
    match (details.tier, details.route) {
        (Some(tier), Some(route)) => {
            println!("  {} {}", label("tier", &palette), palette.bold(tier.as_str()));
            println!("  {} {}", label("branch", &palette), palette.paint(route.name(), ansi::GREEN));
        }
        _ => println!("  {} {}", label("branch", &palette), palette.paint("fallback plan", ansi::YELLOW)),
    }

    section("Plan", &palette);
    print_plan(&details.plan, &palette);

    section("Reasoning", &palette);
    for (idx, line) in details.plan.reasoning.iter().enumerate() {
        println!("  {} {}", palette.paint(format!("[{idx}]"), ansi::GRAY), line);
    }

    section("Timing", &palette);
    println!(
        "  Total: {}  │  Parse: {}  │  Plan: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.parse.total), ansi::CYAN),
        palette.paint(format!("{:?}", details.plan_elapsed), ansi::CYAN),
    );
    println!(
        "  {}",
        palette.dim(format!(
            "normalize {:?} · scan {:?} · resolve {:?} · classify {:?}",
            details.parse.normalize, details.parse.scan, details.parse.resolve, details.parse.classify
        ))
    );
    println!();
}

fn section(title: &str, palette: &Palette) {
    println!("\n{}", palette.paint(format!("━━━ {title} ━━━"), ansi::GRAY));
}

fn label(name: &str, palette: &Palette) -> String {
    palette.dim(format!("{name:<10}"))
}

fn list_or_none(items: &[&str], palette: &Palette) -> String {
    if items.is_empty() { palette.dim("(none)") } else { palette.paint(items.join(", "), ansi::BLUE) }
}

fn print_intent(intent: &SearchIntent, palette: &Palette) {
    let keywords: Vec<&str> = intent.keywords.iter().map(String::as_str).collect();
    let vibe: Vec<&str> = intent.vibe.iter().map(String::as_str).collect();
    let categories: Vec<&str> = intent.categories.iter().map(|c| c.as_str()).collect();

    println!("  {} {:?}", label("type", palette), intent.intent_type);
    println!("  {} {}", label("keywords", palette), list_or_none(&keywords, palette));
    println!("  {} {}", label("vibe", palette), list_or_none(&vibe, palette));
    println!("  {} {}", label("categories", palette), list_or_none(&categories, palette));

    let time = match intent.time_context {
        Some(time) => match time.day {
            Some(day) => format!("{} ({day})", time.label.as_str()),
            None => time.label.as_str().to_string(),
        },
        None => "(none)".to_string(),
    };
    println!("  {} {}", label("time", palette), palette.paint(time, ansi::YELLOW));

    let location = match &intent.location_hint.value {
        Some(value) => format!("{:?} {value}", intent.location_hint.kind),
        None => format!("{:?}", intent.location_hint.kind),
    };
    println!("  {} {}", label("location", palette), palette.paint(location, ansi::YELLOW));
    println!("  {} {}", label("confidence", palette), palette.bold(format!("{:.2}", intent.confidence)));
}

fn print_plan(plan: &ProviderPlan, palette: &Palette) {
    let on_off = |on: bool| if on { palette.paint("✓", ansi::GREEN) } else { palette.dim("✗") };

    println!("  {} places", on_off(plan.call_places));
    if let Some(q) = &plan.places_query {
        let types = q.types.as_ref().map(|t| t.join(", ")).unwrap_or_else(|| "any".to_string());
        println!(
            "      {} {} m  {} {}  {} {}",
            palette.dim("radius"),
            palette.paint(q.radius_meters.to_string(), ansi::YELLOW),
            palette.dim("│ max"),
            palette.paint(q.max_results.to_string(), ansi::YELLOW),
            palette.dim("│ types"),
            palette.paint(types, ansi::BLUE),
        );
    }

    println!("  {} events", on_off(plan.call_events));
    if let Some(q) = &plan.events_query {
        println!(
            "      {} {} mi  {} {}",
            palette.dim("radius"),
            palette.paint(q.radius_miles.to_string(), ansi::YELLOW),
            palette.dim("│ max"),
            palette.paint(q.max_results.to_string(), ansi::YELLOW),
        );
        if let Some(range) = &q.date_range {
            println!(
                "      {} {} → {}",
                palette.dim("window"),
                palette.paint(range.start.to_rfc3339(), ansi::CYAN),
                palette.paint(range.end.to_rfc3339(), ansi::CYAN),
            );
        }
    }
}
