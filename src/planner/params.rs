//! Provider query parameters.
//!
//! Radii and caps come from [`PlannerLimits`]; the rules here only pick which
//! limit applies. Every choice that narrows a default leaves a note in the
//! reasoning trail.

use super::Reasoning;
use super::signals::{Signals, Tier};
use crate::config::{PlannerLimits, TierCaps};
use crate::plan::{DateRange, EventsQuery, PLACES_TYPES_LIMIT, PlacesQuery};
use crate::{Category, LocationType, SearchIntent};

/// Category precedence when choosing place-type filters.
const TYPE_PRIORITY: [Category; 9] = [
    Category::Food,
    Category::Nightlife,
    Category::Art,
    Category::History,
    Category::Fitness,
    Category::Outdoor,
    Category::Social,
    Category::Other,
    Category::Music,
];

/// Provider-level place types for a category. Empty means "no filter".
fn place_types(category: Category) -> &'static [&'static str] {
    match category {
        Category::Food => &["restaurant", "cafe", "bakery"],
        Category::Nightlife => &["bar", "night_club"],
        Category::Art => &["museum", "art_gallery"],
        Category::History => &["historical_landmark", "museum", "tourist_attraction"],
        Category::Fitness => &["gym", "fitness_center", "sports_complex"],
        Category::Outdoor => &["park", "hiking_area", "national_park"],
        Category::Social => &["bar", "cafe", "bowling_alley"],
        Category::Other | Category::Music => &[],
    }
}

fn cap(caps: &TierCaps, tier: Tier) -> u32 {
    match tier {
        Tier::Low => caps.low,
        Tier::Medium => caps.medium,
        Tier::High => caps.high,
    }
}

pub fn places_query(intent: &SearchIntent, tier: Tier, signals: Signals, limits: &PlannerLimits, trail: &mut Reasoning) -> PlacesQuery {
    let candidates = [
        (signals.contains(Signals::NIGHTLIFE), limits.nightlife_radius_m, "nightlife"),
        (signals.contains(Signals::SOCIAL), limits.social_radius_m, "social"),
        (tier == Tier::Low, limits.low_confidence_radius_m, "low confidence"),
    ];
    let mut radius_meters = limits.places_radius_m;
    let mut narrowed_by = None;
    for (applies, radius, why) in candidates {
        if applies && radius < radius_meters {
            radius_meters = radius;
            narrowed_by = Some(why);
        }
    }
    match narrowed_by {
        Some(why) => trail.note(format!("places radius {radius_meters} m ({why})")),
        None => trail.note(format!("places radius {radius_meters} m")),
    }

    let max_results = cap(&limits.places_max_results, tier);

    let types = TYPE_PRIORITY
        .iter()
        .copied()
        .filter(|c| intent.has_category(*c))
        .map(place_types)
        .find(|types| !types.is_empty())
        .map(|types| types.iter().take(PLACES_TYPES_LIMIT).map(|t| t.to_string()).collect::<Vec<_>>());
    if let Some(types) = &types {
        trail.note(format!("place types: {}", types.join(", ")));
    }

    PlacesQuery { radius_meters, max_results, types }
}

/// Events query, or the incidental variant when events were enabled only by a
/// time mention.
pub fn events_query(
    intent: &SearchIntent,
    tier: Tier,
    incidental: bool,
    date_range: Option<DateRange>,
    limits: &PlannerLimits,
    trail: &mut Reasoning,
) -> EventsQuery {
    let mut radius_miles = limits.events_radius_mi;
    let mut why = None;

    let city = match (&intent.location_hint.kind, &intent.location_hint.value) {
        (LocationType::City, Some(city)) if limits.is_major_city(city) => Some(city.as_str()),
        _ => None,
    };
    if let Some(city) = city {
        radius_miles = limits.major_city_radius_mi;
        why = Some(format!("major city: {city}"));
    }
    if tier == Tier::Low {
        radius_miles = limits.low_confidence_radius_mi;
        why = Some("low confidence".to_string());
    }

    let mut max_results = cap(&limits.events_max_results, tier);

    if incidental {
        radius_miles = radius_miles.min(limits.incidental_radius_mi);
        max_results = max_results.min(limits.incidental_max_results);
        trail.note(format!(
            "cost safeguard: events enabled only by a time mention, limited to {radius_miles} mi and {max_results} results"
        ));
    } else {
        match why {
            Some(why) => trail.note(format!("events radius {radius_miles} mi ({why})")),
            None => trail.note(format!("events radius {radius_miles} mi")),
        }
    }

    EventsQuery { radius_miles, max_results, date_range }
}
