//! Place nouns, event nouns and vibe adjectives.
//!
//! Canonical terms must be unique across all three tables: the planner tells
//! place keywords from event keywords by canonical name alone.

use crate::lexicon::Entry;

pub(crate) static PLACE_ENTRIES: &[Entry] = &[
    entry!("restaurant" => [
        "restaurant", "restaurants", "food", "eat", "eats", "eatery", "eateries", "dinner", "lunch", "brunch",
        "breakfast", "pizza", "pizzeria", "sushi", "ramen", "taco", "tacos", "burger", "burgers", "bbq",
        "barbecue", "diner", "steakhouse", "noodles", "place to eat", "places to eat",
    ], categories: [Food]),
    entry!("cafe" => [
        "cafe", "cafes", "coffee", "coffee shop", "coffee shops", "espresso", "tea", "bakery", "bakeries",
        "dessert", "desserts", "ice cream",
    ], categories: [Food]),
    entry!("bar" => [
        "bar", "bars", "pub", "pubs", "brewery", "breweries", "taproom", "cocktail", "cocktails", "cocktail bar",
        "wine bar", "dive bar", "speakeasy", "drinks", "happy hour", "beer",
    ], categories: [Nightlife]),
    entry!("club" => [
        "club", "clubs", "nightclub", "nightclubs", "dance club", "lounge", "lounges",
    ], categories: [Nightlife]),
    entry!("museum" => [
        "museum", "museums", "gallery", "galleries", "art gallery",
    ], categories: [Art]),
    entry!("landmark" => [
        "landmark", "landmarks", "monument", "monuments", "memorial", "historic site", "historic sites",
    ], categories: [History]),
    entry!("park" => [
        "park", "parks", "garden", "gardens", "playground", "beach", "beaches", "lake", "picnic",
    ], categories: [Outdoor]),
    entry!("trail" => [
        "trail", "trails", "hike", "hikes", "hiking", "nature walk",
    ], categories: [Outdoor]),
    entry!("gym" => [
        "gym", "gyms", "fitness center", "workout", "workouts", "yoga studio", "climbing gym", "pool",
        "swimming pool",
    ], categories: [Fitness]),
    entry!("shopping" => [
        "shopping", "store", "stores", "boutique", "boutiques", "mall", "bookstore", "bookstores",
    ]),
    entry!("spa" => ["spa", "spas", "massage"]),
];

pub(crate) static EVENT_ENTRIES: &[Entry] = &[
    entry!("concert" => [
        "concert", "concerts", "live music", "live show", "live shows", "gig", "gigs", "jazz", "band", "bands",
        "dj set",
    ], categories: [Music]),
    entry!("festival" => [
        "festival", "festivals", "fest", "music festival",
    ], categories: [Music]),
    entry!("exhibit" => [
        "exhibit", "exhibits", "exhibition", "exhibitions",
    ], categories: [Art, History]),
    entry!("theater" => [
        "theater", "theatre", "broadway", "stage play", "musical", "musicals", "opera", "ballet",
    ], categories: [Art]),
    entry!("comedy" => [
        "comedy", "comedy show", "comedy shows", "stand-up", "standup", "open mic", "improv",
    ], categories: [Art]),
    entry!("game" => [
        "game", "games", "match", "matches", "sports", "basketball", "football", "baseball", "soccer", "hockey",
    ], categories: [Fitness]),
    entry!("party" => [
        "party", "parties", "rave", "raves", "dance party",
    ], categories: [Nightlife]),
    entry!("trivia" => [
        "trivia", "trivia night", "quiz night", "karaoke", "meetup", "meetups",
    ], categories: [Social]),
    entry!("class" => [
        "cooking class", "cooking classes", "art class", "art classes", "dance class", "dance classes",
        "yoga class", "yoga classes", "pottery class", "pottery classes", "workshop", "workshops",
    ]),
    entry!("market" => [
        "farmers market", "flea market", "night market", "pop-up", "popup",
    ]),
    entry!("event" => [
        "event", "events", "happening", "happenings",
    ]),
];

pub(crate) static VIBE_ENTRIES: &[Entry] = &[
    entry!("lively" => ["lively", "buzzing", "energetic", "vibrant", "busy", "packed", "hopping"]),
    entry!("relaxing" => [
        "relaxing", "relaxed", "chill", "calm", "quiet", "peaceful", "cozy", "low-key", "laid back", "laid-back",
    ]),
    entry!("romantic" => ["romantic", "date night", "date", "intimate"]),
    entry!("fun" => ["fun", "exciting", "entertaining", "cool"]),
    entry!("social" => ["social", "meet people", "friends", "with friends", "group"], categories: [Social]),
    entry!("family" => ["family", "family-friendly", "kid-friendly", "kids"]),
    entry!("outdoorsy" => ["outdoor", "outdoors", "outside", "open air"], categories: [Outdoor]),
    entry!("cheap" => ["cheap", "affordable", "budget", "free", "inexpensive"]),
    entry!("upscale" => ["upscale", "fancy", "classy", "fine dining", "luxury"]),
    entry!("unique" => ["unique", "hidden gem", "hidden gems", "quirky", "local"]),
];
