//! Time, location and filler vocabularies.

use chrono::Weekday;

/// Full weekday names. Plurals count ("fridays").
pub(crate) static WEEKDAY_ALIASES: &[(&str, Weekday)] = &[
    ("monday", Weekday::Mon),
    ("mondays", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("tuesdays", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("wednesdays", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("thursdays", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("fridays", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("saturdays", Weekday::Sat),
    ("sunday", Weekday::Sun),
    ("sundays", Weekday::Sun),
];

/// Short weekday spellings. Several are ordinary words ("sat", "wed"), so
/// they only count as a whole token after "on"/"this"/"next" or at the very
/// end of the query. "sun" is left out.
pub(crate) static WEEKDAY_ABBREVIATIONS: &[(&str, Weekday)] = &[
    ("mon", Weekday::Mon),
    ("tues", Weekday::Tue),
    ("tue", Weekday::Tue),
    ("wed", Weekday::Wed),
    ("thurs", Weekday::Thu),
    ("thur", Weekday::Thu),
    ("thu", Weekday::Thu),
    ("fri", Weekday::Fri),
    ("sat", Weekday::Sat),
];

/// Words that may introduce an abbreviated weekday.
pub(crate) static WEEKDAY_LEADERS: &[&str] = &["on", "this", "next"];

/// Parts of the day. Not time labels, but never a location either.
pub(crate) static PART_OF_DAY_WORDS: &[&str] =
    &["morning", "afternoon", "evening", "night", "midnight", "noon", "lunchtime", "the moment"];

pub(crate) static NEAR_ME_PHRASES: &[&str] = &[
    "near me",
    "nearby",
    "near by",
    "around me",
    "close to me",
    "close by",
    "around here",
    "near here",
    "in my area",
    "my area",
    "in the area",
    "walking distance",
    "closest",
    "nearest",
];

/// Common city spellings and their canonical names.
pub(crate) static CITY_ALIASES: &[(&str, &str)] = aliases! {
    "new york city" => "new york",
    "new york" => "new york",
    "nyc" => "new york",
    "manhattan" => "new york",
    "brooklyn" => "new york",
    "los angeles" => "los angeles",
    "san francisco" => "san francisco",
    "san fran" => "san francisco",
    "sf" => "san francisco",
    "chicago" => "chicago",
    "chi-town" => "chicago",
    "chitown" => "chicago",
    "austin" => "austin",
    "atx" => "austin",
    "boston" => "boston",
    "seattle" => "seattle",
    "miami" => "miami",
    "denver" => "denver",
    "portland" => "portland",
    "nashville" => "nashville",
    "houston" => "houston",
    "dallas" => "dallas",
    "philadelphia" => "philadelphia",
    "philly" => "philadelphia",
    "washington dc" => "washington",
    "dc" => "washington",
    "new orleans" => "new orleans",
    "nola" => "new orleans",
    "las vegas" => "las vegas",
    "vegas" => "las vegas",
    "san diego" => "san diego",
    "atlanta" => "atlanta",
    "london" => "london",
    "paris" => "paris",
};

/// Short city names that are also common words ("la taqueria"). Only
/// accepted as "in <alias>" ending the query.
pub(crate) static GUARDED_CITY_ALIASES: &[(&str, &str)] = aliases! {
    "la" => "los angeles",
};

/// Vague activity phrasing with no concrete subject.
pub(crate) static ABSTRACT_PHRASES: &[&str] = &[
    "things to do",
    "thing to do",
    "stuff to do",
    "something to do",
    "to do",
    "what to do",
    "where to go",
    "places to go",
    "somewhere to go",
    "what's on",
    "whats on",
    "what's happening",
    "whats happening",
    "going on",
    "hang out",
    "hangout",
    "go out",
    "night out",
    "explore",
    "activities",
    "entertainment",
];

/// Tokens never worth keeping as a fallback keyword.
pub(crate) static STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "of", "for", "to", "in", "at", "on", "with", "by", "from", "into",
    "near", "me", "my", "i", "im", "i'm", "we", "us", "our", "you", "your", "is", "are", "be", "was", "it",
    "its", "it's", "some", "something", "somewhere", "anything", "any", "good", "best", "great", "nice", "top",
    "find", "looking", "look", "want", "wanna", "need", "go", "going", "do", "doing", "get", "things", "thing",
    "stuff", "place", "places", "spot", "spots", "where", "what", "whats", "what's", "which", "who", "how",
    "can", "could", "should", "would", "around", "this", "that", "these", "those", "there", "here", "open",
    "really", "very", "lets", "let's", "please", "recommend", "recommendations", "suggest", "ideas", "idea",
    "activities", "activity", "entertainment", "explore", "hang", "out", "up", "now", "right", "next",
    "town", "city", "show", "tell",
];
